//! Fuzz target for recommendation identifier parsing.
//!
//! Any string that parses must print back to a string that parses to the
//! same identifier.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mt_common::RecommendationId;

fuzz_target!(|data: &str| {
    if let Ok(id) = data.parse::<RecommendationId>() {
        let reparsed: RecommendationId = id.to_string().parse().expect("display form parses");
        assert_eq!(id, reparsed);
    }
});
