//! Fuzz target for catalog document loading.
//!
//! Arbitrary documents must either be rejected with an integrity error or
//! yield a catalog whose every identifier resolves.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mt_catalog::Catalog;

fuzz_target!(|data: &str| {
    if let Ok(catalog) = Catalog::from_json(data) {
        for id in catalog.ids() {
            assert!(catalog.resolve(&id).is_some());
        }
    }
});
