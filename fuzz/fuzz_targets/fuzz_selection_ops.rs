//! Fuzz target for selection toggling followed by report rendering.
//!
//! Indices are taken modulo the catalog size so most operations hit real
//! recommendations; the rest probe out-of-range identifiers.

#![no_main]

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use mt_catalog::load_catalog;
use mt_common::{CategoryKey, RecommendationId};
use mt_report::generate_report;
use mt_selection::{toggle_selection, SelectionSet};

#[derive(Debug, Arbitrary)]
struct Toggle {
    category: u8,
    scenario: u8,
    recommendation: u8,
    selected: bool,
}

fuzz_target!(|ops: Vec<Toggle>| {
    let catalog = load_catalog();
    let mut set = SelectionSet::new();

    for op in &ops {
        let key = CategoryKey::ALL[op.category as usize % CategoryKey::ALL.len()];
        let id = RecommendationId::new(key, (op.scenario % 4) as usize, (op.recommendation % 8) as usize);
        let before = set.count();
        match toggle_selection(catalog, &mut set, &id, op.selected) {
            Ok(_) => assert_eq!(set.contains(&id), op.selected),
            Err(_) => assert_eq!(set.count(), before),
        }
    }

    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");
    let report = generate_report(set.list(), now);
    if set.is_empty() {
        assert_eq!(report, "No recommendations selected.");
    } else {
        let total = format!("Total Selected: {} recommendations\n", set.count());
        assert!(report.ends_with(&total));
    }
});
