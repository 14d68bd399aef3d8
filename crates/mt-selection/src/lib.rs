//! Session-scoped selection of catalog recommendations.
//!
//! One [`SelectionSet`] belongs to one working session. The hosting
//! application owns it and passes it by reference into every operation;
//! nothing here keeps ambient state. The catalog is only read.
//!
//! # Example
//!
//! ```
//! use mt_catalog::load_catalog;
//! use mt_selection::{list_selection, toggle_selection, SelectionSet};
//!
//! let catalog = load_catalog();
//! let mut set = SelectionSet::new();
//! let id = "VERB_analysis_0_1".parse().unwrap();
//! toggle_selection(catalog, &mut set, &id, true).unwrap();
//! assert_eq!(list_selection(&set)[0].snapshot.xpos, "VINF");
//! ```

pub mod entry;
pub mod set;

pub use entry::{RecommendationSnapshot, SelectionEntry};
pub use set::{SelectionSet, ToggleOutcome};

use mt_catalog::Catalog;
use mt_common::{Error, RecommendationId, Result};
use tracing::{debug, warn};

/// Select or deselect a catalog recommendation.
///
/// The identifier is checked against `catalog` first; an identifier
/// outside the catalog is rejected with [`Error::UnknownIdentifier`] and
/// `set` is left untouched.
pub fn toggle_selection(
    catalog: &Catalog,
    set: &mut SelectionSet,
    id: &RecommendationId,
    selected: bool,
) -> Result<ToggleOutcome> {
    let Some(resolved) = catalog.resolve(id) else {
        warn!(id = %id, selected, "Rejected toggle for unknown recommendation");
        return Err(Error::UnknownIdentifier { id: id.to_string() });
    };

    let outcome = if selected {
        set.insert(*id, RecommendationSnapshot::capture(&resolved))
    } else {
        set.remove(id)
    };

    debug!(id = %id, selected, outcome = %outcome, count = set.count(), "Selection toggled");
    Ok(outcome)
}

/// Entries of `set` in insertion order, oldest first.
pub fn list_selection(set: &SelectionSet) -> Vec<SelectionEntry> {
    set.entries()
}

/// Remove every entry from `set`.
pub fn clear_selection(set: &mut SelectionSet) {
    let cleared = set.count();
    set.clear();
    debug!(cleared, "Selection cleared");
}
