//! The built-in tagging guidance catalog.
//!
//! The data ships inside the binary as a JSON document so it is parsed by
//! the same typed records and validated by the same rules as any other
//! catalog. Document order is catalog order.

use crate::validate::ValidationResult;
use crate::Catalog;
use tracing::debug;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Morphological features per UPOS, shown on the catalog overview.
pub const FEATURE_OVERVIEW: &[(&str, &str)] = &[
    ("VERB", "Honorificity=Yes/No, Tense, Aspect, Mood, Voice"),
    (
        "ADV",
        "AdvType=Manner/Temporal/Locative/Frequentative/Resultative",
    ),
    ("CONJ", "ConjType=Coordinating/Correlative/Subordinating"),
    ("PRON", "Honorificity=Yes/No, Person, Number, Case"),
];

/// Parse and validate the embedded catalog document.
pub fn build() -> ValidationResult<Catalog> {
    let catalog = Catalog::from_json(BUILTIN_CATALOG_JSON)?;
    debug!(
        categories = catalog.categories().len(),
        recommendations = catalog.recommendation_count(),
        "Built-in catalog loaded"
    );
    Ok(catalog)
}
