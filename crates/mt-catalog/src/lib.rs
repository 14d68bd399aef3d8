//! Morphological tagging guidance catalog.
//!
//! This crate provides:
//! - Typed records for categories, scenarios, and recommendations
//! - The built-in catalog, parsed once and shared read-only
//! - Construction-time integrity validation
//! - Lookup by composite [`RecommendationId`]
//!
//! # Example
//!
//! ```
//! use mt_catalog::load_catalog;
//! use mt_common::RecommendationId;
//!
//! let catalog = load_catalog();
//! let id: RecommendationId = "NOUN_analysis_0_0".parse().unwrap();
//! let rec = catalog.lookup(&id).unwrap();
//! assert_eq!(rec.xpos, "NN");
//! ```

pub mod builtin;
pub mod model;
pub mod validate;

pub use builtin::FEATURE_OVERVIEW;
pub use model::{Category, Recommendation, Resolved, Scenario};
pub use validate::{CatalogIntegrityError, ValidationResult};

use mt_common::{CategoryKey, RecommendationId};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::error;

/// Schema version of the catalog document.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0.0";

static BUILTIN: OnceLock<ValidationResult<Catalog>> = OnceLock::new();

/// Serialized form of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    schema_version: String,
    categories: Vec<Category>,
}

/// An immutable, validated catalog.
///
/// Construction goes through [`Catalog::from_categories`] or
/// [`Catalog::from_json`], both of which enforce the integrity rules, so
/// every `Catalog` value in existence is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    schema_version: String,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from categories in display order.
    pub fn from_categories(categories: Vec<Category>) -> ValidationResult<Self> {
        validate::validate_categories(&categories)?;
        Ok(Catalog {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            categories,
        })
    }

    /// Parse a catalog document and validate it.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        validate::validate_schema_version(&doc.schema_version)?;
        Catalog::from_categories(doc.categories)
    }

    /// Schema version this catalog was built from.
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category with the given key, if present.
    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Recommendation addressed by `id`, or `None` when any part of the
    /// triple is out of range.
    pub fn lookup(&self, id: &RecommendationId) -> Option<&Recommendation> {
        self.resolve(id).map(|r| r.recommendation)
    }

    /// Recommendation addressed by `id` together with its owners.
    pub fn resolve(&self, id: &RecommendationId) -> Option<Resolved<'_>> {
        let category = self.category(id.category)?;
        let scenario = category.scenario(id.scenario)?;
        let recommendation = scenario.recommendations.get(id.recommendation)?;
        Some(Resolved {
            id: *id,
            category,
            scenario,
            recommendation,
        })
    }

    /// Every valid identifier, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = RecommendationId> + '_ {
        self.categories.iter().flat_map(|c| c.ids())
    }

    /// Total number of recommendations.
    pub fn recommendation_count(&self) -> usize {
        self.categories.iter().map(|c| c.recommendation_count()).sum()
    }
}

/// The built-in catalog, or the integrity error that prevented building it.
///
/// Built on first call and cached for the life of the process.
pub fn try_load_catalog() -> ValidationResult<&'static Catalog> {
    BUILTIN
        .get_or_init(builtin::build)
        .as_ref()
        .map_err(Clone::clone)
}

/// The built-in catalog.
///
/// # Panics
///
/// Panics if the embedded catalog violates its integrity rules. That is a
/// build defect, so binaries call [`try_load_catalog`] once at startup to
/// fail with a clean message instead.
pub fn load_catalog() -> &'static Catalog {
    match try_load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "Built-in catalog failed integrity validation");
            panic!("built-in catalog failed integrity validation: {err}");
        }
    }
}
