//! Catalog integrity errors and construction-time validation.

use crate::model::Category;
use mt_common::{CategoryKey, RecommendationId};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, CatalogIntegrityError>;

/// The catalog failed one of its construction invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIntegrityError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("Duplicate category key: {0}")]
    DuplicateKey(CategoryKey),

    #[error("Missing required field '{field}' in {location}")]
    MissingField {
        location: String,
        field: &'static str,
    },
}

impl CatalogIntegrityError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            CatalogIntegrityError::ParseError(_) => 11,
            CatalogIntegrityError::VersionMismatch { .. } => 12,
            CatalogIntegrityError::DuplicateKey(_) => 13,
            CatalogIntegrityError::MissingField { .. } => 14,
        }
    }
}

impl From<CatalogIntegrityError> for mt_common::Error {
    fn from(err: CatalogIntegrityError) -> Self {
        mt_common::Error::CatalogIntegrity(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogIntegrityError {
    fn from(err: serde_json::Error) -> Self {
        CatalogIntegrityError::ParseError(err.to_string())
    }
}

/// Validate a catalog document's schema version.
pub fn validate_schema_version(actual: &str) -> ValidationResult<()> {
    if actual != crate::CATALOG_SCHEMA_VERSION {
        return Err(CatalogIntegrityError::VersionMismatch {
            expected: crate::CATALOG_SCHEMA_VERSION.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Validate the category list: unique keys and required fields.
pub fn validate_categories(categories: &[Category]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(categories.len());
    for category in categories {
        if !seen.insert(category.key) {
            return Err(CatalogIntegrityError::DuplicateKey(category.key));
        }
        validate_category(category)?;
    }
    Ok(())
}

fn validate_category(category: &Category) -> ValidationResult<()> {
    require(&category.title, category.key.as_str(), "title")?;

    for (scenario_idx, scenario) in category.scenarios.iter().enumerate() {
        for (rec_idx, rec) in scenario.recommendations.iter().enumerate() {
            let location = RecommendationId::new(category.key, scenario_idx, rec_idx).to_string();
            require(&rec.choice, &location, "choice")?;
            require(&rec.xpos, &location, "xpos")?;
            require(&rec.feats, &location, "feats")?;
        }
    }

    Ok(())
}

fn require(value: &str, location: &str, field: &'static str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogIntegrityError::MissingField {
            location: location.to_string(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recommendation, Scenario};

    fn category(key: CategoryKey) -> Category {
        Category {
            key,
            title: format!("{} Complete Analysis", key.name()),
            description: String::new(),
            upos: key.name().to_string(),
            xpos_tags: vec!["XX".to_string()],
            scenarios: vec![Scenario {
                context: "ctx".to_string(),
                question: "q?".to_string(),
                recommendations: vec![Recommendation {
                    choice: "Use XX".to_string(),
                    xpos: "XX".to_string(),
                    feats: "Foo=Bar".to_string(),
                    condition: "always".to_string(),
                    examples: vec![],
                    rule: "XX: Foo=Bar".to_string(),
                    decision_factors: vec![],
                }],
            }],
        }
    }

    #[test]
    fn test_valid_categories_pass() {
        let cats = vec![category(CategoryKey::Noun), category(CategoryKey::Verb)];
        assert!(validate_categories(&cats).is_ok());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let cats = vec![category(CategoryKey::Noun), category(CategoryKey::Noun)];
        assert_eq!(
            validate_categories(&cats),
            Err(CatalogIntegrityError::DuplicateKey(CategoryKey::Noun))
        );
    }

    #[test]
    fn test_blank_feats_rejected_with_location() {
        let mut cat = category(CategoryKey::Particle);
        cat.scenarios[0].recommendations[0].feats = "  ".to_string();
        let err = validate_categories(&[cat]).unwrap_err();
        assert_eq!(
            err,
            CatalogIntegrityError::MissingField {
                location: "PARTICLE_analysis_0_0".to_string(),
                field: "feats",
            }
        );
        assert_eq!(err.code(), 14);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut cat = category(CategoryKey::Number);
        cat.title.clear();
        let err = validate_categories(&[cat]).unwrap_err();
        assert!(matches!(
            err,
            CatalogIntegrityError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_schema_version() {
        assert!(validate_schema_version(crate::CATALOG_SCHEMA_VERSION).is_ok());
        assert!(matches!(
            validate_schema_version("0.9.0"),
            Err(CatalogIntegrityError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_converts_to_fatal_common_error() {
        let err: mt_common::Error = CatalogIntegrityError::DuplicateKey(CategoryKey::Verb).into();
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("VERB_analysis"));
    }
}
