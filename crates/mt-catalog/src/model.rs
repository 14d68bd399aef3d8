//! Typed catalog records.
//!
//! The catalog is a fixed three-level tree: a [`Category`] owns ordered
//! [`Scenario`]s, and each scenario owns ordered [`Recommendation`]s. List
//! positions are part of a recommendation's identity, so none of these
//! types expose mutation once a [`crate::Catalog`] has been built.

use mt_common::{CategoryKey, RecommendationId};
use serde::{Deserialize, Serialize};

/// One grammatical category (e.g. nouns) with its tagging scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable, catalog-unique key.
    pub key: CategoryKey,
    /// Display title, also the grouping key in exported reports.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Universal part-of-speech tag.
    pub upos: String,
    /// Language-specific tags covered by this category, in display order.
    pub xpos_tags: Vec<String>,
    /// Usage scenarios, index-addressable.
    pub scenarios: Vec<Scenario>,
}

impl Category {
    /// XPOS tags joined for display, e.g. `NN • NNP • NNS`.
    pub fn xpos_display(&self) -> String {
        self.xpos_tags.join(" • ")
    }

    /// Scenario at `index`, if any.
    pub fn scenario(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Number of recommendations across all scenarios.
    pub fn recommendation_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.recommendations.len()).sum()
    }

    /// Identifiers of every recommendation in this category, in order.
    pub fn ids(&self) -> impl Iterator<Item = RecommendationId> + '_ {
        self.scenarios
            .iter()
            .enumerate()
            .flat_map(move |(scenario_idx, scenario)| {
                (0..scenario.recommendations.len())
                    .map(move |rec_idx| RecommendationId::new(self.key, scenario_idx, rec_idx))
            })
    }
}

/// A usage context within a category and the question it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Context label, e.g. `Number and Case Selection`.
    pub context: String,
    /// Guiding question shown to the annotator.
    pub question: String,
    /// Candidate tags, index-addressable.
    pub recommendations: Vec<Recommendation>,
}

/// One recommended tag with its feature annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Human-readable choice label.
    pub choice: String,
    /// Recommended XPOS tag.
    pub xpos: String,
    /// Pipe-separated `Key=Value` feature string.
    pub feats: String,
    /// When this recommendation applies.
    #[serde(rename = "when")]
    pub condition: String,
    /// Example sentences.
    pub examples: Vec<String>,
    /// Morphological rule line.
    #[serde(rename = "morphological_rules")]
    pub rule: String,
    /// Factors that point to this choice. May be empty.
    #[serde(default)]
    pub decision_factors: Vec<String>,
}

impl Recommendation {
    /// Canonical UD-style tag triple: `<UPOS> <XPOS> <feats>`.
    pub fn ud_format(&self, upos: &str) -> String {
        format!("{} {} {}", upos, self.xpos, self.feats)
    }
}

/// A recommendation together with the records that own it.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub id: RecommendationId,
    pub category: &'a Category,
    pub scenario: &'a Scenario,
    pub recommendation: &'a Recommendation,
}

impl Resolved<'_> {
    /// UD tag triple using the owning category's UPOS.
    pub fn ud_format(&self) -> String {
        self.recommendation.ud_format(&self.category.upos)
    }
}
