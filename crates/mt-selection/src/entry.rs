//! Selection entries: value copies of catalog data taken at selection time.

use mt_catalog::Resolved;
use mt_common::RecommendationId;
use serde::{Deserialize, Serialize};

/// Everything the report needs about one recommendation, copied out of
/// the catalog so stored selections never depend on it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    /// Owning category's title; reports group by this.
    pub category_title: String,
    /// Owning category's UPOS tag.
    pub upos: String,
    /// Owning category's XPOS tag list.
    pub xpos_tags: Vec<String>,
    /// Scenario context label.
    pub context: String,
    /// Scenario guiding question.
    pub question: String,
    pub choice: String,
    pub xpos: String,
    pub feats: String,
    pub condition: String,
    pub examples: Vec<String>,
    pub rule: String,
    pub decision_factors: Vec<String>,
}

impl RecommendationSnapshot {
    /// Copy the fields of a resolved recommendation and its owners.
    pub fn capture(resolved: &Resolved<'_>) -> Self {
        let category = resolved.category;
        let scenario = resolved.scenario;
        let rec = resolved.recommendation;
        RecommendationSnapshot {
            category_title: category.title.clone(),
            upos: category.upos.clone(),
            xpos_tags: category.xpos_tags.clone(),
            context: scenario.context.clone(),
            question: scenario.question.clone(),
            choice: rec.choice.clone(),
            xpos: rec.xpos.clone(),
            feats: rec.feats.clone(),
            condition: rec.condition.clone(),
            examples: rec.examples.clone(),
            rule: rec.rule.clone(),
            decision_factors: rec.decision_factors.clone(),
        }
    }

    /// Canonical UD-style tag triple: `<UPOS> <XPOS> <feats>`.
    pub fn ud_format(&self) -> String {
        format!("{} {} {}", self.upos, self.xpos, self.feats)
    }
}

/// One member of a [`crate::SelectionSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: RecommendationId,
    #[serde(flatten)]
    pub snapshot: RecommendationSnapshot,
}

impl SelectionEntry {
    pub fn new(id: RecommendationId, snapshot: RecommendationSnapshot) -> Self {
        SelectionEntry { id, snapshot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_catalog::load_catalog;
    use mt_common::CategoryKey;

    #[test]
    fn test_capture_copies_owner_fields() {
        let id = RecommendationId::new(CategoryKey::Noun, 0, 0);
        let resolved = load_catalog().resolve(&id).unwrap();
        let snap = RecommendationSnapshot::capture(&resolved);

        assert_eq!(snap.category_title, "NOUN Complete Analysis (NN, NNP, NNS)");
        assert_eq!(snap.upos, "NOUN");
        assert_eq!(snap.xpos_tags, vec!["NN", "NNP", "NNS"]);
        assert_eq!(snap.context, "Number and Case Selection");
        assert_eq!(snap.question, "Which noun form should I use?");
        assert_eq!(
            snap.ud_format(),
            "NOUN NN Number=Sing | Case=Nom | Gender=Masc/Fem/Neut"
        );
    }

    #[test]
    fn test_entry_serializes_flat() {
        let id = RecommendationId::new(CategoryKey::Determiner, 0, 1);
        let resolved = load_catalog().resolve(&id).unwrap();
        let entry = SelectionEntry::new(id, RecommendationSnapshot::capture(&resolved));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "DETERMINER_analysis_0_1");
        assert_eq!(json["xpos"], "DT");
        assert_eq!(json["feats"], "PronType=Dem");
    }
}
