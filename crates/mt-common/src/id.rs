//! Catalog and session identity types.
//!
//! A recommendation is uniquely identified by the
//! `(category key, scenario index, recommendation index)` triple. The
//! category part is a closed set, so a key that is not in the catalog is
//! rejected at parse time rather than carried around as a loose string.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix shared by every category key's stable string form.
const KEY_SUFFIX: &str = "_analysis";

/// Key of one grammatical category in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryKey {
    #[serde(rename = "NOUN_analysis")]
    Noun,
    #[serde(rename = "VERB_analysis")]
    Verb,
    #[serde(rename = "ADVERB_analysis")]
    Adverb,
    #[serde(rename = "PRONOUN_analysis")]
    Pronoun,
    #[serde(rename = "CONJUNCTION_analysis")]
    Conjunction,
    #[serde(rename = "DETERMINER_analysis")]
    Determiner,
    #[serde(rename = "PREPOSITION_analysis")]
    Preposition,
    #[serde(rename = "NUMBER_analysis")]
    Number,
    #[serde(rename = "PARTICLE_analysis")]
    Particle,
}

impl CategoryKey {
    /// All category keys, in catalog order.
    pub const ALL: &'static [CategoryKey] = &[
        CategoryKey::Noun,
        CategoryKey::Verb,
        CategoryKey::Adverb,
        CategoryKey::Pronoun,
        CategoryKey::Conjunction,
        CategoryKey::Determiner,
        CategoryKey::Preposition,
        CategoryKey::Number,
        CategoryKey::Particle,
    ];

    /// Stable string form, e.g. `NOUN_analysis`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Noun => "NOUN_analysis",
            CategoryKey::Verb => "VERB_analysis",
            CategoryKey::Adverb => "ADVERB_analysis",
            CategoryKey::Pronoun => "PRONOUN_analysis",
            CategoryKey::Conjunction => "CONJUNCTION_analysis",
            CategoryKey::Determiner => "DETERMINER_analysis",
            CategoryKey::Preposition => "PREPOSITION_analysis",
            CategoryKey::Number => "NUMBER_analysis",
            CategoryKey::Particle => "PARTICLE_analysis",
        }
    }

    /// Short name without the `_analysis` suffix, e.g. `NOUN`.
    pub fn name(&self) -> &'static str {
        let key = self.as_str();
        &key[..key.len() - KEY_SUFFIX.len()]
    }

    /// Parse a key from its stable form or its bare name, ignoring case.
    pub fn parse(s: &str) -> Option<CategoryKey> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper.strip_suffix("_ANALYSIS").unwrap_or(&upper);
        CategoryKey::ALL.iter().copied().find(|key| key.name() == bare)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CategoryKey::parse(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Composite identifier of one recommendation.
///
/// Text form: `<category key>_<scenario index>_<recommendation index>`,
/// e.g. `NOUN_analysis_0_2`. Indexes are zero-based positions in the
/// catalog's ordered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecommendationId {
    pub category: CategoryKey,
    pub scenario: usize,
    pub recommendation: usize,
}

impl RecommendationId {
    pub fn new(category: CategoryKey, scenario: usize, recommendation: usize) -> Self {
        RecommendationId {
            category,
            scenario,
            recommendation,
        }
    }

    /// Parse the text form. Splits from the right since keys contain `_`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidIdentifier {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.trim().rsplitn(3, '_');
        let recommendation = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| invalid("missing recommendation index"))?;
        let scenario = parts
            .next()
            .ok_or_else(|| invalid("missing scenario index"))?;
        let key = parts
            .next()
            .ok_or_else(|| invalid("missing category key"))?;

        let recommendation = parse_index(recommendation)
            .ok_or_else(|| invalid("recommendation index is not a canonical number"))?;
        let scenario = parse_index(scenario)
            .ok_or_else(|| invalid("scenario index is not a canonical number"))?;
        let category = key.parse::<CategoryKey>()?;

        Ok(RecommendationId::new(category, scenario, recommendation))
    }
}

/// Decimal index without sign or leading zeros, so each index has one spelling.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.category, self.scenario, self.recommendation
        )
    }
}

impl FromStr for RecommendationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RecommendationId::parse(s)
    }
}

impl TryFrom<String> for RecommendationId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        RecommendationId::parse(&s)
    }
}

impl From<RecommendationId> for String {
    fn from(id: RecommendationId) -> Self {
        id.to_string()
    }
}

/// Session ID for correlating the log lines of one working session.
///
/// Format: `mt-YYYYMMDD-HHMMSS-XXXX`
/// Example: `mt-20260115-143022-a7xq`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new session ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let suffix = generate_base32_suffix();
        SessionId(format!(
            "mt-{}-{}-{}",
            now.format("%Y%m%d"),
            now.format("%H%M%S"),
            suffix
        ))
    }

    /// Parse an existing session ID string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 23 {
            return None;
        }
        let bytes = s.as_bytes();
        if !s.starts_with("mt-") || bytes.get(11) != Some(&b'-') || bytes.get(18) != Some(&b'-') {
            return None;
        }
        let date = &s[3..11];
        let time = &s[12..18];
        let suffix = &s[19..23];
        if !date.chars().all(|c| c.is_ascii_digit()) || !time.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if !suffix.chars().all(|c| matches!(c, 'a'..='z' | '2'..='7')) {
            return None;
        }
        Some(SessionId(s.to_string()))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn generate_base32_suffix() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    let mut value = ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32);
    value &= 0x000F_FFFF;
    let alphabet = b"abcdefghijklmnopqrstuvwxyz234567";
    let mut out = String::with_capacity(4);
    for shift in [15_u32, 10, 5, 0] {
        let idx = ((value >> shift) & 0x1F) as usize;
        out.push(alphabet[idx] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key_forms() {
        assert_eq!(CategoryKey::Noun.as_str(), "NOUN_analysis");
        assert_eq!(CategoryKey::Noun.name(), "NOUN");
        assert_eq!(CategoryKey::Particle.name(), "PARTICLE");
    }

    #[test]
    fn test_category_key_parse() {
        assert_eq!(CategoryKey::parse("VERB_analysis"), Some(CategoryKey::Verb));
        assert_eq!(CategoryKey::parse("verb"), Some(CategoryKey::Verb));
        assert_eq!(CategoryKey::parse("Adverb_Analysis"), Some(CategoryKey::Adverb));
        assert_eq!(CategoryKey::parse("ADJ_analysis"), None);
        assert_eq!(CategoryKey::parse(""), None);
    }

    #[test]
    fn test_category_key_unknown_error() {
        let err = "INTERJ".parse::<CategoryKey>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref s) if s == "INTERJ"));
    }

    #[test]
    fn test_recommendation_id_display() {
        let id = RecommendationId::new(CategoryKey::Noun, 0, 2);
        assert_eq!(id.to_string(), "NOUN_analysis_0_2");
    }

    #[test]
    fn test_recommendation_id_parse() {
        let id = RecommendationId::parse("PRONOUN_analysis_1_0").unwrap();
        assert_eq!(id.category, CategoryKey::Pronoun);
        assert_eq!(id.scenario, 1);
        assert_eq!(id.recommendation, 0);
    }

    #[test]
    fn test_recommendation_id_parse_rejects_malformed() {
        for input in [
            "",
            "NOUN_analysis",
            "NOUN_analysis_0",
            "NOUN_analysis_0_",
            "NOUN_analysis_x_1",
            "NOUN_analysis_1_-1",
        ] {
            let err = RecommendationId::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIdentifier { .. } | Error::UnknownCategory(_)),
                "unexpected error for {input:?}: {err}"
            );
        }
    }

    #[test]
    fn test_recommendation_id_rejects_non_canonical_indexes() {
        for input in [
            "NOUN_analysis_+0_01",
            "NOUN_analysis_0_01",
            "NOUN_analysis_00_1",
            " NOUN_analysis_+1_0",
            "NOUN_analysis_1_+0",
        ] {
            let err = RecommendationId::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIdentifier { .. }),
                "unexpected result for {input:?}: {err}"
            );
        }

        let id = RecommendationId::parse("NOUN_analysis_10_0").unwrap();
        assert_eq!(id.scenario, 10);
        assert_eq!(id.to_string(), "NOUN_analysis_10_0");
    }

    #[test]
    fn test_recommendation_id_unknown_category() {
        let err = RecommendationId::parse("ADJ_analysis_0_0").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(_)));
    }

    #[test]
    fn test_recommendation_id_serializes_as_text() {
        let id = RecommendationId::new(CategoryKey::Verb, 1, 0);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"VERB_analysis_1_0\"");
        let back: RecommendationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_session_id_format() {
        let sid = SessionId::new();
        assert!(sid.0.starts_with("mt-"));
        assert_eq!(sid.0.len(), 23);
        assert!(SessionId::parse(&sid.0).is_some());
    }

    #[test]
    fn test_session_id_parse_rejects_other_prefix() {
        assert!(SessionId::parse("pt-20260115-143022-a7xq").is_none());
        assert!(SessionId::parse("mt-2026011-143022-a7xq").is_none());
    }
}
