//! Property-based tests for identifier parsing.

use mt_common::{CategoryKey, Error, RecommendationId};
use proptest::prelude::*;

fn category_key() -> impl Strategy<Value = CategoryKey> {
    prop::sample::select(CategoryKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn text_form_identifies_exactly_one_triple(
        key in category_key(),
        scenario in 0usize..64,
        recommendation in 0usize..64,
    ) {
        let id = RecommendationId::new(key, scenario, recommendation);
        let parsed: RecommendationId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".{0,40}") {
        match RecommendationId::parse(&input) {
            Ok(id) => prop_assert!(CategoryKey::ALL.contains(&id.category)),
            Err(err) => {
                let expected = matches!(
                    err,
                    Error::InvalidIdentifier { .. } | Error::UnknownCategory(_)
                );
                prop_assert!(expected, "unexpected error for {:?}: {}", input, err);
            }
        }
    }

    #[test]
    fn padded_indexes_are_rejected(
        key in category_key(),
        scenario in 0usize..64,
        recommendation in 0usize..64,
        prefix in prop::sample::select(vec!["+", "0", "00"]),
    ) {
        let padded_scenario = format!("{}_{}{}_{}", key, prefix, scenario, recommendation);
        let padded_recommendation = format!("{}_{}_{}{}", key, scenario, prefix, recommendation);
        for text in [padded_scenario, padded_recommendation] {
            let is_invalid = matches!(
                RecommendationId::parse(&text),
                Err(Error::InvalidIdentifier { .. })
            );
            prop_assert!(is_invalid, "accepted non-canonical identifier {}", text);
        }
    }
}
