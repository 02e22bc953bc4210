//! Property-based tests for scoring and evaluation.
//!
//! Cards are generated with random stats, costs, labels and effect text
//! drawn from a vocabulary that includes every bonus keyword.

use std::collections::HashSet;

use card_balance::balance::{round_to_tenth, BalanceEvaluator, CostBand, Diagnostic};
use card_balance::{BalanceConfig, BalanceError, Card, CardKind, Rarity};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "Inflige", "dégâts", "double", "tous", "les", "permanent", "allié", "ennemis", "Vole", "1",
    "DOUBLE", "Soigne", "bouclier",
];

fn kind_strategy() -> impl Strategy<Value = CardKind> {
    prop_oneof![
        Just(CardKind::Creature),
        Just(CardKind::Spell),
        Just(CardKind::Weapon),
        Just(CardKind::Artifact),
        "[A-Za-z]{3,8}".prop_map(|s| CardKind::parse(&s)),
    ]
}

fn rarity_strategy() -> impl Strategy<Value = Rarity> {
    prop_oneof![
        Just(Rarity::Common),
        Just(Rarity::Rare),
        Just(Rarity::Epic),
        Just(Rarity::Legendary),
        "[A-Za-z]{3,8}".prop_map(|s| Rarity::parse(&s)),
    ]
}

fn effect_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..30)
        .prop_map(|words| words.join(" "))
}

prop_compose! {
    fn arb_card()(
        name in "[A-Za-z]{1,12}",
        kind in kind_strategy(),
        rarity in rarity_strategy(),
        attack in 0u32..200,
        defense in 0u32..200,
        cost in 1i32..40,
        effect in effect_strategy()
    ) -> Card {
        Card::new(name, kind, rarity)
            .with_stats(attack, defense)
            .with_cost(cost)
            .with_effect(effect)
    }
}

proptest! {
    /// Scoring the same card twice gives bit-identical results.
    #[test]
    fn test_score_is_deterministic(card in arb_card()) {
        let evaluator = BalanceEvaluator::default();
        let a = evaluator.power_score(&card);
        let b = evaluator.power_score(&card);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// Scores are never negative and carry at most one decimal.
    #[test]
    fn test_score_is_non_negative_tenth(card in arb_card()) {
        let score = BalanceEvaluator::default().power_score(&card);
        prop_assert!(score >= 0.0);
        prop_assert_eq!(round_to_tenth(score), score);
    }

    /// The flat preset obeys the same score invariants.
    #[test]
    fn test_flat_score_is_non_negative_tenth(card in arb_card()) {
        let evaluator = BalanceEvaluator::new(BalanceConfig::flat()).unwrap();
        let score = evaluator.power_score(&card);
        prop_assert!(score >= 0.0);
        prop_assert_eq!(round_to_tenth(score), score);
    }

    /// Evaluating twice yields equal verdicts.
    #[test]
    fn test_evaluation_is_idempotent(card in arb_card()) {
        let evaluator = BalanceEvaluator::default();
        prop_assert_eq!(evaluator.evaluate(&card).unwrap(), evaluator.evaluate(&card).unwrap());
    }

    /// Suggestions never repeat.
    #[test]
    fn test_suggestions_are_unique(card in arb_card()) {
        let result = BalanceEvaluator::default().evaluate(&card).unwrap();
        let unique: HashSet<&String> = result.suggestions.iter().collect();
        prop_assert_eq!(unique.len(), result.suggestions.len());
    }

    /// A balanced card reports only `WellBalanced` and no suggestions;
    /// an unbalanced one never reports `WellBalanced`.
    #[test]
    fn test_balanced_shape(card in arb_card()) {
        let result = BalanceEvaluator::default().evaluate(&card).unwrap();
        if result.is_balanced {
            prop_assert_eq!(result.details.as_slice(), &[Diagnostic::WellBalanced]);
            prop_assert!(result.suggestions.is_empty());
            prop_assert_eq!(result.cost_band, CostBand::Fair);
        } else {
            prop_assert!(!result.details.is_empty());
            prop_assert!(!result.has(&Diagnostic::WellBalanced));
        }
    }

    /// The reported band matches the ratio against the default thresholds.
    #[test]
    fn test_band_matches_ratio(card in arb_card()) {
        let result = BalanceEvaluator::default().evaluate(&card).unwrap();
        let expected_ratio = result.score / f64::from(card.cost);
        prop_assert_eq!(result.cost_ratio, expected_ratio);
        match result.cost_band {
            CostBand::FarTooStrong => {
                prop_assert!(result.cost_ratio > 3.5);
            }
            CostBand::SlightlyTooStrong => {
                prop_assert!(result.cost_ratio > 2.5 && result.cost_ratio <= 3.5);
            }
            CostBand::Fair => {
                prop_assert!(result.cost_ratio >= 1.0 && result.cost_ratio <= 2.5);
            }
            CostBand::TooWeak => {
                prop_assert!(result.cost_ratio < 1.0);
            }
        }
    }

    /// A creature with no attack and no defense is never balanced.
    #[test]
    fn test_statless_creature_is_unbalanced(card in arb_card()) {
        let card = Card { kind: CardKind::Creature, ..card }.with_stats(0, 0);
        let result = BalanceEvaluator::default().evaluate(&card).unwrap();
        prop_assert!(!result.is_balanced);
        prop_assert!(result.has(&Diagnostic::CreatureWithoutStats));
    }

    /// Non-positive costs are always rejected.
    #[test]
    fn test_non_positive_cost_is_rejected(card in arb_card(), cost in -20i32..=0) {
        let card = card.with_cost(cost);
        let err = BalanceEvaluator::default().evaluate(&card).unwrap_err();
        prop_assert!(matches!(err, BalanceError::InvalidCost { cost: c, .. } if c == cost), "expected InvalidCost {{ cost: {} }}, got {:?}", cost, err);
    }
}
