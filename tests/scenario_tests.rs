//! Balance scenario tests.
//!
//! Worked examples from the sample card set, checked term by term.

use card_balance::balance::{breakdown, BalanceConfig, BalanceEvaluator, CostBand, Diagnostic};
use card_balance::{
    calculate_power_score, evaluate_card_balance, BalanceError, Card, CardKind, Rarity,
};

fn dragon() -> Card {
    Card::new("Dragon du Chaos", "Créature", "Légendaire")
        .with_stats(12, 8)
        .with_cost(7)
        .with_effect("Souffle infernal (Inflige 4 dégâts à tous les ennemis lorsqu'il attaque)")
}

fn goblin() -> Card {
    Card::new("Gobelin Malicieux", "Créature", "Commune")
        .with_stats(4, 3)
        .with_cost(2)
        .with_effect("Vole 1 point d'énergie")
}

/// Dragon du Chaos: 11-word effect with the "tous les" bonus, legendary.
#[test]
fn test_dragon_du_chaos() {
    let card = dragon();
    let b = breakdown(&card, &BalanceConfig::default());

    // 12*2.5 + 8*2
    assert_eq!(b.base, 46.0);
    assert_eq!(b.word_count, 11);
    // min(11/4, 5) * 1.5
    assert_eq!(b.complexity_bonus, 4.125);
    assert_eq!(b.keyword_bonus, 4.0);
    assert_eq!(b.rarity_multiplier, 2.0);
    // (46 + 4.125 + 4) * 2
    assert_eq!(b.raw, 108.25);
    assert_eq!(b.total, 108.3);

    let result = evaluate_card_balance(&card).unwrap();
    assert_eq!(result.score, 108.3);
    assert!(result.cost_ratio > 15.0);
    assert_eq!(result.cost_band, CostBand::FarTooStrong);
    assert!(!result.is_balanced);
    assert_eq!(result.details.as_slice(), &[Diagnostic::FarTooPowerful]);
    assert_eq!(result.suggestions, BalanceConfig::default().suggestions.too_strong);
}

/// Same dragon with a 9-word effect: 46 + 3.375 + 4 = 53.375, x2 = 106.75.
#[test]
fn test_dragon_nine_word_effect() {
    let card = dragon()
        .with_effect("Inflige 4 dégâts à tous les ennemis chaque tour");
    let b = breakdown(&card, &BalanceConfig::default());

    assert_eq!(b.word_count, 9);
    assert_eq!(b.complexity_bonus, 3.375);
    assert_eq!(b.raw, 106.75);
    assert_eq!(calculate_power_score(&card), 106.8);

    let result = evaluate_card_balance(&card).unwrap();
    assert_eq!(result.cost_band, CostBand::FarTooStrong);
}

/// Gobelin Malicieux: common rarity does not save a cheap card.
#[test]
fn test_gobelin_malicieux() {
    let card = goblin();
    assert_eq!(calculate_power_score(&card), 17.5);

    let result = evaluate_card_balance(&card).unwrap();
    assert_eq!(result.score, 17.5);
    assert_eq!(result.cost_ratio, 8.75);
    assert_eq!(result.cost_band, CostBand::FarTooStrong);
    assert!(!result.is_balanced);
    assert_eq!(result.suggestions.len(), 3);
}

/// Cost 0 is rejected instead of producing an infinite ratio.
#[test]
fn test_zero_cost_is_rejected() {
    let card = goblin().with_cost(0);
    let err = evaluate_card_balance(&card).unwrap_err();

    assert!(matches!(err, BalanceError::InvalidCost { cost: 0, .. }));
    assert!(err.to_string().contains("Gobelin Malicieux"));

    // Scoring alone is still defined.
    assert_eq!(calculate_power_score(&card), 17.5);
}

/// Unknown kind and rarity fall back to default weights without failing.
#[test]
fn test_unrecognized_kind_and_rarity_degrade() {
    let card = Card::new("Totem", "Relique", "Mythique")
        .with_stats(4, 4)
        .with_cost(7)
        .with_effect("Bloque 1 attaque");

    // 4*2 + 4*1.5 = 14; 3 words -> 1.125; x1.0
    assert_eq!(calculate_power_score(&card), 15.1);

    let result = evaluate_card_balance(&card).unwrap();
    assert!(result.is_balanced);
    assert_eq!(result.details.as_slice(), &[Diagnostic::WellBalanced]);
}

/// Unknown rarity on a creature skips the stat cap but keeps other rules.
#[test]
fn test_unknown_rarity_creature_still_checked_for_zero_stats() {
    let card = Card::new("Ombre", CardKind::Creature, Rarity::parse("Mythique"))
        .with_cost(1)
        .with_effect("Invisible");
    let result = evaluate_card_balance(&card).unwrap();

    assert!(result.has(&Diagnostic::CreatureWithoutStats));
    assert!(!result
        .details
        .iter()
        .any(|d| matches!(d, Diagnostic::StatsAboveRarityCap { .. })));
}

/// Golem de Pierre trips both the cost ratio and the common stat cap.
#[test]
fn test_golem_exceeds_common_stat_cap() {
    let card = Card::new("Golem de Pierre", "Créature", "Commune")
        .with_stats(5, 12)
        .with_cost(6)
        .with_effect("Réduction de dégâts (Réduit de moitié les dégâts physiques reçus)");
    let result = evaluate_card_balance(&card).unwrap();

    assert_eq!(result.score, 40.3);
    assert_eq!(
        result.detail_messages(),
        vec![
            "Far too powerful for its cost".to_string(),
            "Total stats too high for a Common card (17 > 15)".to_string(),
        ]
    );
}

/// The flat preset is only used when asked for.
#[test]
fn test_flat_preset_is_opt_in() {
    let flat = BalanceEvaluator::new(BalanceConfig::flat()).unwrap();
    let card = dragon();

    assert_eq!(flat.power_score(&card), 64.6);
    assert_eq!(calculate_power_score(&card), 108.3);
}
