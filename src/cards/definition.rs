//! Card definitions - the record every evaluation starts from.
//!
//! A `Card` is an immutable value supplied by a card source (an entry form,
//! the sample catalog, a JSON file). The engine reads it and never mutates it.

use serde::{Deserialize, Serialize};

use super::kind::CardKind;
use super::rarity::Rarity;
use crate::error::{BalanceError, Result};

/// Identifier assigned to a card by a [`CardCatalog`](super::CardCatalog).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A trading-card definition.
///
/// `name` is display-only and never affects scoring. `cost` is signed so a
/// card source can hand over whatever was entered; the evaluator rejects
/// non-positive costs.
///
/// ## Example
///
/// ```
/// use card_balance::cards::{Card, CardKind, Rarity};
///
/// let goblin = Card::new("Gobelin Malicieux", CardKind::Creature, Rarity::Common)
///     .with_stats(4, 3)
///     .with_cost(2)
///     .with_effect("Vole 1 point d'énergie");
///
/// assert_eq!(goblin.total_stats(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: CardKind,

    pub attack: u32,

    pub defense: u32,

    /// Energy cost.
    pub cost: i32,

    /// Free-text effect description. Its length and keywords feed the score.
    #[serde(default)]
    pub effect: String,

    pub rarity: Rarity,
}

impl Card {
    /// Create a card with no stats, no effect and zero cost, like a blank
    /// entry form. Set the cost before evaluating it.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<CardKind>,
        rarity: impl Into<Rarity>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            attack: 0,
            defense: 0,
            cost: 0,
            effect: String::new(),
            rarity: rarity.into(),
        }
    }

    /// Set attack and defense (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    /// Combined attack and defense.
    #[must_use]
    pub fn total_stats(&self) -> u64 {
        u64::from(self.attack) + u64::from(self.defense)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.kind.is_creature()
    }

    /// Check the fields a card source is expected to fill in.
    ///
    /// Only the name is checked here. Cost is checked by the evaluator,
    /// which is the component that needs it to be positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BalanceError::InvalidCard("card name must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_builder() {
        let card = Card::new("Boule de Feu", "Sort", "Commune")
            .with_stats(5, 0)
            .with_cost(3)
            .with_effect("Inflige 5 dégâts");

        assert_eq!(card.kind, CardKind::Spell);
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.attack, 5);
        assert_eq!(card.defense, 0);
        assert_eq!(card.cost, 3);
        assert!(!card.is_creature());
    }

    #[test]
    fn test_blank_card_defaults() {
        let card = Card::new("Blank", CardKind::Creature, Rarity::Common);
        assert_eq!(card.total_stats(), 0);
        assert_eq!(card.cost, 0);
        assert!(card.effect.is_empty());
    }

    #[test]
    fn test_total_stats_does_not_overflow() {
        let card = Card::new("Huge", CardKind::Creature, Rarity::Common)
            .with_stats(u32::MAX, u32::MAX);
        assert_eq!(card.total_stats(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_validate_name() {
        let card = Card::new("  ", CardKind::Spell, Rarity::Rare).with_cost(1);
        assert!(matches!(card.validate(), Err(BalanceError::InvalidCard(_))));

        let card = Card::new("Ok", CardKind::Spell, Rarity::Rare);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_deserialize_original_labels() {
        let json = r#"{
            "name": "Épée Runique",
            "type": "Arme",
            "attack": 6,
            "defense": 0,
            "cost": 4,
            "effect": "Double les coups critiques",
            "rarity": "Rare"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind, CardKind::Weapon);
        assert_eq!(card.rarity, Rarity::Rare);
        assert_eq!(card.cost, 4);
    }

    #[test]
    fn test_missing_effect_defaults_to_empty() {
        let json = r#"{"name":"X","type":"Sort","attack":1,"defense":0,"cost":1,"rarity":"Rare"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(card.effect.is_empty());
    }
}
