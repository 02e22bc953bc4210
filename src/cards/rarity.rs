//! Card rarity tiers.

use serde::{Deserialize, Serialize};

/// Rarity tier of a card.
///
/// Rarity drives the score multiplier and, for creatures, the cap on
/// combined attack and defense. The numbers live in
/// [`RarityTable`](crate::balance::RarityTable).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    /// Label that matched no known tier.
    Unrecognized(String),
}

impl Rarity {
    pub const KNOWN: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Parse a rarity label (English or French, any case). Never fails.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "common" | "commune" => Rarity::Common,
            "rare" => Rarity::Rare,
            "epic" | "épique" => Rarity::Epic,
            "legendary" | "légendaire" => Rarity::Legendary,
            _ => Rarity::Unrecognized(label.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unrecognized(label) => label,
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Rarity::Unrecognized(_))
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Rarity {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.label().to_string()
    }
}
