//! Card kinds.
//!
//! The kind selects which stat weights apply when scoring a card, and
//! whether the creature-only balance rules run.

use serde::{Deserialize, Serialize};

/// Kind of card.
///
/// Parsed case-insensitively from English or French labels. Anything else is
/// kept as `Unrecognized` and scored with the fallback weights.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardKind {
    Creature,
    Spell,
    Weapon,
    Artifact,
    /// Label that matched no known kind.
    Unrecognized(String),
}

impl CardKind {
    /// All recognized kinds, in catalog display order.
    pub const KNOWN: [CardKind; 4] = [
        CardKind::Creature,
        CardKind::Spell,
        CardKind::Weapon,
        CardKind::Artifact,
    ];

    /// Parse a kind label. Never fails.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "creature" | "créature" => CardKind::Creature,
            "spell" | "sort" => CardKind::Spell,
            "weapon" | "arme" => CardKind::Weapon,
            "artifact" | "artefact" => CardKind::Artifact,
            _ => CardKind::Unrecognized(label.to_string()),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CardKind::Creature => "Creature",
            CardKind::Spell => "Spell",
            CardKind::Weapon => "Weapon",
            CardKind::Artifact => "Artifact",
            CardKind::Unrecognized(label) => label,
        }
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        matches!(self, CardKind::Creature)
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CardKind::Unrecognized(_))
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for CardKind {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for CardKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        kind.label().to_string()
    }
}
