//! Card catalog for lookup and filtering.
//!
//! The `CardCatalog` stores card definitions under sequential `CardId`s and
//! remembers registration order, so listings come out the way the cards were
//! entered. It also provides the filters a browsing UI needs: by section,
//! by kind, and free-text search over name and effect.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};
use super::kind::CardKind;
use crate::error::Result;

const SAMPLE_CARDS_JSON: &str = include_str!("data/sample_cards.json");

/// Catalog grouping used for listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogSection {
    Creatures,
    Spells,
    /// Weapons, artifacts, and anything of unrecognized kind.
    Equipment,
}

impl CatalogSection {
    /// Section a card of the given kind is listed under.
    #[must_use]
    pub fn for_kind(kind: &CardKind) -> Self {
        match kind {
            CardKind::Creature => CatalogSection::Creatures,
            CardKind::Spell => CatalogSection::Spells,
            CardKind::Weapon | CardKind::Artifact | CardKind::Unrecognized(_) => {
                CatalogSection::Equipment
            }
        }
    }
}

/// On-disk catalog layout: one array per section.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    creatures: Vec<Card>,
    #[serde(default)]
    spells: Vec<Card>,
    #[serde(default)]
    equipment: Vec<Card>,
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use card_balance::cards::{Card, CardCatalog, CardKind, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// let fireball = Card::new("Boule de Feu", CardKind::Spell, Rarity::Common)
///     .with_stats(5, 0)
///     .with_cost(3);
/// let id = catalog.register(fireball);
///
/// assert_eq!(catalog.get(id).unwrap().name, "Boule de Feu");
/// assert_eq!(catalog.search("boule").count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from JSON shaped as `{"creatures": [..], "spells": [..],
    /// "equipment": [..]}`. Missing arrays are treated as empty.
    ///
    /// Cards are registered creatures first, then spells, then equipment.
    /// The array a card appears in does not decide its section; its kind does.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for card in file
            .creatures
            .into_iter()
            .chain(file.spells)
            .chain(file.equipment)
        {
            catalog.register(card);
        }
        tracing::debug!(cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// The bundled sample set: 5 creatures, 3 spells and 3 pieces of equipment.
    pub fn builtin() -> Result<Self> {
        Self::from_json(SAMPLE_CARDS_JSON)
    }

    /// Register a card and return its newly assigned ID.
    pub fn register(&mut self, card: Card) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        self.cards.insert(id, card);
        self.order.push(id);
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.order
            .iter()
            .filter_map(move |id| self.cards.get(id).map(|card| (*id, card)))
    }

    /// Find the first card with the given name (exact match).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(CardId, &Card)> {
        self.iter().find(|(_, card)| card.name == name)
    }

    /// Cards listed under a section.
    pub fn section(&self, section: CatalogSection) -> impl Iterator<Item = (CardId, &Card)> {
        self.iter()
            .filter(move |(_, card)| CatalogSection::for_kind(&card.kind) == section)
    }

    /// Cards of a given kind.
    pub fn by_kind<'a>(&'a self, kind: &'a CardKind) -> impl Iterator<Item = (CardId, &'a Card)> {
        self.iter().filter(move |(_, card)| &card.kind == kind)
    }

    /// Case-insensitive search over card names and effect text.
    ///
    /// An empty term matches every card.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = (CardId, &'a Card)> {
        let needle = term.trim().to_lowercase();
        self.iter().filter(move |(_, card)| {
            card.name.to_lowercase().contains(&needle)
                || card.effect.to_lowercase().contains(&needle)
        })
    }
}
