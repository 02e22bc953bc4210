//! Card model: definitions, kinds, rarities and the sample catalog.
//!
//! ## Key Types
//!
//! - `Card`: immutable card record fed to the evaluator
//! - `CardKind`: Creature, Spell, Weapon, Artifact (or unrecognized)
//! - `Rarity`: Common, Rare, Epic, Legendary (or unrecognized)
//! - `CardCatalog`: card lookup, listing and search
//!
//! Kind and rarity labels are parsed leniently. An unknown label is kept
//! verbatim and scored with default weights instead of being rejected.

pub mod catalog;
pub mod definition;
pub mod kind;
pub mod rarity;

pub use catalog::{CardCatalog, CatalogSection};
pub use definition::{Card, CardId};
pub use kind::CardKind;
pub use rarity::Rarity;
