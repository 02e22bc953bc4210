//! # card-balance
//!
//! Power scoring and balance verdicts for trading-card definitions.
//!
//! ## Design Principles
//!
//! 1. **Pure Evaluation**: Scoring and verdicts are deterministic functions of
//!    a card and an immutable configuration. Nothing is cached or persisted.
//!
//! 2. **Configuration Over Constants**: Weights, rarity tables, thresholds and
//!    suggestion pools live in `BalanceConfig`, owned by the evaluator.
//!
//! 3. **Degrade, Don't Fail**: Unknown kinds and rarities are scored with
//!    fallback values. Only a non-positive cost is rejected, because the
//!    cost ratio is undefined for it.
//!
//! ## Modules
//!
//! - `cards`: Card records, kinds, rarities, and the sample catalog
//! - `balance`: Power score, balance rules, verdicts
//! - `error`: Error type shared by the crate
//!
//! ## Example
//!
//! ```
//! use card_balance::{evaluate_card_balance, Card, CardKind, Rarity};
//!
//! let dragon = Card::new("Dragon du Chaos", CardKind::Creature, Rarity::Legendary)
//!     .with_stats(12, 8)
//!     .with_cost(7)
//!     .with_effect("Souffle infernal (Inflige 4 dégâts à tous les ennemis lorsqu'il attaque)");
//!
//! let verdict = evaluate_card_balance(&dragon).unwrap();
//! assert!(!verdict.is_balanced);
//! ```

pub mod balance;
pub mod cards;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CardId, CardKind, CatalogSection, Rarity};

pub use crate::balance::{
    calculate_power_score, evaluate_card_balance, BalanceConfig, BalanceEvaluator, BalanceResult,
    BalanceSummary, CatalogVerdict, CostBand, Diagnostic, ScoreBreakdown,
};

pub use crate::error::{BalanceError, Result};
