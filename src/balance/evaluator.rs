//! Rule-based balance evaluation.
//!
//! `BalanceEvaluator` owns a validated `BalanceConfig` and turns a card into
//! a `BalanceResult`. Every rule runs; none short-circuits the others:
//!
//! 1. Cost ratio (score / cost) against the configured bands
//! 2. Effect verbosity
//! 3. Creature stat cap for the card's rarity
//! 4. Creature with neither attack nor defense
//!
//! A card with a non-positive cost is rejected before any rule runs.

use std::sync::OnceLock;

use smallvec::SmallVec;

use super::config::BalanceConfig;
use super::score::{self, ScoreBreakdown};
use super::verdict::{BalanceResult, CatalogVerdict, CostBand, Diagnostic, SuggestionSet};
use crate::cards::{Card, CardCatalog};
use crate::error::{BalanceError, Result};

/// Card balance evaluator.
///
/// Immutable after construction, so one instance can be shared freely
/// between threads.
///
/// ## Example
///
/// ```
/// use card_balance::balance::{BalanceEvaluator, CostBand};
/// use card_balance::cards::{Card, CardKind, Rarity};
///
/// let evaluator = BalanceEvaluator::default();
/// let goblin = Card::new("Gobelin Malicieux", CardKind::Creature, Rarity::Common)
///     .with_stats(4, 3)
///     .with_cost(2)
///     .with_effect("Vole 1 point d'énergie");
///
/// let result = evaluator.evaluate(&goblin).unwrap();
/// assert_eq!(result.score, 17.5);
/// assert_eq!(result.cost_band, CostBand::FarTooStrong);
/// assert!(!result.is_balanced);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BalanceEvaluator {
    config: BalanceConfig,
}

impl BalanceEvaluator {
    /// Create an evaluator, rejecting an inconsistent configuration.
    pub fn new(config: BalanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Power score of `card`, rounded to one decimal place.
    #[must_use]
    pub fn power_score(&self, card: &Card) -> f64 {
        score::power_score(card, &self.config)
    }

    /// Every term of the power score.
    #[must_use]
    pub fn breakdown(&self, card: &Card) -> ScoreBreakdown {
        score::breakdown(card, &self.config)
    }

    /// Evaluate one card.
    ///
    /// Fails only with [`BalanceError::InvalidCost`] when `cost <= 0`.
    /// Unknown kinds and rarities are scored with fallback values.
    pub fn evaluate(&self, card: &Card) -> Result<BalanceResult> {
        if card.cost <= 0 {
            tracing::warn!(
                card = %card.name,
                cost = card.cost,
                "rejecting card with non-positive cost"
            );
            return Err(BalanceError::InvalidCost {
                card: card.name.clone(),
                cost: card.cost,
            });
        }

        let breakdown = self.breakdown(card);
        let score = breakdown.total;
        let pools = &self.config.suggestions;

        let mut details: SmallVec<[Diagnostic; 4]> = SmallVec::new();
        let mut suggestions = SuggestionSet::default();

        let cost_ratio = score / f64::from(card.cost);
        let cost_band = CostBand::classify(cost_ratio, &self.config.cost_thresholds);
        match cost_band {
            CostBand::FarTooStrong => {
                details.push(Diagnostic::FarTooPowerful);
                suggestions.extend(&pools.too_strong);
            }
            CostBand::SlightlyTooStrong => {
                details.push(Diagnostic::SlightlyTooPowerful);
                suggestions.extend(&pools.slightly_too_strong);
            }
            CostBand::TooWeak => {
                details.push(Diagnostic::TooWeak);
                suggestions.extend(&pools.too_weak);
            }
            CostBand::Fair => {}
        }

        if breakdown.word_count > self.config.max_effect_words {
            details.push(Diagnostic::EffectTooComplex {
                words: breakdown.word_count,
                max: self.config.max_effect_words,
            });
            suggestions.extend(&pools.complex_effect);
        }

        if card.is_creature() {
            let total = card.total_stats();
            if let Some(cap) = self.config.rarity.stat_cap(&card.rarity) {
                if total > cap {
                    details.push(Diagnostic::StatsAboveRarityCap {
                        rarity: card.rarity.clone(),
                        total,
                        cap,
                    });
                }
            }
            if card.attack == 0 && card.defense == 0 {
                details.push(Diagnostic::CreatureWithoutStats);
            }
        }

        let is_balanced = details.is_empty();
        if is_balanced {
            details.push(Diagnostic::WellBalanced);
        }

        tracing::debug!(
            card = %card.name,
            score,
            cost_ratio,
            ?cost_band,
            is_balanced,
            "evaluated card balance"
        );

        Ok(BalanceResult {
            is_balanced,
            score,
            cost_ratio,
            cost_band,
            details,
            suggestions: suggestions.into_vec(),
        })
    }

    /// Evaluate a batch of cards, one outcome per card in input order.
    ///
    /// A rejected card yields its own error and does not stop the others.
    pub fn evaluate_all<'a, I>(&self, cards: I) -> Vec<Result<BalanceResult>>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().map(|card| self.evaluate(card)).collect()
    }

    /// Evaluate every card of a catalog in registration order.
    #[must_use]
    pub fn evaluate_catalog(&self, catalog: &CardCatalog) -> Vec<CatalogVerdict> {
        catalog
            .iter()
            .map(|(id, card)| CatalogVerdict {
                id,
                name: card.name.clone(),
                outcome: self.evaluate(card),
            })
            .collect()
    }
}

/// Shared evaluator with the canonical configuration.
pub fn default_evaluator() -> &'static BalanceEvaluator {
    static EVALUATOR: OnceLock<BalanceEvaluator> = OnceLock::new();
    EVALUATOR.get_or_init(BalanceEvaluator::default)
}

/// Power score of `card` under the canonical configuration.
#[must_use]
pub fn calculate_power_score(card: &Card) -> f64 {
    default_evaluator().power_score(card)
}

/// Evaluate `card` under the canonical configuration.
pub fn evaluate_card_balance(card: &Card) -> Result<BalanceResult> {
    default_evaluator().evaluate(card)
}
