//! Power score calculation.
//!
//! The score is built in four steps:
//! 1. Stats, weighted by card kind
//! 2. Effect complexity (word count, capped)
//! 3. Keyword bonuses found in the effect text
//! 4. The sum multiplied by the rarity multiplier
//!
//! and rounded to one decimal place, half away from zero.

use serde::{Deserialize, Serialize};

use super::config::BalanceConfig;
use super::text::{contains_ignore_case, word_count};
use crate::cards::Card;

/// Each term of a card's power score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted attack + defense.
    pub base: f64,
    /// Words in the effect text.
    pub word_count: usize,
    /// Complexity points times the effect weight.
    pub complexity_bonus: f64,
    /// Sum of matched keyword bonuses.
    pub keyword_bonus: f64,
    pub rarity_multiplier: f64,
    /// Score before rounding.
    pub raw: f64,
    /// Score rounded to one decimal.
    pub total: f64,
}

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute every term of the power score for `card`.
#[must_use]
pub fn breakdown(card: &Card, config: &BalanceConfig) -> ScoreBreakdown {
    if !card.kind.is_recognized() {
        tracing::debug!(
            card = %card.name,
            kind = %card.kind,
            "unrecognized card kind, using fallback weights"
        );
    }
    if !card.rarity.is_recognized() {
        tracing::debug!(
            card = %card.name,
            rarity = %card.rarity,
            "unrecognized rarity, using fallback multiplier"
        );
    }

    let weights = config.stat_weights.for_kind(&card.kind);
    let base = f64::from(card.attack) * weights.attack + f64::from(card.defense) * weights.defense;

    let words = word_count(&card.effect);
    let complexity_bonus = config.effect.complexity(words) * config.effect.weight;

    // Accumulate term by term so the float result does not depend on how
    // the bonuses are grouped.
    let mut subtotal = base + complexity_bonus;
    let mut keyword_bonus = 0.0;
    for bonus in &config.keyword_bonuses {
        if contains_ignore_case(&card.effect, &bonus.keyword) {
            subtotal += bonus.bonus;
            keyword_bonus += bonus.bonus;
        }
    }

    let rarity_multiplier = config.rarity.multiplier(&card.rarity);
    let raw = subtotal * rarity_multiplier;

    ScoreBreakdown {
        base,
        word_count: words,
        complexity_bonus,
        keyword_bonus,
        rarity_multiplier,
        raw,
        total: round_to_tenth(raw),
    }
}

/// Power score of `card`, rounded to one decimal place.
#[must_use]
pub fn power_score(card: &Card, config: &BalanceConfig) -> f64 {
    breakdown(card, config).total
}
