//! Balance configuration.
//!
//! Every constant the scorer and evaluator use lives here:
//! - `KindWeights`: attack/defense weights per card kind
//! - `EffectScoring`: how effect length turns into score
//! - `KeywordBonus`: flat bonuses for keywords in the effect text
//! - `RarityTable`: score multiplier and creature stat cap per rarity
//! - `CostThresholds`: cost-ratio bands
//! - `SuggestionPools`: improvement suggestions attached to each finding
//!
//! `BalanceConfig::default()` is the canonical type-aware formula with
//! keyword bonuses. `BalanceConfig::flat()` is the older uniform formula,
//! available only when asked for explicitly.

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, Rarity};
use crate::error::{BalanceError, Result};

/// Per-point weights for attack and defense.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatWeights {
    pub attack: f64,
    pub defense: f64,
}

impl StatWeights {
    #[must_use]
    pub const fn new(attack: f64, defense: f64) -> Self {
        Self { attack, defense }
    }
}

/// Stat weights by card kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindWeights {
    pub creature: StatWeights,
    pub spell: StatWeights,
    /// Weapons, artifacts and unrecognized kinds.
    pub other: StatWeights,
}

impl KindWeights {
    /// Same weights for every kind.
    #[must_use]
    pub const fn uniform(weights: StatWeights) -> Self {
        Self {
            creature: weights,
            spell: weights,
            other: weights,
        }
    }

    #[must_use]
    pub fn for_kind(&self, kind: &CardKind) -> StatWeights {
        match kind {
            CardKind::Creature => self.creature,
            CardKind::Spell => self.spell,
            CardKind::Weapon | CardKind::Artifact | CardKind::Unrecognized(_) => self.other,
        }
    }
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            creature: StatWeights::new(2.5, 2.0),
            spell: StatWeights::new(3.0, 2.5),
            other: StatWeights::new(2.0, 1.5),
        }
    }
}

/// Effect-text complexity scoring.
///
/// `complexity = word_count / words_per_point`, capped at `max_complexity`
/// when set, then multiplied by `weight`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectScoring {
    pub words_per_point: f64,
    /// Cap on complexity points. `None` leaves it unbounded.
    pub max_complexity: Option<f64>,
    pub weight: f64,
}

impl EffectScoring {
    /// Complexity points for an effect of `word_count` words, before `weight`.
    #[must_use]
    pub fn complexity(&self, word_count: usize) -> f64 {
        let points = word_count as f64 / self.words_per_point;
        match self.max_complexity {
            Some(cap) => points.min(cap),
            None => points,
        }
    }
}

impl Default for EffectScoring {
    fn default() -> Self {
        Self {
            words_per_point: 4.0,
            max_complexity: Some(5.0),
            weight: 1.5,
        }
    }
}

/// Flat bonus added when the effect text contains `keyword` (any case).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordBonus {
    pub keyword: String,
    pub bonus: f64,
}

impl KeywordBonus {
    #[must_use]
    pub fn new(keyword: impl Into<String>, bonus: f64) -> Self {
        Self {
            keyword: keyword.into(),
            bonus,
        }
    }
}

fn default_keyword_bonuses() -> Vec<KeywordBonus> {
    vec![
        KeywordBonus::new("double", 3.0),
        // "affects all" idiom in the card text
        KeywordBonus::new("tous les", 4.0),
        KeywordBonus::new("permanent", 5.0),
    ]
}

/// Numbers attached to one rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityTier {
    /// Score multiplier.
    pub multiplier: f64,
    /// Maximum attack + defense for a creature of this rarity.
    pub stat_cap: u64,
}

impl RarityTier {
    #[must_use]
    pub const fn new(multiplier: f64, stat_cap: u64) -> Self {
        Self { multiplier, stat_cap }
    }
}

/// Rarity multipliers and stat caps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityTable {
    pub common: RarityTier,
    pub rare: RarityTier,
    pub epic: RarityTier,
    pub legendary: RarityTier,
    /// Multiplier for unrecognized rarities. They have no stat cap.
    pub fallback_multiplier: f64,
}

impl RarityTable {
    /// Tier for a rarity, `None` if it is unrecognized.
    #[must_use]
    pub fn tier(&self, rarity: &Rarity) -> Option<&RarityTier> {
        match rarity {
            Rarity::Common => Some(&self.common),
            Rarity::Rare => Some(&self.rare),
            Rarity::Epic => Some(&self.epic),
            Rarity::Legendary => Some(&self.legendary),
            Rarity::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn multiplier(&self, rarity: &Rarity) -> f64 {
        self.tier(rarity)
            .map_or(self.fallback_multiplier, |tier| tier.multiplier)
    }

    #[must_use]
    pub fn stat_cap(&self, rarity: &Rarity) -> Option<u64> {
        self.tier(rarity).map(|tier| tier.stat_cap)
    }

    fn tiers(&self) -> [(&'static str, &RarityTier); 4] {
        [
            ("common", &self.common),
            ("rare", &self.rare),
            ("epic", &self.epic),
            ("legendary", &self.legendary),
        ]
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            common: RarityTier::new(1.0, 15),
            rare: RarityTier::new(1.3, 20),
            epic: RarityTier::new(1.6, 25),
            legendary: RarityTier::new(2.0, 30),
            fallback_multiplier: 1.0,
        }
    }
}

/// Cost-ratio (score / cost) bands.
///
/// A ratio strictly above `far_too_strong` or `slightly_too_strong`, or
/// strictly below `too_weak`, is flagged. Values equal to a threshold fall
/// in the milder band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostThresholds {
    pub far_too_strong: f64,
    pub slightly_too_strong: f64,
    pub too_weak: f64,
}

impl Default for CostThresholds {
    fn default() -> Self {
        Self {
            far_too_strong: 3.5,
            slightly_too_strong: 2.5,
            too_weak: 1.0,
        }
    }
}

/// Improvement suggestions attached to each kind of finding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionPools {
    pub too_strong: Vec<String>,
    pub slightly_too_strong: Vec<String>,
    pub too_weak: Vec<String>,
    pub complex_effect: Vec<String>,
}

fn non_negative(name: impl std::fmt::Display, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BalanceError::InvalidConfig(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for SuggestionPools {
    fn default() -> Self {
        Self {
            too_strong: owned(&[
                "Reduce the stats",
                "Increase the energy cost",
                "Add a condition to the effect",
            ]),
            slightly_too_strong: owned(&["Slightly increase the cost"]),
            too_weak: owned(&[
                "Increase the stats to match the rarity",
                "Add an extra effect",
                "Reduce the energy cost",
            ]),
            complex_effect: owned(&[
                "Simplify the effect description",
                "Split the effect into two separate cards",
                "Increase the cost to justify the complexity",
            ]),
        }
    }
}

/// Complete balance configuration.
///
/// Missing fields in JSON, at any level of nesting, fall back to the
/// canonical defaults. `StatWeights` and `RarityTier` entries must be given
/// in full.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub stat_weights: KindWeights,
    pub effect: EffectScoring,
    pub keyword_bonuses: Vec<KeywordBonus>,
    pub rarity: RarityTable,
    pub cost_thresholds: CostThresholds,
    /// Effects longer than this many words are flagged as too complex.
    pub max_effect_words: usize,
    pub suggestions: SuggestionPools,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            stat_weights: KindWeights::default(),
            effect: EffectScoring::default(),
            keyword_bonuses: default_keyword_bonuses(),
            rarity: RarityTable::default(),
            cost_thresholds: CostThresholds::default(),
            max_effect_words: 15,
            suggestions: SuggestionPools::default(),
        }
    }
}

impl BalanceConfig {
    /// Uniform preset: `attack*2 + defense*1.5` for every kind, effect
    /// complexity `words/5 * 2` without a cap, no keyword bonuses, and
    /// rarity multipliers 1.0 / 1.2 / 1.4 / 1.6.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            stat_weights: KindWeights::uniform(StatWeights::new(2.0, 1.5)),
            effect: EffectScoring {
                words_per_point: 5.0,
                max_complexity: None,
                weight: 2.0,
            },
            keyword_bonuses: Vec::new(),
            rarity: RarityTable {
                common: RarityTier::new(1.0, 15),
                rare: RarityTier::new(1.2, 20),
                epic: RarityTier::new(1.4, 25),
                legendary: RarityTier::new(1.6, 30),
                fallback_multiplier: 1.0,
            },
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_stat_weights(mut self, weights: KindWeights) -> Self {
        self.stat_weights = weights;
        self
    }

    #[must_use]
    pub fn with_effect_scoring(mut self, effect: EffectScoring) -> Self {
        self.effect = effect;
        self
    }

    /// Add a keyword bonus.
    #[must_use]
    pub fn with_keyword_bonus(mut self, keyword: impl Into<String>, bonus: f64) -> Self {
        self.keyword_bonuses.push(KeywordBonus::new(keyword, bonus));
        self
    }

    #[must_use]
    pub fn without_keyword_bonuses(mut self) -> Self {
        self.keyword_bonuses.clear();
        self
    }

    #[must_use]
    pub fn with_rarity_table(mut self, rarity: RarityTable) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_cost_thresholds(mut self, thresholds: CostThresholds) -> Self {
        self.cost_thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_max_effect_words(mut self, words: usize) -> Self {
        self.max_effect_words = words;
        self
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: SuggestionPools) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Check the invariants scoring relies on.
    ///
    /// Weights and bonuses must be finite and non-negative, multipliers at
    /// least 1.0, and cost thresholds ordered
    /// `0 <= too_weak <= slightly_too_strong <= far_too_strong`. Together
    /// these keep every score non-negative.
    pub fn validate(&self) -> Result<()> {
        for (kind, weights) in [
            ("creature", &self.stat_weights.creature),
            ("spell", &self.stat_weights.spell),
            ("other", &self.stat_weights.other),
        ] {
            non_negative(format!("{kind} attack weight"), weights.attack)?;
            non_negative(format!("{kind} defense weight"), weights.defense)?;
        }

        if !(self.effect.words_per_point.is_finite() && self.effect.words_per_point > 0.0) {
            return Err(BalanceError::InvalidConfig(format!(
                "words_per_point must be positive, got {}",
                self.effect.words_per_point
            )));
        }
        if let Some(cap) = self.effect.max_complexity {
            non_negative("max_complexity", cap)?;
        }
        non_negative("effect weight", self.effect.weight)?;

        for bonus in &self.keyword_bonuses {
            if bonus.keyword.trim().is_empty() {
                return Err(BalanceError::InvalidConfig(
                    "keyword bonus with an empty keyword".to_string(),
                ));
            }
            non_negative(format!("bonus for '{}'", bonus.keyword), bonus.bonus)?;
        }

        let multipliers = self
            .rarity
            .tiers()
            .into_iter()
            .map(|(name, tier)| (name, tier.multiplier))
            .chain(std::iter::once(("fallback", self.rarity.fallback_multiplier)));
        for (name, multiplier) in multipliers {
            if !(multiplier.is_finite() && multiplier >= 1.0) {
                return Err(BalanceError::InvalidConfig(format!(
                    "{name} rarity multiplier must be at least 1.0, got {multiplier}"
                )));
            }
        }

        let t = &self.cost_thresholds;
        non_negative("too_weak threshold", t.too_weak)?;
        non_negative("slightly_too_strong threshold", t.slightly_too_strong)?;
        non_negative("far_too_strong threshold", t.far_too_strong)?;
        if !(t.too_weak <= t.slightly_too_strong && t.slightly_too_strong <= t.far_too_strong) {
            return Err(BalanceError::InvalidConfig(format!(
                "cost thresholds out of order: expected too_weak {} <= \
                 slightly_too_strong {} <= far_too_strong {}",
                t.too_weak, t.slightly_too_strong, t.far_too_strong
            )));
        }

        Ok(())
    }
}
