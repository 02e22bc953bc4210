//! Balance verdict types.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::CostThresholds;
use crate::cards::{CardId, Rarity};
use crate::error::BalanceError;

/// Where a card's cost ratio (score / cost) falls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostBand {
    /// Above `far_too_strong`.
    FarTooStrong,
    /// Above `slightly_too_strong`, up to `far_too_strong`.
    SlightlyTooStrong,
    /// From `too_weak` up to `slightly_too_strong`, both inclusive.
    Fair,
    /// Below `too_weak`.
    TooWeak,
}

impl CostBand {
    #[must_use]
    pub fn classify(ratio: f64, thresholds: &CostThresholds) -> Self {
        if ratio > thresholds.far_too_strong {
            CostBand::FarTooStrong
        } else if ratio > thresholds.slightly_too_strong {
            CostBand::SlightlyTooStrong
        } else if ratio < thresholds.too_weak {
            CostBand::TooWeak
        } else {
            CostBand::Fair
        }
    }
}

/// One finding about a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    FarTooPowerful,
    SlightlyTooPowerful,
    TooWeak,
    EffectTooComplex { words: usize, max: usize },
    StatsAboveRarityCap { rarity: Rarity, total: u64, cap: u64 },
    CreatureWithoutStats,
    WellBalanced,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::FarTooPowerful => write!(f, "Far too powerful for its cost"),
            Diagnostic::SlightlyTooPowerful => write!(f, "Slightly too powerful"),
            Diagnostic::TooWeak => write!(f, "Too weak for its cost"),
            Diagnostic::EffectTooComplex { words, max } => {
                write!(f, "Effect too complex ({words} words, at most {max})")
            }
            Diagnostic::StatsAboveRarityCap { rarity, total, cap } => {
                write!(f, "Total stats too high for a {rarity} card ({total} > {cap})")
            }
            Diagnostic::CreatureWithoutStats => write!(f, "Stats too weak for a creature"),
            Diagnostic::WellBalanced => write!(f, "Well balanced card"),
        }
    }
}

/// Verdict for a single card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// True iff no rule flagged a problem.
    pub is_balanced: bool,
    /// Power score, one decimal place.
    pub score: f64,
    /// `score / cost`.
    pub cost_ratio: f64,
    pub cost_band: CostBand,
    /// Findings in rule order. A balanced card has exactly `[WellBalanced]`.
    pub details: SmallVec<[Diagnostic; 4]>,
    /// Improvement suggestions without duplicates, in the order first added.
    pub suggestions: Vec<String>,
}

impl BalanceResult {
    /// Human-readable message for each detail.
    #[must_use]
    pub fn detail_messages(&self) -> Vec<String> {
        self.details.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn has(&self, diagnostic: &Diagnostic) -> bool {
        self.details.contains(diagnostic)
    }
}

/// Suggestion list that drops repeats while keeping first-insertion order.
#[derive(Debug, Default)]
pub(crate) struct SuggestionSet {
    seen: FxHashSet<String>,
    items: Vec<String>,
}

impl SuggestionSet {
    pub(crate) fn extend(&mut self, pool: &[String]) {
        for suggestion in pool {
            if self.seen.insert(suggestion.clone()) {
                self.items.push(suggestion.clone());
            }
        }
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Outcome of evaluating one catalog entry.
#[derive(Debug)]
pub struct CatalogVerdict {
    pub id: CardId,
    pub name: String,
    pub outcome: Result<BalanceResult, BalanceError>,
}

/// Counts over a batch of evaluations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total: usize,
    pub balanced: usize,
    pub unbalanced: usize,
    /// Cards the evaluator refused (for example a non-positive cost).
    pub rejected: usize,
    pub far_too_strong: usize,
    pub slightly_too_strong: usize,
    pub too_weak: usize,
}

impl BalanceSummary {
    /// Tally a batch of outcomes.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Result<BalanceResult, BalanceError>>,
    {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    /// Tally the outcomes of a catalog evaluation.
    #[must_use]
    pub fn from_catalog(verdicts: &[CatalogVerdict]) -> Self {
        Self::from_outcomes(verdicts.iter().map(|v| &v.outcome))
    }

    fn record(&mut self, outcome: &Result<BalanceResult, BalanceError>) {
        self.total += 1;
        let result = match outcome {
            Ok(result) => result,
            Err(_) => {
                self.rejected += 1;
                return;
            }
        };

        if result.is_balanced {
            self.balanced += 1;
        } else {
            self.unbalanced += 1;
        }
        match result.cost_band {
            CostBand::FarTooStrong => self.far_too_strong += 1,
            CostBand::SlightlyTooStrong => self.slightly_too_strong += 1,
            CostBand::TooWeak => self.too_weak += 1,
            CostBand::Fair => {}
        }
    }
}
