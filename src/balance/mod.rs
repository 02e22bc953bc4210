//! Balance engine: power scoring and rule-based verdicts.
//!
//! ## Key Types
//!
//! - `BalanceConfig`: every weight, threshold and suggestion pool
//! - `ScoreBreakdown`: the terms that make up a power score
//! - `BalanceEvaluator`: applies the balance rules to a card
//! - `BalanceResult`: verdict, score, diagnostics and suggestions
//!
//! `calculate_power_score` and `evaluate_card_balance` use a shared
//! evaluator built from `BalanceConfig::default()`.

pub mod config;
pub mod evaluator;
pub mod score;
pub mod text;
pub mod verdict;

pub use config::{
    BalanceConfig, CostThresholds, EffectScoring, KeywordBonus, KindWeights, RarityTable,
    RarityTier, StatWeights, SuggestionPools,
};
pub use evaluator::{
    calculate_power_score, default_evaluator, evaluate_card_balance, BalanceEvaluator,
};
pub use score::{breakdown, power_score, round_to_tenth, ScoreBreakdown};
pub use text::word_count;
pub use verdict::{BalanceResult, BalanceSummary, CatalogVerdict, CostBand, Diagnostic};
