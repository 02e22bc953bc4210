//! Error types for card balance evaluation.

use thiserror::Error;

/// Errors raised while validating cards, configuration, or catalog data.
///
/// Unrecognized card kinds and rarities are not errors: they degrade to
/// default weights. Only inputs that make a verdict meaningless are rejected.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// The cost ratio is undefined for a non-positive cost.
    #[error("Invalid cost for card '{card}': {cost} (cost must be positive)")]
    InvalidCost { card: String, cost: i32 },

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid balance configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BalanceError>;
