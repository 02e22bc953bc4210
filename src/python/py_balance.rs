//! Balance evaluation bindings for Python.

use pyo3::prelude::*;

use crate::balance::{self, BalanceResult};

use super::py_cards::PyCard;

/// Python wrapper for BalanceResult.
#[pyclass(name = "BalanceResult")]
#[derive(Clone, Debug)]
pub struct PyBalanceResult(pub BalanceResult);

#[pymethods]
impl PyBalanceResult {
    #[getter]
    fn is_balanced(&self) -> bool {
        self.0.is_balanced
    }

    #[getter]
    fn score(&self) -> f64 {
        self.0.score
    }

    #[getter]
    fn cost_ratio(&self) -> f64 {
        self.0.cost_ratio
    }

    /// Cost band name: FarTooStrong, SlightlyTooStrong, Fair or TooWeak.
    #[getter]
    fn cost_band(&self) -> String {
        format!("{:?}", self.0.cost_band)
    }

    /// Diagnostic messages in rule order.
    #[getter]
    fn details(&self) -> Vec<String> {
        self.0.detail_messages()
    }

    #[getter]
    fn suggestions(&self) -> Vec<String> {
        self.0.suggestions.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "BalanceResult(is_balanced={}, score={}, cost_band={:?})",
            self.0.is_balanced, self.0.score, self.0.cost_band
        )
    }
}

/// Power score under the canonical configuration.
#[pyfunction]
pub fn calculate_power_score(card: &PyCard) -> f64 {
    balance::calculate_power_score(&card.0)
}

/// Evaluate a card. Raises ValueError for a non-positive cost.
#[pyfunction]
pub fn evaluate_card_balance(card: &PyCard) -> PyResult<PyBalanceResult> {
    Ok(PyBalanceResult(balance::evaluate_card_balance(&card.0)?))
}
