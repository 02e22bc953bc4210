//! Python bindings for the card balance engine.
//!
//! Lets a Python presentation layer build cards and read verdicts without
//! reimplementing the scoring rules.
//!
//! # Quick Start
//!
//! ```python
//! import card_balance as cb
//!
//! goblin = cb.Card("Gobelin Malicieux", "Créature", "Commune",
//!                  attack=4, defense=3, cost=2, effect="Vole 1 point d'énergie")
//!
//! result = cb.evaluate_card_balance(goblin)
//! print(result.score, result.is_balanced, result.details)
//!
//! for card in cb.builtin_catalog():
//!     print(card.name, cb.calculate_power_score(card))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::BalanceError;

mod py_balance;
mod py_cards;

pub use py_balance::*;
pub use py_cards::*;

impl From<BalanceError> for PyErr {
    fn from(err: BalanceError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// card_balance: power scores and balance verdicts for trading cards.
#[pymodule]
fn card_balance(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyBalanceResult>()?;

    m.add_function(wrap_pyfunction!(py_balance::calculate_power_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_balance::evaluate_card_balance, m)?)?;
    m.add_function(wrap_pyfunction!(py_cards::builtin_catalog, m)?)?;

    Ok(())
}
