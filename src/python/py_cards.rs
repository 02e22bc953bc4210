//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardCatalog};

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card. Kind and rarity accept English or French labels.
    #[new]
    #[pyo3(signature = (
        name, kind, rarity, attack = 0, defense = 0, cost = 0, effect = String::new()
    ))]
    fn new(
        name: String,
        kind: &str,
        rarity: &str,
        attack: u32,
        defense: u32,
        cost: i32,
        effect: String,
    ) -> Self {
        Self(
            Card::new(name, kind, rarity)
                .with_stats(attack, defense)
                .with_cost(cost)
                .with_effect(effect),
        )
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn kind(&self) -> String {
        self.0.kind.to_string()
    }

    #[getter]
    fn rarity(&self) -> String {
        self.0.rarity.to_string()
    }

    #[getter]
    fn attack(&self) -> u32 {
        self.0.attack
    }

    #[getter]
    fn defense(&self) -> u32 {
        self.0.defense
    }

    #[getter]
    fn cost(&self) -> i32 {
        self.0.cost
    }

    #[getter]
    fn effect(&self) -> String {
        self.0.effect.clone()
    }

    /// Raise ValueError if the card name is blank.
    fn validate(&self) -> PyResult<()> {
        Ok(self.0.validate()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(name={:?}, kind={}, rarity={}, attack={}, defense={}, cost={})",
            self.0.name, self.0.kind, self.0.rarity, self.0.attack, self.0.defense, self.0.cost
        )
    }
}

/// The bundled sample cards, in catalog order.
#[pyfunction]
pub fn builtin_catalog() -> PyResult<Vec<PyCard>> {
    let catalog = CardCatalog::builtin()?;
    Ok(catalog.iter().map(|(_, card)| PyCard(card.clone())).collect())
}
