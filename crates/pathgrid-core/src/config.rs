//! Cost and grid configuration.

use thiserror::Error;

use crate::cell::is_passable_cost;

/// A configured cost that cannot be charged for entering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{what} cost must be finite and greater than 0, got {cost}")]
pub struct InvalidCost {
    pub what: &'static str,
    pub cost: f64,
}

/// Traversal costs assigned to cells when a grid is built or edited.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostConfig {
    /// Cost of entering a normal, start or end cell.
    pub normal: f64,
    /// Cost of entering a trap cell.
    pub trap: f64,
}

impl CostConfig {
    /// Default cost of a normal cell.
    pub const NORMAL: f64 = 1.0;
    /// Default cost of a trap cell.
    pub const TRAP: f64 = 10.0;

    /// Accept `cost` for the cell class named `what` if it can be paid.
    pub fn check_cost(what: &'static str, cost: f64) -> Result<f64, InvalidCost> {
        if is_passable_cost(cost) {
            Ok(cost)
        } else {
            Err(InvalidCost { what, cost })
        }
    }

    /// Check both costs.
    pub fn validate(&self) -> Result<(), InvalidCost> {
        Self::check_cost("normal", self.normal)?;
        Self::check_cost("trap", self.trap)?;
        Ok(())
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            normal: Self::NORMAL,
            trap: Self::TRAP,
        }
    }
}

/// Dimensions and costs for a freshly created grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub costs: CostConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 25,
            costs: CostConfig::default(),
        }
    }
}
