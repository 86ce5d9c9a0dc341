//! The [`Cell`] type: a cell kind tag plus its traversal cost.

use crate::config::CostConfig;

/// What a cell represents on the map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellKind {
    #[default]
    Normal,
    Obstacle,
    Trap,
    Start,
    End,
}

/// A map cell. Entering it costs `cost`; obstacles cost `f64::INFINITY`.
///
/// A cell whose cost is not finite and positive blocks movement whatever its
/// kind, see [`is_passable_cost`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub cost: f64,
}

impl Cell {
    /// A normal cell with the given cost.
    #[inline]
    pub const fn normal(cost: f64) -> Self {
        Self {
            kind: CellKind::Normal,
            cost,
        }
    }

    /// An impassable wall.
    #[inline]
    pub const fn obstacle() -> Self {
        Self {
            kind: CellKind::Obstacle,
            cost: f64::INFINITY,
        }
    }

    /// A trap with the given cost.
    #[inline]
    pub const fn trap(cost: f64) -> Self {
        Self {
            kind: CellKind::Trap,
            cost,
        }
    }

    /// Build a cell of `kind` priced from `costs`.
    pub fn with_kind(kind: CellKind, costs: &CostConfig) -> Self {
        let cost = match kind {
            CellKind::Obstacle => f64::INFINITY,
            CellKind::Trap => costs.trap,
            CellKind::Normal | CellKind::Start | CellKind::End => costs.normal,
        };
        Self { kind, cost }
    }

    /// Whether the cell blocks movement: an obstacle, or any cell whose cost
    /// cannot be paid.
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, CellKind::Obstacle) || !is_passable_cost(self.cost)
    }
}

/// Whether `cost` can be charged for entering a cell: finite and > 0.
#[inline]
pub fn is_passable_cost(cost: f64) -> bool {
    cost.is_finite() && cost > 0.0
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::normal(CostConfig::NORMAL)
    }
}
