//! **pathgrid-core**: weighted cell grids for pathfinding (core types).
//!
//! This crate provides the foundational types used across the *pathgrid*
//! workspace: `(row, col)` coordinates, grid bounds, typed and priced cells,
//! an owned grid snapshot, a text map format and cost configuration.

pub mod cell;
pub mod config;
pub mod geom;
pub mod grid;
pub mod text;

pub use cell::{Cell, CellKind, is_passable_cost};
pub use config::{CostConfig, GridConfig, InvalidCost};
pub use geom::{Bounds, Coord, DIRECTIONS, ORTHOGONAL};
pub use grid::Grid;
pub use text::GridError;
