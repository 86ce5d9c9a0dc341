//! The [`Grid`] type: an owned, row-major 2D array of [`Cell`]s.
//!
//! A `Grid` is a plain value. Searches only ever borrow it, so one snapshot
//! can be shared by reference between threads while each search keeps its
//! own frontier state.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::config::GridConfig;
use crate::geom::{Bounds, BoundsIter, Coord};

/// A 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
}

impl Grid {
    /// Create a new grid filled with default (normal, cost 1) cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Cell::default())
    }

    /// Create a new grid with every cell set to `cell`.
    pub fn filled(rows: i32, cols: i32, cell: Cell) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![cell; bounds.len()],
            bounds,
        }
    }

    /// Create an all-normal grid sized and priced by `config`.
    pub fn with_config(config: &GridConfig) -> Self {
        Self::filled(
            config.rows,
            config.cols,
            Cell::normal(config.costs.normal),
        )
    }

    /// The extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Cost of entering `c`. Out-of-bounds positions cost `f64::INFINITY`.
    #[inline]
    pub fn cost(&self, c: Coord) -> f64 {
        self.at(c).map_or(f64::INFINITY, |cell| cell.cost)
    }

    /// Whether `c` is an in-bounds obstacle.
    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| cell.is_obstacle())
    }

    /// Whether `c` is in bounds and can be entered.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| !cell.is_obstacle())
    }

    /// Set the cell at `c`. No-op if `c` is outside bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the grid using a function of each coordinate.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Coord) -> Cell) {
        let bounds = self.bounds;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(bounds.coord(i));
        }
    }

    /// First cell of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| cell.kind == kind)
            .map(|(c, _)| c)
    }

    /// Position of the start cell, if one is marked.
    pub fn start(&self) -> Option<Coord> {
        self.find(CellKind::Start)
    }

    /// Position of the end cell, if one is marked.
    pub fn end(&self) -> Option<Coord> {
        self.find(CellKind::End)
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        self.grid.at(c).map(|cell| (c, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the text map format accepted by
    /// [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                let kind = self
                    .at(Coord::new(row, col))
                    .map_or(CellKind::Obstacle, |c| c.kind);
                write!(f, "{}", crate::text::glyph(kind))?;
            }
        }
        Ok(())
    }
}
