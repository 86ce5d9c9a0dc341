use pathgrid_core::{Bounds, Coord, Grid, is_passable_cost};

/// Read-only view of a weighted grid: the only thing the engine needs from
/// the map it searches.
pub trait CostMap {
    /// Extent of the map.
    fn bounds(&self) -> Bounds;

    /// Cost of entering `c`. Must be finite and > 0 for walkable cells.
    fn cost(&self, c: Coord) -> f64;

    /// Whether `c` blocks movement.
    fn is_obstacle(&self, c: Coord) -> bool;

    /// In bounds, not an obstacle, and priced at a finite cost > 0.
    #[inline]
    fn is_walkable(&self, c: Coord) -> bool {
        self.bounds().contains(c) && !self.is_obstacle(c) && is_passable_cost(self.cost(c))
    }
}

impl CostMap for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn cost(&self, c: Coord) -> f64 {
        Grid::cost(self, c)
    }

    #[inline]
    fn is_obstacle(&self, c: Coord) -> bool {
        Grid::is_obstacle(self, c)
    }
}
