use pathgrid_core::Coord;

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::SearchResult;

impl Graph {
    /// Compute the cheapest path from `start` to `goal` using Dijkstra's
    /// algorithm: A* with a zero heuristic.
    pub fn dijkstra(&self, start: Coord, goal: Coord) -> Result<SearchResult, SearchError> {
        Ok(self
            .best_first_by_cost(start, goal, Heuristic::Zero)?
            .logged("Dijkstra", start, goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::{Cell, Grid};

    #[test]
    fn matches_astar_with_zero_heuristic() {
        let grid: Grid = "
..T..
.#T#.
..T..
"
        .parse()
        .unwrap();
        let g = Graph::build(&grid);
        let (s, t) = (Coord::new(1, 0), Coord::new(1, 4));
        let d = g.dijkstra(s, t).unwrap();
        let a = g.astar(s, t, Heuristic::Zero).unwrap();
        assert_eq!(d, a);
        // Every way across the trap column pays 10 at least once.
        assert!(d.cost > 10.0);
    }

    #[test]
    fn explores_by_increasing_cost() {
        let grid: Grid = ".....".parse().unwrap();
        let g = Graph::build(&grid);
        let r = g.dijkstra(Coord::new(0, 2), Coord::new(0, 4)).unwrap();
        assert_eq!(r.cost, 2.0);
        // Ties on cost fall back to coordinate order.
        assert_eq!(
            r.explored,
            vec![
                Coord::new(0, 2),
                Coord::new(0, 1),
                Coord::new(0, 3),
                Coord::new(0, 0),
                Coord::new(0, 4)
            ]
        );
    }

    #[test]
    fn negative_cost_cells_are_walls() {
        let mut grid = Grid::new(2, 3);
        grid.set(Coord::new(0, 1), Cell::trap(-5.0));
        let g = Graph::build(&grid);
        let r = g.dijkstra(Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        let path = r.path.unwrap();
        assert!(!path.contains(&Coord::new(0, 1)));
        assert!((r.cost - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }
}
