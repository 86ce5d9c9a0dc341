//! Helpers shared by the command line demos: random maps and timed
//! side-by-side runs of every search.

use std::fmt;
use std::time::{Duration, Instant};

use pathgrid_core::{Cell, CellKind, Coord, CostConfig, Grid, GridConfig};
use pathgrid_paths::{
    Algorithm, Connectivity, CostMap, Graph, Heuristic, SearchError, SearchResult,
};
use rand::{Rng, RngExt};

/// Share of cells turned into obstacles and traps by [`random_grid`].
#[derive(Debug, Clone, Copy)]
pub struct Density {
    pub obstacles: f64,
    pub traps: f64,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            obstacles: 0.25,
            traps: 0.05,
        }
    }
}

/// Scatter obstacles and traps over a grid sized and priced by `config`.
///
/// The start is marked at the top-left corner and the end at the
/// bottom-right one; both are always open. Nothing guarantees that a path
/// exists.
pub fn random_grid(config: &GridConfig, density: Density, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::with_config(config);
    let costs = config.costs;
    grid.fill_fn(|_| {
        let r: f64 = rng.random();
        if r < density.obstacles {
            Cell::obstacle()
        } else if r < density.obstacles + density.traps {
            Cell::trap(costs.trap)
        } else {
            Cell::normal(costs.normal)
        }
    });
    let end = Coord::new(grid.rows() - 1, grid.cols() - 1);
    grid.set(Coord::ZERO, Cell::with_kind(CellKind::Start, &costs));
    grid.set(end, Cell::with_kind(CellKind::End, &costs));
    grid
}

/// Parse a cell cost from the command line, refusing values that cannot be
/// charged for entering a cell.
pub fn parse_cost(s: &str) -> Result<f64, String> {
    let cost = s.trim().parse::<f64>().map_err(|e| e.to_string())?;
    CostConfig::check_cost("cell", cost).map_err(|e| e.to_string())
}

/// Pick a random open cell, if there is one.
pub fn random_open_cell(grid: &Grid, rng: &mut impl Rng) -> Option<Coord> {
    let open: Vec<Coord> = grid
        .iter()
        .filter(|(_, cell)| !cell.is_obstacle())
        .map(|(c, _)| c)
        .collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// The outcome of one timed search.
#[derive(Debug)]
pub struct Report {
    pub algorithm: Algorithm,
    pub result: Result<SearchResult, SearchError>,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed.as_secs_f64() * 1000.0;
        match &self.result {
            Ok(r) => {
                write!(f, "{}: Cost=", self.algorithm)?;
                if r.cost.is_finite() {
                    write!(f, "{:.3}", r.cost)?;
                } else {
                    f.write_str("N/A")?;
                }
                write!(
                    f,
                    ", Path={}, Explored={}, Time={ms:.2} ms",
                    if r.is_found() { "Yes" } else { "No" },
                    r.explored.len()
                )
            }
            Err(e) => write!(f, "{}: Error={e}, Time={ms:.2} ms", self.algorithm),
        }
    }
}

/// Run `algorithms` one after another from `start` to `goal`, timing each.
///
/// The graph is built once up front, outside the timings, and shared by
/// the graph-based algorithms. JPS always moves in eight directions, so
/// `connectivity` only affects the others.
pub fn compare<M: CostMap + ?Sized>(
    map: &M,
    start: Coord,
    goal: Coord,
    algorithms: &[Algorithm],
    heuristic: Option<Heuristic>,
    connectivity: Connectivity,
) -> Vec<Report> {
    let graph = algorithms
        .iter()
        .any(|a| a.is_graph_based())
        .then(|| Graph::build_with(map, connectivity));

    algorithms
        .iter()
        .map(|&algorithm| {
            let t = Instant::now();
            let result = algorithm.run(map, graph.as_ref(), start, goal, heuristic);
            let elapsed = t.elapsed();
            log::debug!("{algorithm} finished in {elapsed:?}");
            Report {
                algorithm,
                result,
                elapsed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_grid_marks_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = GridConfig::default();
        let g = random_grid(&cfg, Density::default(), &mut rng);
        assert_eq!(g.rows(), 25);
        assert_eq!(g.start(), Some(Coord::ZERO));
        assert_eq!(g.end(), Some(Coord::new(24, 24)));
        assert!(g.obstacle_count() > 0);
    }

    #[test]
    fn random_grid_is_seeded() {
        let cfg = GridConfig::default();
        let a = random_grid(&cfg, Density::default(), &mut StdRng::seed_from_u64(1));
        let b = random_grid(&cfg, Density::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn full_density_leaves_only_endpoints_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let cfg = GridConfig::default();
        let d = Density {
            obstacles: 1.0,
            traps: 0.0,
        };
        let g = random_grid(&cfg, d, &mut rng);
        assert_eq!(g.obstacle_count(), 25 * 25 - 2);
        let c = random_open_cell(&g, &mut rng).unwrap();
        assert!(c == Coord::ZERO || c == Coord::new(24, 24));
    }

    #[test]
    fn report_lines() {
        let grid: Grid = "S.\n#E".parse().unwrap();
        let reports = compare(
            &grid,
            Coord::new(0, 0),
            Coord::new(1, 1),
            &[Algorithm::Bfs],
            None,
            Connectivity::Eight,
        );
        let line = reports[0].to_string();
        assert!(line.starts_with("BFS: Cost=1.414, Path=Yes, Explored="), "{line}");
        assert!(line.ends_with(" ms"));

        let blocked: Grid = "S#E".parse().unwrap();
        let reports = compare(
            &blocked,
            Coord::new(0, 0),
            Coord::new(0, 2),
            &Algorithm::ALL,
            None,
            Connectivity::Four,
        );
        assert_eq!(reports.len(), 6);
        assert!(reports.iter().all(|r| r.to_string().contains("Cost=N/A, Path=No")));
    }

    #[test]
    fn shipped_maps_are_solvable() {
        let maps = [
            include_str!("../maps/room.txt"),
            include_str!("../maps/trap_bridge.txt"),
        ];
        for text in maps {
            let grid: Grid = text.parse().unwrap();
            let (s, t) = (grid.start().unwrap(), grid.end().unwrap());
            let reports = compare(&grid, s, t, &Algorithm::ALL, None, Connectivity::Eight);
            for r in reports {
                assert!(r.result.as_ref().is_ok_and(|r| r.is_found()), "{r}");
            }
        }
    }

    #[test]
    fn cost_flag_must_be_payable() {
        assert_eq!(parse_cost("2.5"), Ok(2.5));
        assert_eq!(parse_cost(" 10 "), Ok(10.0));
        for bad in ["inf", "-5", "0", "NaN"] {
            let err = parse_cost(bad).unwrap_err();
            assert!(err.contains("finite and greater than 0"), "{bad}: {err}");
        }
        assert!(parse_cost("cheap").is_err());
    }

    #[test]
    fn report_errors() {
        let grid: Grid = "S#".parse().unwrap();
        let reports = compare(
            &grid,
            Coord::new(0, 0),
            Coord::new(0, 1),
            &[Algorithm::AStar],
            None,
            Connectivity::Eight,
        );
        assert!(reports[0].to_string().starts_with("A*: Error="));
    }
}
