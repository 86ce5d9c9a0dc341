//! Pathfinding over weighted 2D grids.
//!
//! Six searches share one result shape, [`SearchResult`]: the path from
//! start to goal, its cost, and the order in which nodes were explored.
//!
//! - **A\*** ([`Graph::astar`]) and **Dijkstra** ([`Graph::dijkstra`]):
//!   cheapest path, optimal with an admissible [`Heuristic`]
//! - **BFS** ([`Graph::bfs`]): fewest steps
//! - **Greedy best-first** ([`Graph::greedy`]): heads straight for the goal,
//!   cost not guaranteed
//! - **Bidirectional A\*** ([`Graph::bidirectional_astar`])
//! - **Jump Point Search** ([`jps`]): works on the grid itself
//!
//! The graph searches run over a [`Graph`] built once from any [`CostMap`]
//! and reusable across calls. Every search allocates its own frontier, so
//! one grid and one graph can serve concurrent queries.
//!
//! [`Algorithm`] names the six strategies for callers that choose at run
//! time, and [`run_all`] runs several of them on the same grid.
//!
//! ```
//! use pathgrid_core::{Coord, Grid};
//! use pathgrid_paths::{Graph, Heuristic};
//!
//! let grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! let graph = Graph::build(&grid);
//! let r = graph
//!     .astar(Coord::new(0, 0), Coord::new(2, 2), Heuristic::Octile)
//!     .unwrap();
//! assert_eq!(r.path_len(), 4);
//! ```

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod greedy;
mod jps;
mod search;
mod traits;

pub use algorithm::{Algorithm, run_all};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan, octile, zero};
pub use error::{EndpointReason, SearchError, UnknownName};
pub use graph::{Connectivity, Edge, Graph};
pub use jps::jps;
pub use search::{SearchResult, UNREACHABLE};
pub use traits::CostMap;
