//! A registry of the available searches, so callers can pick one by name
//! and run several over the same grid.

use std::fmt;
use std::str::FromStr;

use pathgrid_core::Coord;

use crate::distance::Heuristic;
use crate::error::{SearchError, UnknownName};
use crate::graph::Graph;
use crate::jps::jps;
use crate::search::SearchResult;
use crate::traits::CostMap;

/// One of the six search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    Bfs,
    Greedy,
    Jps,
    BidirectionalAStar,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Greedy,
        Algorithm::Jps,
        Algorithm::BidirectionalAStar,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
            Algorithm::Greedy => "Greedy BFS",
            Algorithm::Jps => "JPS",
            Algorithm::BidirectionalAStar => "Bi-A*",
        }
    }

    /// Whether the algorithm searches a [`Graph`] rather than the grid.
    pub fn is_graph_based(self) -> bool {
        self != Algorithm::Jps
    }

    /// The heuristic used when the caller does not pick one, or `None` for
    /// algorithms that ignore heuristics.
    pub fn default_heuristic(self) -> Option<Heuristic> {
        match self {
            Algorithm::Dijkstra | Algorithm::Bfs => None,
            _ => Some(Heuristic::Manhattan),
        }
    }

    /// The heuristic a run will actually use.
    fn resolve(self, heuristic: Option<Heuristic>) -> Heuristic {
        match self.default_heuristic() {
            Some(default) => heuristic.unwrap_or(default),
            None => Heuristic::Zero,
        }
    }

    /// Run this algorithm from `start` to `goal`.
    ///
    /// Graph-based algorithms search `graph`, or an 8-connected graph built
    /// from `map` when none is given. `heuristic` overrides
    /// [`default_heuristic`](Self::default_heuristic) and is ignored by
    /// Dijkstra and BFS.
    pub fn run<M: CostMap + ?Sized>(
        self,
        map: &M,
        graph: Option<&Graph>,
        start: Coord,
        goal: Coord,
        heuristic: Option<Heuristic>,
    ) -> Result<SearchResult, SearchError> {
        let h = self.resolve(heuristic);
        if !self.is_graph_based() {
            return jps(map, start, goal, h);
        }
        let built;
        let graph = match graph {
            Some(g) => g,
            None => {
                built = Graph::build(map);
                &built
            }
        };
        match self {
            Algorithm::AStar => graph.astar(start, goal, h),
            Algorithm::Dijkstra => graph.dijkstra(start, goal),
            Algorithm::Bfs => graph.bfs(start, goal),
            Algorithm::Greedy => graph.greedy(start, goal, h),
            Algorithm::BidirectionalAStar => graph.bidirectional_astar(start, goal, h),
            Algorithm::Jps => jps(map, start, goal, h),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownName;

    /// Accepts display names and a few spellings friendlier to a shell, such
    /// as `astar`, `greedy` or `bidirectional`. Case, spaces, `-` and `_`
    /// are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let algo = match key.as_str() {
            "a*" | "astar" => Algorithm::AStar,
            "dijkstra" => Algorithm::Dijkstra,
            "bfs" => Algorithm::Bfs,
            "greedy" | "greedybfs" => Algorithm::Greedy,
            "jps" => Algorithm::Jps,
            "bia*" | "biastar" | "bidirectional" => Algorithm::BidirectionalAStar,
            _ => {
                return Err(UnknownName {
                    what: "algorithm",
                    name: s.to_string(),
                });
            }
        };
        Ok(algo)
    }
}

/// Run each of `algorithms` from `start` to `goal` over `map`.
///
/// The 8-connected graph is built at most once and shared by every
/// graph-based algorithm. Results come back in the order requested; a
/// rejected endpoint fails each algorithm separately.
pub fn run_all<M: CostMap + ?Sized>(
    map: &M,
    start: Coord,
    goal: Coord,
    algorithms: &[Algorithm],
    heuristic: Option<Heuristic>,
) -> Vec<(Algorithm, Result<SearchResult, SearchError>)> {
    let graph = algorithms
        .iter()
        .any(|a| a.is_graph_based())
        .then(|| Graph::build(map));
    algorithms
        .iter()
        .map(|&a| (a, a.run(map, graph.as_ref(), start, goal, heuristic)))
        .collect()
}
