use std::collections::BinaryHeap;

use pathgrid_core::Coord;

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::{NodeRef, Nodes, SearchResult};

impl Graph {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// Frontier priority is `g + heuristic(node, goal)`. A node whose cost
    /// improves is pushed again; the outdated entry is skipped when popped.
    /// The search stops as soon as the goal is popped, so the result is
    /// optimal when `heuristic` is admissible.
    pub fn astar(
        &self,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        Ok(self
            .best_first_by_cost(start, goal, heuristic)?
            .logged("A*", start, goal))
    }

    pub(crate) fn best_first_by_cost(
        &self,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        let start_idx = self.endpoint(start)?;
        let goal_idx = self.endpoint(goal)?;

        let mut nodes = Nodes::new(self.bounds());
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut explored = Vec::new();

        nodes[start_idx].g = 0.0;
        open.push(NodeRef {
            priority: heuristic.estimate(start, goal),
            g: 0.0,
            idx: start_idx,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if current.g > nodes[ci].g {
                continue;
            }

            let cp = nodes.coord(ci);
            if !nodes[ci].closed {
                nodes[ci].closed = true;
                explored.push(cp);
            }

            if ci == goal_idx {
                return Ok(SearchResult::found(
                    nodes.path_to(goal_idx),
                    current.g,
                    explored,
                ));
            }

            for edge in self.outgoing_at(ci) {
                let Some(ni) = nodes.idx(edge.node) else {
                    continue;
                };
                let tentative_g = current.g + edge.weight;
                let n = &mut nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;
                open.push(NodeRef {
                    priority: tentative_g + heuristic.estimate(edge.node, goal),
                    g: tentative_g,
                    idx: ni,
                });
            }
        }

        Ok(SearchResult::not_found(explored))
    }
}
