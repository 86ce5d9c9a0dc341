use std::collections::VecDeque;

use pathgrid_core::Coord;

use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::{Nodes, SearchResult};

impl Graph {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Nodes are marked on first discovery and expanded in FIFO order, so the
    /// path has the fewest steps, not necessarily the lowest cost. The
    /// reported cost is the real sum of edge weights along that path.
    pub fn bfs(&self, start: Coord, goal: Coord) -> Result<SearchResult, SearchError> {
        let start_idx = self.endpoint(start)?;
        let goal_idx = self.endpoint(goal)?;

        // `closed` marks discovery, not expansion.
        let mut nodes = Nodes::new(self.bounds());
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut explored = Vec::new();

        nodes[start_idx].g = 0.0;
        nodes[start_idx].closed = true;
        queue.push_back(start_idx);

        while let Some(ci) = queue.pop_front() {
            let current_g = nodes[ci].g;
            explored.push(nodes.coord(ci));

            if ci == goal_idx {
                let path = nodes.path_to(goal_idx);
                return Ok(SearchResult::found(path, current_g, explored).logged("BFS", start, goal));
            }

            for edge in self.outgoing_at(ci) {
                let Some(ni) = nodes.idx(edge.node) else {
                    continue;
                };
                let n = &mut nodes[ni];
                if n.closed {
                    continue;
                }
                n.closed = true;
                n.g = current_g + edge.weight;
                n.parent = ci;
                queue.push_back(ni);
            }
        }

        Ok(SearchResult::not_found(explored).logged("BFS", start, goal))
    }
}
