use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathgrid_core::Coord;

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::{NO_PARENT, NodeRef, Nodes, SearchResult};

/// Frontier entry that remembers who discovered it: the same node can sit in
/// the queue several times with different parents, and the first one popped
/// wins.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: NodeRef,
    parent: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.parent.cmp(&self.parent))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Greedy best-first search from `start` to `goal`.
    ///
    /// The frontier is ordered by `heuristic(node, goal)` alone. Accumulated
    /// cost is tracked for reporting but never used for ordering, so the
    /// path is not guaranteed to be cheapest.
    pub fn greedy(
        &self,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        let start_idx = self.endpoint(start)?;
        let goal_idx = self.endpoint(goal)?;

        let mut nodes = Nodes::new(self.bounds());
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut explored = Vec::new();

        open.push(Entry {
            key: NodeRef {
                priority: heuristic.estimate(start, goal),
                g: 0.0,
                idx: start_idx,
            },
            parent: NO_PARENT,
        });

        while let Some(Entry { key: current, parent }) = open.pop() {
            let ci = current.idx;
            if nodes[ci].closed {
                continue;
            }
            let n = &mut nodes[ci];
            n.closed = true;
            n.g = current.g;
            n.parent = parent;
            explored.push(nodes.coord(ci));

            if ci == goal_idx {
                let path = nodes.path_to(goal_idx);
                return Ok(SearchResult::found(path, current.g, explored).logged(
                    "Greedy BFS",
                    start,
                    goal,
                ));
            }

            for edge in self.outgoing_at(ci) {
                let Some(ni) = nodes.idx(edge.node) else {
                    continue;
                };
                if nodes[ni].closed {
                    continue;
                }
                open.push(Entry {
                    key: NodeRef {
                        priority: heuristic.estimate(edge.node, goal),
                        g: current.g + edge.weight,
                        idx: ni,
                    },
                    parent: ci,
                });
            }
        }

        Ok(SearchResult::not_found(explored).logged("Greedy BFS", start, goal))
    }
}
