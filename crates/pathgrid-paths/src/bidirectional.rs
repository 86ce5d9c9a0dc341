//! Bidirectional A*: one frontier grows from the start over outgoing edges,
//! the other from the goal over incoming edges, and the search stops once
//! neither can beat the cheapest meeting found so far.

use std::collections::BinaryHeap;

use pathgrid_core::Coord;

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::graph::{Edge, Graph};
use crate::search::{NO_PARENT, NodeRef, Nodes, SearchResult, UNREACHABLE};

/// One direction of the search.
struct Half {
    nodes: Nodes,
    open: BinaryHeap<NodeRef>,
    /// Where this half's heuristic aims.
    target: Coord,
    edges: fn(&Graph, usize) -> &[Edge],
}

impl Half {
    fn new(
        graph: &Graph,
        root: usize,
        target: Coord,
        heuristic: Heuristic,
        edges: fn(&Graph, usize) -> &[Edge],
    ) -> Self {
        let mut nodes = Nodes::new(graph.bounds());
        nodes[root].g = 0.0;
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            priority: heuristic.estimate(nodes.coord(root), target),
            g: 0.0,
            idx: root,
        });
        Self {
            nodes,
            open,
            target,
            edges,
        }
    }

    /// Lowest live priority, dropping stale entries off the top.
    fn min_priority(&mut self) -> Option<f64> {
        while let Some(&top) = self.open.peek() {
            if top.g > self.nodes[top.idx].g {
                self.open.pop();
            } else {
                return Some(top.priority);
            }
        }
        None
    }
}

impl Graph {
    /// Compute the cheapest path from `start` to `goal` by searching from
    /// both ends at once.
    ///
    /// Each iteration expands the frontier whose lowest priority is smaller,
    /// favouring the forward one on ties. A node that has a cost in both
    /// directions, when popped or when its cost improves, is a meeting
    /// candidate. Nodes whose
    /// cost reaches the best meeting cost are not expanded, and the search
    /// ends when both frontiers' lowest priorities reach it. With an
    /// admissible heuristic the cost equals [`Graph::astar`]'s.
    ///
    /// `explored` lists popped nodes of both directions, each once.
    pub fn bidirectional_astar(
        &self,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        let start_idx = self.endpoint(start)?;
        let goal_idx = self.endpoint(goal)?;

        let mut fwd = Half::new(self, start_idx, goal, heuristic, Graph::outgoing_at);
        let mut bwd = Half::new(self, goal_idx, start, heuristic, Graph::incoming_at);

        let mut best = UNREACHABLE;
        let mut meet: Option<usize> = None;
        let mut seen = vec![false; self.bounds().len()];
        let mut explored = Vec::new();

        loop {
            let (Some(pf), Some(pb)) = (fwd.min_priority(), bwd.min_priority()) else {
                break;
            };
            if meet.is_some() && pf >= best && pb >= best {
                break;
            }
            let (this, other) = if pb < pf {
                (&mut bwd, &fwd)
            } else {
                (&mut fwd, &bwd)
            };
            let Some(current) = this.open.pop() else {
                break;
            };
            let ci = current.idx;
            if !seen[ci] {
                seen[ci] = true;
                explored.push(this.nodes.coord(ci));
            }

            let candidate = current.g + other.nodes[ci].g;
            if candidate < best {
                log::trace!("meeting at {} with cost {candidate:.3}", this.nodes.coord(ci));
                best = candidate;
                meet = Some(ci);
            }
            if current.g >= best {
                continue;
            }

            for edge in (this.edges)(self, ci) {
                let Some(ni) = this.nodes.idx(edge.node) else {
                    continue;
                };
                let ng = current.g + edge.weight;
                if ng >= this.nodes[ni].g {
                    continue;
                }
                let n = &mut this.nodes[ni];
                n.g = ng;
                n.parent = ci;
                let candidate = ng + other.nodes[ni].g;
                if candidate < best {
                    best = candidate;
                    meet = Some(ni);
                }
                let f = ng + heuristic.estimate(edge.node, this.target);
                if f < best {
                    this.open.push(NodeRef {
                        priority: f,
                        g: ng,
                        idx: ni,
                    });
                }
            }
        }

        let result = match meet {
            Some(m) => {
                let mut path = fwd.nodes.path_to(m);
                let mut ci = bwd.nodes[m].parent;
                while ci != NO_PARENT {
                    path.push(bwd.nodes.coord(ci));
                    ci = bwd.nodes[ci].parent;
                }
                SearchResult::found(path, best, explored)
            }
            None => SearchResult::not_found(explored),
        };
        Ok(result.logged("Bi-A*", start, goal))
    }
}
