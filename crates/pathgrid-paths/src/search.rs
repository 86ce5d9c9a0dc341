use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use pathgrid_core::{Bounds, Coord};

/// Cost reported for an unreachable goal.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal inclusive, one entry per traversed cell.
    pub path: Option<Vec<Coord>>,
    /// Sum of edge weights along `path`, or [`UNREACHABLE`].
    pub cost: f64,
    /// Nodes in the order they were popped and accepted.
    pub explored: Vec<Coord>,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<Coord>, cost: f64, explored: Vec<Coord>) -> Self {
        Self {
            path: Some(path),
            cost,
            explored,
        }
    }

    pub(crate) fn not_found(explored: Vec<Coord>) -> Self {
        Self {
            path: None,
            cost: UNREACHABLE,
            explored,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, 0 when none was found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    pub(crate) fn logged(self, algo: &str, start: Coord, goal: Coord) -> Self {
        log::debug!(
            "{algo} {start} -> {goal}: found={} cost={:.3} explored={}",
            self.is_found(),
            self.cost,
            self.explored.len()
        );
        self
    }
}

// ---------------------------------------------------------------------------
// Per-search node table
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Flat, row-major node table owned by a single search call.
pub(crate) struct Nodes {
    bounds: Bounds,
    nodes: Vec<Node>,
}

impl Nodes {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
        }
    }

    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.bounds.index(c)
    }

    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }

    /// Follow parent pointers from `idx` back to the root, returning the
    /// chain in root-first order.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

impl Index<usize> for Nodes {
    type Output = Node;
    #[inline]
    fn index(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}

impl IndexMut<usize> for Nodes {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Frontier entry ordered for use in `BinaryHeap` as a min-queue on
/// `(priority, g, idx)`. Since indices are row-major, equal keys fall back
/// to coordinate order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) priority: f64,
    pub(crate) g: f64,
    pub(crate) idx: usize,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_priority_then_g_then_index() {
        let mut open = BinaryHeap::new();
        for (priority, g, idx) in [(3.0, 0.0, 0), (1.0, 2.0, 5), (1.0, 1.0, 9), (1.0, 1.0, 4)] {
            open.push(NodeRef { priority, g, idx });
        }
        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![4, 9, 5, 0]);
    }

    #[test]
    fn path_to_follows_parents() {
        let mut nodes = Nodes::new(Bounds::new(2, 3));
        nodes[4].parent = 1;
        nodes[1].parent = 0;
        assert_eq!(
            nodes.path_to(4),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(nodes.path_to(2), vec![Coord::new(0, 2)]);
    }

    #[test]
    fn result_helpers() {
        let r = SearchResult::not_found(vec![Coord::ZERO]);
        assert!(!r.is_found());
        assert_eq!(r.path_len(), 0);
        assert_eq!(r.cost, UNREACHABLE);
        let r = SearchResult::found(vec![Coord::ZERO, Coord::new(0, 1)], 1.0, vec![]);
        assert_eq!(r.path_len(), 2);
    }
}
