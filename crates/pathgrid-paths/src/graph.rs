//! Grid-to-graph lowering.
//!
//! [`Graph::build`] turns a [`CostMap`] into a directed, weighted adjacency
//! structure. Every non-obstacle cell becomes a node; edges point at
//! non-obstacle neighbours and weigh the cost of the cell they enter, scaled
//! by √2 for diagonal steps. A diagonal edge is left out when both cells
//! forming its corner are obstacles.

use std::f64::consts::SQRT_2;

use pathgrid_core::{Bounds, Coord, DIRECTIONS, ORTHOGONAL};

use crate::error::{EndpointReason, SearchError};
use crate::traits::CostMap;

/// Which moves the graph allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal moves only.
    Four,
    /// Orthogonal and diagonal moves.
    #[default]
    Eight,
}

impl Connectivity {
    /// Candidate steps, in graph edge order.
    pub fn directions(self) -> &'static [Coord] {
        match self {
            Connectivity::Four => &ORTHOGONAL,
            Connectivity::Eight => &DIRECTIONS,
        }
    }
}

/// One weighted adjacency entry.
///
/// In [`Graph::neighbors`] `node` is the edge target; in
/// [`Graph::predecessors`] it is the edge source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub node: Coord,
    pub weight: f64,
}

/// Weighted directed graph over the walkable cells of a grid.
#[derive(Clone, Debug)]
pub struct Graph {
    bounds: Bounds,
    nodes: Vec<bool>,
    outgoing: Vec<Vec<Edge>>,
    incoming: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build an 8-connected graph.
    pub fn build<M: CostMap + ?Sized>(map: &M) -> Self {
        Self::build_with(map, Connectivity::Eight)
    }

    /// Build a graph with the given connectivity.
    pub fn build_with<M: CostMap + ?Sized>(map: &M, connectivity: Connectivity) -> Self {
        let bounds = map.bounds();
        let len = bounds.len();
        let mut graph = Self {
            bounds,
            nodes: vec![false; len],
            outgoing: vec![Vec::new(); len],
            incoming: vec![Vec::new(); len],
            edge_count: 0,
        };

        for from in bounds.iter() {
            if !map.is_walkable(from) {
                continue;
            }
            let Some(fi) = bounds.index(from) else {
                continue;
            };
            graph.nodes[fi] = true;

            for &d in connectivity.directions() {
                let to = from + d;
                if !map.is_walkable(to) {
                    continue;
                }
                let mut weight = map.cost(to);
                if d.is_diagonal() {
                    // No squeezing between two walls.
                    if map.is_obstacle(from.shift(d.row, 0)) && map.is_obstacle(from.shift(0, d.col))
                    {
                        continue;
                    }
                    weight *= SQRT_2;
                }
                let Some(ti) = bounds.index(to) else {
                    continue;
                };
                graph.outgoing[fi].push(Edge { node: to, weight });
                graph.incoming[ti].push(Edge { node: from, weight });
                graph.edge_count += 1;
            }
        }

        log::debug!(
            "built graph {bounds} ({connectivity:?}): {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count
        );
        graph
    }

    /// Extent of the grid the graph was built from.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `c` is a node of the graph.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.index(c).is_some_and(|i| self.nodes[i])
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(i, _)| self.bounds.coord(i))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|&&present| present).count()
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of `c`. Empty for unknown nodes.
    #[inline]
    pub fn neighbors(&self, c: Coord) -> &[Edge] {
        self.bounds
            .index(c)
            .map_or(&[][..], |i| self.outgoing[i].as_slice())
    }

    /// Incoming edges of `c`, each carrying its source node.
    #[inline]
    pub fn predecessors(&self, c: Coord) -> &[Edge] {
        self.bounds
            .index(c)
            .map_or(&[][..], |i| self.incoming[i].as_slice())
    }

    /// Weight of the edge `from -> to`, or `f64::INFINITY` if there is none.
    pub fn edge_weight(&self, from: Coord, to: Coord) -> f64 {
        self.neighbors(from)
            .iter()
            .find(|e| e.node == to)
            .map_or(f64::INFINITY, |e| e.weight)
    }

    #[inline]
    pub(crate) fn outgoing_at(&self, idx: usize) -> &[Edge] {
        &self.outgoing[idx]
    }

    #[inline]
    pub(crate) fn incoming_at(&self, idx: usize) -> &[Edge] {
        &self.incoming[idx]
    }

    /// Flat index of an endpoint, rejecting cells that are not nodes.
    pub(crate) fn endpoint(&self, c: Coord) -> Result<usize, SearchError> {
        match self.bounds.index(c) {
            None => Err(SearchError::InvalidEndpoint {
                coord: c,
                reason: EndpointReason::OutOfBounds,
            }),
            Some(i) if !self.nodes[i] => Err(SearchError::InvalidEndpoint {
                coord: c,
                reason: EndpointReason::Obstacle,
            }),
            Some(i) => Ok(i),
        }
    }
}
