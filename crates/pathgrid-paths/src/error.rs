//! Error types for the search engine.
//!
//! An unreachable goal is not an error: it is reported as a
//! [`SearchResult`](crate::SearchResult) with no path and an infinite cost.

use pathgrid_core::Coord;
use thiserror::Error;

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointReason {
    OutOfBounds,
    Obstacle,
}

/// Conditions that abort a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The start or goal cannot be stood on.
    #[error("invalid endpoint {coord}: {reason:?}")]
    InvalidEndpoint { coord: Coord, reason: EndpointReason },
    /// Jump point search walked into a blocked cell between two jump points.
    #[error("blocked cell {at} between jump points {from} and {to}")]
    InternalInconsistency { at: Coord, from: Coord, to: Coord },
}

/// A name that does not match any known algorithm or heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what} \u{201c}{name}\u{201d}")]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
}
