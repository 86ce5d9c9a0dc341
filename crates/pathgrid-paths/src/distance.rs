use std::f64::consts::SQRT_2;
use std::str::FromStr;

use pathgrid_core::Coord;

use crate::error::UnknownName;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    f64::from((a.row - b.row).abs() + (a.col - b.col).abs())
}

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Octile distance: the exact unit-cost distance on an 8-connected grid
/// with diagonal steps costing √2.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    f64::from(hi) + (SQRT_2 - 1.0) * f64::from(lo)
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> f64 {
    f64::from((a.row - b.row).abs().max((a.col - b.col).abs()))
}

/// Always zero. Turns A* into Dijkstra.
#[inline]
pub fn zero(_a: Coord, _b: Coord) -> f64 {
    0.0
}

/// Distance estimator used to order heuristic-driven frontiers.
///
/// Optimality of A* and bidirectional A* needs an admissible estimate.
/// With diagonal steps costing √2, [`Heuristic::Manhattan`] can overestimate;
/// [`Heuristic::Euclidean`] and [`Heuristic::Octile`] are admissible whenever
/// every cell costs at least 1.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Octile,
    Chebyshev,
    Zero,
    /// A caller supplied estimator.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(Coord, Coord) -> f64),
}

impl Heuristic {
    /// The named estimators, in display order.
    pub const NAMED: [Heuristic; 5] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Octile,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: Coord, to: Coord) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Octile => octile(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
            Heuristic::Zero => zero(from, to),
            Heuristic::Custom(f) => f(from, to),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Octile => "octile",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Zero => "zero",
            Heuristic::Custom(_) => "custom",
        }
    }
}

impl FromStr for Heuristic {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Heuristic::NAMED
            .into_iter()
            .find(|h| h.name() == lower)
            .ok_or(UnknownName {
                what: "heuristic",
                name: s.to_string(),
            })
    }
}
