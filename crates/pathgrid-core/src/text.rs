//! Text map format.
//!
//! One character per cell, one line per row:
//!
//! | glyph | cell |
//! |---|---|
//! | `.` or space | normal |
//! | `#` | obstacle |
//! | `T` | trap |
//! | `S` | start |
//! | `E` | end |
//!
//! Blank lines before the first row and after the last one are skipped.
//! Spaces inside rows are cells, so every row must have the same width.

use thiserror::Error;

use crate::cell::{Cell, CellKind};
use crate::config::{CostConfig, InvalidCost};
use crate::geom::Coord;
use crate::grid::Grid;

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The cost configuration cannot price walkable cells.
    #[error(transparent)]
    InvalidCost(#[from] InvalidCost),
    /// A line is not as wide as the first one.
    #[error("map line {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside the map alphabet was found.
    #[error("map contains invalid glyph \u{201c}{ch}\u{201d} at {at}")]
    InvalidGlyph { ch: char, at: Coord },
    /// A start or end marker appears more than once.
    #[error("map has more than one {kind:?} marker: {first} and {second}")]
    DuplicateMarker {
        kind: CellKind,
        first: Coord,
        second: Coord,
    },
}

/// The glyph used to render a cell kind.
pub(crate) fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Normal => '.',
        CellKind::Obstacle => '#',
        CellKind::Trap => 'T',
        CellKind::Start => 'S',
        CellKind::End => 'E',
    }
}

fn kind_of(ch: char) -> Option<CellKind> {
    match ch {
        '.' | ' ' => Some(CellKind::Normal),
        '#' => Some(CellKind::Obstacle),
        'T' => Some(CellKind::Trap),
        'S' => Some(CellKind::Start),
        'E' => Some(CellKind::End),
        _ => None,
    }
}

impl Grid {
    /// Parse a text map, pricing cells from `costs`.
    pub fn parse(s: &str, costs: &CostConfig) -> Result<Grid, GridError> {
        costs.validate()?;
        let blank = |l: &&str| l.trim().is_empty();
        let mut lines: Vec<&str> = s.lines().skip_while(blank).collect();
        while lines.last().is_some_and(blank) {
            lines.pop();
        }
        let width = lines.first().map_or(0, |l| l.chars().count() as i32);

        let mut grid = Grid::new(lines.len() as i32, width);
        let mut start: Option<Coord> = None;
        let mut end: Option<Coord> = None;

        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let found = line.chars().count() as i32;
            if found != width {
                return Err(GridError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row, col as i32);
                let kind = kind_of(ch).ok_or(GridError::InvalidGlyph { ch, at })?;
                let marker = match kind {
                    CellKind::Start => Some(&mut start),
                    CellKind::End => Some(&mut end),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(GridError::DuplicateMarker {
                            kind,
                            first,
                            second: at,
                        });
                    }
                    *slot = Some(at);
                }
                grid.set(at, Cell::with_kind(kind, costs));
            }
        }
        Ok(grid)
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    /// Parse with the default costs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s, &CostConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
S..#.
.T.#.
...#E
";

    #[test]
    fn parses_kinds_and_markers() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(2, 4)));
        assert_eq!(g.obstacle_count(), 3);
        assert_eq!(g.cost(Coord::new(1, 1)), 10.0);
        assert_eq!(g.cost(Coord::new(2, 4)), 1.0);
    }

    #[test]
    fn display_round_trips() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), ROOM.trim());
    }

    #[test]
    fn custom_costs() {
        let costs = CostConfig {
            normal: 2.0,
            trap: 5.0,
        };
        let g = Grid::parse("T.", &costs).unwrap();
        assert_eq!(g.cost(Coord::new(0, 0)), 5.0);
        assert_eq!(g.cost(Coord::new(0, 1)), 2.0);
    }

    #[test]
    fn rejects_inconsistent_width() {
        let err = "...\n..\n...".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_glyph() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidGlyph {
                ch: 'x',
                at: Coord::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn rejects_second_start() {
        let err = "S.S".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            GridError::DuplicateMarker {
                kind: CellKind::Start,
                ..
            }
        ));
    }

    #[test]
    fn leading_spaces_are_normal_cells() {
        let g: Grid = "\n  S\n#.E\n".parse().unwrap();
        assert_eq!(g.cols(), 3);
        assert_eq!(g.start(), Some(Coord::new(0, 2)));
        assert!(g.is_walkable(Coord::new(0, 0)));
        let g: Grid = "E. \n.S \n\n".parse().unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
    }

    #[test]
    fn rejects_unpayable_costs() {
        let costs = CostConfig {
            normal: 1.0,
            trap: f64::INFINITY,
        };
        let err = Grid::parse("S.T", &costs).unwrap_err();
        assert!(matches!(err, GridError::InvalidCost(InvalidCost { what: "trap", .. })));
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let g: Grid = "  \n ".parse().unwrap();
        assert!(g.bounds().is_empty());
    }
}
