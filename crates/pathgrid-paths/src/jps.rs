//! Jump Point Search (JPS) on weighted 8-connected grids.
//!
//! JPS searches the grid directly instead of a prebuilt [`Graph`]. It
//! "jumps" along straight and diagonal lines and only puts *jump points* on
//! the open list: the goal, and cells where a blocked neighbour forces a turn.
//! Segment costs are still summed cell by cell, so traps along a jump are
//! paid for in full.
//!
//! Diagonal jumps stop as soon as either cell of the corner they step past
//! is blocked, which is coarser than canonical forced-neighbour detection.
//! A diagonal step squeezing between two blocked cells is never taken, in
//! line with [`Graph::build`].
//!
//! [`Graph`]: crate::Graph
//! [`Graph::build`]: crate::Graph::build

use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use pathgrid_core::{Coord, DIRECTIONS};

use crate::distance::Heuristic;
use crate::error::{EndpointReason, SearchError};
use crate::search::{NO_PARENT, NodeRef, Nodes, SearchResult};
use crate::traits::CostMap;

/// Compute a path from `start` to `goal` with Jump Point Search.
///
/// `explored` holds jump points in the order they were popped, so it is
/// much shorter than the trace of the graph searches. The returned path has
/// one entry per traversed cell.
///
/// # Errors
///
/// [`SearchError::InvalidEndpoint`] if `start` or `goal` is out of bounds or
/// an obstacle, and [`SearchError::InternalInconsistency`] if a blocked cell
/// turns up between two consecutive jump points.
pub fn jps<M: CostMap + ?Sized>(
    map: &M,
    start: Coord,
    goal: Coord,
    heuristic: Heuristic,
) -> Result<SearchResult, SearchError> {
    let start_idx = endpoint(map, start)?;
    let goal_idx = endpoint(map, goal)?;

    let jumper = Jumper { map, goal };
    let mut nodes = Nodes::new(map.bounds());
    nodes[start_idx].g = 0.0;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        priority: heuristic.estimate(start, goal),
        g: 0.0,
        idx: start_idx,
    });
    let mut explored = Vec::new();

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if current.g > nodes[ci].g {
            continue;
        }
        let cp = nodes.coord(ci);
        if !nodes[ci].closed {
            nodes[ci].closed = true;
            explored.push(cp);
        }

        if ci == goal_idx {
            let jump_points = nodes.path_to(goal_idx);
            let (path, cost) = interpolate(map, &jump_points)?;
            return Ok(SearchResult::found(path, cost, explored).logged("JPS", start, goal));
        }

        let parent = nodes[ci].parent;
        let dirs = if parent == NO_PARENT {
            DIRECTIONS
                .iter()
                .copied()
                .filter(|&d| map.is_walkable(cp + d))
                .collect()
        } else {
            jumper.pruned_dirs(cp, (cp - nodes.coord(parent)).signum())
        };

        let mut successors: Vec<Coord> = Vec::with_capacity(dirs.len());
        for d in dirs {
            if let Some(jp) = jumper.jump(cp, d) {
                if !successors.contains(&jp) {
                    successors.push(jp);
                }
            }
        }

        for jp in successors {
            let Some(ji) = nodes.idx(jp) else {
                continue;
            };
            let ng = current.g + walk(map, cp, jp, |_| ())?;
            if ng >= nodes[ji].g {
                continue;
            }
            log::trace!("jump point {jp} from {cp}, g={ng:.3}");
            nodes[ji].g = ng;
            nodes[ji].parent = ci;
            open.push(NodeRef {
                priority: ng + heuristic.estimate(jp, goal),
                g: ng,
                idx: ji,
            });
        }
    }

    Ok(SearchResult::not_found(explored).logged("JPS", start, goal))
}

fn endpoint<M: CostMap + ?Sized>(map: &M, c: Coord) -> Result<usize, SearchError> {
    let reason = match map.bounds().index(c) {
        None => EndpointReason::OutOfBounds,
        Some(_) if map.is_obstacle(c) => EndpointReason::Obstacle,
        Some(i) => return Ok(i),
    };
    Err(SearchError::InvalidEndpoint { coord: c, reason })
}

struct Jumper<'a, M: ?Sized> {
    map: &'a M,
    goal: Coord,
}

impl<M: CostMap + ?Sized> Jumper<'_, M> {
    #[inline]
    fn open(&self, c: Coord) -> bool {
        self.map.is_walkable(c)
    }

    /// Scan from `from` along `dir` and return the first jump point.
    fn jump(&self, from: Coord, dir: Coord) -> Option<Coord> {
        let Coord { row: dr, col: dc } = dir;
        let mut cur = from;
        loop {
            let next = cur + dir;
            if !self.open(next) {
                return None;
            }
            if dir.is_diagonal() && !self.open(cur.shift(dr, 0)) && !self.open(cur.shift(0, dc)) {
                return None;
            }
            if next == self.goal {
                return Some(next);
            }

            if dc == 0 {
                // vertical
                if (!self.open(next.shift(0, -1)) && self.open(next.shift(dr, -1)))
                    || (!self.open(next.shift(0, 1)) && self.open(next.shift(dr, 1)))
                {
                    return Some(next);
                }
            } else if dr == 0 {
                // horizontal
                if (!self.open(next.shift(-1, 0)) && self.open(next.shift(-1, dc)))
                    || (!self.open(next.shift(1, 0)) && self.open(next.shift(1, dc)))
                {
                    return Some(next);
                }
            } else {
                if self.jump(next, Coord::new(dr, 0)).is_some()
                    || self.jump(next, Coord::new(0, dc)).is_some()
                {
                    return Some(next);
                }
                if !self.open(cur.shift(dr, 0)) || !self.open(cur.shift(0, dc)) {
                    return Some(next);
                }
            }
            cur = next;
        }
    }

    /// Directions worth scanning from `p` when it was entered moving along
    /// `d`.
    fn pruned_dirs(&self, p: Coord, d: Coord) -> Vec<Coord> {
        let Coord { row: dr, col: dc } = d;
        let mut dirs = Vec::with_capacity(5);
        let mut push = |dir: Coord| {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        };

        if d.is_diagonal() {
            if self.open(p.shift(dr, 0)) {
                push(Coord::new(dr, 0));
            }
            if self.open(p.shift(0, dc)) {
                push(Coord::new(0, dc));
            }
            if self.open(p + d) {
                push(d);
            }
            // forced
            if !self.open(p.shift(0, -dc)) && self.open(p.shift(dr, -dc)) {
                push(Coord::new(dr, -dc));
            }
            if !self.open(p.shift(-dr, 0)) && self.open(p.shift(-dr, dc)) {
                push(Coord::new(-dr, dc));
            }
        } else {
            if self.open(p + d) {
                push(d);
            }
            if dr != 0 {
                for side in [-1, 1] {
                    if !self.open(p.shift(0, side)) && self.open(p.shift(dr, side)) {
                        push(Coord::new(dr, side));
                    }
                }
            } else {
                for side in [-1, 1] {
                    if !self.open(p.shift(side, 0)) && self.open(p.shift(side, dc)) {
                        push(Coord::new(side, dc));
                    }
                }
            }
        }
        dirs
    }
}

/// Step cell by cell from `from` to `to`, calling `visit` on every entered
/// cell and returning the summed entry cost.
fn walk<M: CostMap + ?Sized>(
    map: &M,
    from: Coord,
    to: Coord,
    mut visit: impl FnMut(Coord),
) -> Result<f64, SearchError> {
    let mut cost = 0.0;
    let mut cur = from;
    while cur != to {
        let step = (to - cur).signum();
        cur = cur + step;
        if !map.is_walkable(cur) {
            return Err(SearchError::InternalInconsistency { at: cur, from, to });
        }
        let c = map.cost(cur);
        cost += if step.is_diagonal() { c * SQRT_2 } else { c };
        visit(cur);
    }
    Ok(cost)
}

/// Expand a chain of jump points into the full cell path and its cost.
fn interpolate<M: CostMap + ?Sized>(
    map: &M,
    jump_points: &[Coord],
) -> Result<(Vec<Coord>, f64), SearchError> {
    let mut path = Vec::with_capacity(jump_points.len());
    path.extend(jump_points.first().copied());
    let mut cost = 0.0;
    for w in jump_points.windows(2) {
        cost += walk(map, w[0], w[1], |c| path.push(c))?;
    }
    Ok((path, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use pathgrid_core::Grid;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    fn open5() -> Grid {
        Grid::new(5, 5)
    }

    #[test]
    fn straight_diagonal_on_open_grid() {
        let g = open5();
        let r = jps(&g, Coord::new(0, 0), Coord::new(4, 4), Heuristic::Octile).unwrap();
        assert!((r.cost - 4.0 * SQRT_2).abs() < 1e-9);
        assert_eq!(
            r.path,
            Some((0..5).map(|i| Coord::new(i, i)).collect::<Vec<_>>())
        );
        // Only the start and the goal are ever popped.
        assert_eq!(r.explored, vec![Coord::new(0, 0), Coord::new(4, 4)]);
    }

    #[test]
    fn path_is_full_resolution() {
        let g = grid(".......\n.......");
        let r = jps(&g, Coord::new(0, 0), Coord::new(0, 6), Heuristic::Manhattan).unwrap();
        let path = r.path.unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.windows(2).all(|w| (w[1] - w[0]).signum() == w[1] - w[0]));
        assert_eq!(r.cost, 6.0);
    }

    #[test]
    fn pays_for_traps_inside_a_jump() {
        let g = grid("..T..");
        let r = jps(&g, Coord::new(0, 0), Coord::new(0, 4), Heuristic::Manhattan).unwrap();
        assert_eq!(r.cost, 13.0);
    }

    #[test]
    fn goes_around_a_wall() {
        let text = "\
.....
..#..
..#..
..#..
.....";
        let g = grid(text);
        let (s, t) = (Coord::new(2, 0), Coord::new(2, 4));
        let r = jps(&g, s, t, Heuristic::Octile).unwrap();
        let a = Graph::build(&g).astar(s, t, Heuristic::Octile).unwrap();
        assert!((r.cost - a.cost).abs() < 1e-9);
        let path = r.path.unwrap();
        assert!(path.iter().all(|&c| g.is_walkable(c)));
        assert!(r.explored.len() < a.explored.len());
    }

    #[test]
    fn never_squeezes_between_two_walls() {
        let g = grid(".#\n#.");
        let r = jps(&g, Coord::new(0, 0), Coord::new(1, 1), Heuristic::Octile).unwrap();
        assert!(!r.is_found());
        assert_eq!(r.explored, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn start_equals_goal() {
        let g = open5();
        let c = Coord::new(2, 3);
        let r = jps(&g, c, c, Heuristic::Manhattan).unwrap();
        assert_eq!(r.path, Some(vec![c]));
        assert_eq!(r.cost, 0.0);
        assert_eq!(r.explored, vec![c]);
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = grid("..#");
        assert_eq!(
            jps(&g, Coord::new(0, 0), Coord::new(0, 2), Heuristic::Zero),
            Err(SearchError::InvalidEndpoint {
                coord: Coord::new(0, 2),
                reason: EndpointReason::Obstacle
            })
        );
        assert!(matches!(
            jps(&g, Coord::new(-1, 0), Coord::new(0, 1), Heuristic::Zero),
            Err(SearchError::InvalidEndpoint {
                reason: EndpointReason::OutOfBounds,
                ..
            })
        ));
    }

    #[test]
    fn forced_neighbor_stops_straight_jump() {
        // Moving east along row 1, the wall above (0,2) ends at column 3.
        let g = grid("###..\n.....\n.....");
        let j = Jumper {
            map: &g,
            goal: Coord::new(2, 4),
        };
        assert_eq!(j.jump(Coord::new(1, 0), Coord::new(0, 1)), Some(Coord::new(1, 2)));
        assert_eq!(j.jump(Coord::new(2, 0), Coord::new(0, 1)), Some(Coord::new(2, 4)));
        assert_eq!(j.jump(Coord::new(2, 4), Coord::new(0, 1)), None);
    }

    #[test]
    fn walk_reports_blocked_cells() {
        let g = grid("..#..");
        assert_eq!(
            walk(&g, Coord::new(0, 0), Coord::new(0, 4), |_| ()),
            Err(SearchError::InternalInconsistency {
                at: Coord::new(0, 2),
                from: Coord::new(0, 0),
                to: Coord::new(0, 4)
            })
        );
    }
}
