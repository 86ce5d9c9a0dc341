//! End-to-end scenarios running every algorithm on small hand-made maps.

use std::f64::consts::SQRT_2;

use pathgrid_core::{Coord, Grid};
use pathgrid_paths::{
    Algorithm, Connectivity, Graph, Heuristic, SearchError, SearchResult, UNREACHABLE, jps,
    run_all,
};

const EPS: f64 = 1e-9;

fn parse(s: &str) -> Grid {
    s.parse().unwrap()
}

fn endpoints(grid: &Grid) -> (Coord, Coord) {
    (grid.start().unwrap(), grid.end().unwrap())
}

fn result(
    outcomes: &[(Algorithm, Result<SearchResult, SearchError>)],
    a: Algorithm,
) -> &SearchResult {
    let (_, r) = outcomes.iter().find(|(x, _)| *x == a).unwrap();
    r.as_ref().unwrap()
}

#[test]
fn open_five_by_five_diagonal() {
    let grid = Grid::new(5, 5);
    let (s, t) = (Coord::new(0, 0), Coord::new(4, 4));
    let out = run_all(&grid, s, t, &Algorithm::ALL, None);
    let diagonal = 4.0 * SQRT_2;

    let astar = result(&out, Algorithm::AStar);
    assert!((astar.cost - diagonal).abs() < EPS);
    assert!((astar.cost - 5.657).abs() < 1e-3);
    assert!((result(&out, Algorithm::Jps).cost - astar.cost).abs() < EPS);
    assert!((result(&out, Algorithm::Dijkstra).cost - diagonal).abs() < EPS);

    // Diagonal edges are in the graph, so four hops reach the corner and
    // every one of them has to be diagonal.
    let bfs = result(&out, Algorithm::Bfs);
    assert_eq!(bfs.path_len(), 5);
    assert!((bfs.cost - diagonal).abs() < EPS);

    // With an admissible heuristic both directions agree on the optimum.
    let octile = run_all(
        &grid,
        s,
        t,
        &[Algorithm::AStar, Algorithm::BidirectionalAStar],
        Some(Heuristic::Octile),
    );
    let astar = result(&octile, Algorithm::AStar);
    let bi = result(&octile, Algorithm::BidirectionalAStar);
    assert!((bi.cost - astar.cost).abs() < EPS);
    assert!((bi.cost - diagonal).abs() < EPS);
    assert_eq!(bi.path_len(), 5);
}

#[test]
fn bfs_without_diagonals_pays_eight() {
    let grid = Grid::new(5, 5);
    let graph = Graph::build_with(&grid, Connectivity::Four);
    let r = graph.bfs(Coord::new(0, 0), Coord::new(4, 4)).unwrap();
    assert_eq!(r.cost, 8.0);
    assert_eq!(r.path_len(), 9);
}

#[test]
fn wall_column_blocks_everyone() {
    let grid = parse(
        "
S.#..
..#..
..#..
..#..
..#.E",
    );
    let (s, t) = endpoints(&grid);
    for (algo, r) in run_all(&grid, s, t, &Algorithm::ALL, None) {
        let r = r.unwrap();
        assert_eq!(r.path, None, "{algo}");
        assert_eq!(r.cost, UNREACHABLE, "{algo}");
        assert!(!r.explored.is_empty(), "{algo}");
    }
}

#[test]
fn trap_on_the_straight_line() {
    let grid = parse("...\nSTE");
    let (s, t) = endpoints(&grid);

    // Orthogonal moves only: the detour is four normal cells.
    let graph = Graph::build_with(&grid, Connectivity::Four);
    let a = graph.astar(s, t, Heuristic::Manhattan).unwrap();
    let d = graph.dijkstra(s, t).unwrap();
    let g = graph.greedy(s, t, Heuristic::Manhattan).unwrap();
    assert_eq!(a.cost, 4.0);
    assert_eq!(d.cost, 4.0);
    assert_eq!(a.path, d.path);
    assert!(!a.path.as_ref().unwrap().contains(&Coord::new(1, 1)));
    assert_eq!(g.cost, 11.0);
    assert_eq!(g.path, Some(vec![s, Coord::new(1, 1), t]));

    // With diagonals the detour is even cheaper, greedy still walks in.
    let out = run_all(&grid, s, t, &Algorithm::ALL, Some(Heuristic::Euclidean));
    assert!((result(&out, Algorithm::AStar).cost - 2.0 * SQRT_2).abs() < EPS);
    assert!((result(&out, Algorithm::BidirectionalAStar).cost - 2.0 * SQRT_2).abs() < EPS);
    assert_eq!(result(&out, Algorithm::Greedy).cost, 11.0);
    // Jump points assume uniform costs: the scan east reaches the goal
    // directly and the trap is paid in full.
    assert_eq!(result(&out, Algorithm::Jps).cost, 11.0);
    assert_eq!(result(&out, Algorithm::Bfs).cost, 11.0);
}

#[test]
fn clear_row_costs_the_same_for_everyone() {
    let grid = parse(
        "
.T.T.T
S....E
T.T.T.",
    );
    let (s, t) = endpoints(&grid);
    for (algo, r) in run_all(&grid, s, t, &Algorithm::ALL, None) {
        let r = r.unwrap();
        assert_eq!(r.cost, 5.0, "{algo}");
        assert_eq!(r.path_len(), 6, "{algo}");
    }
}

#[test]
fn start_is_goal_for_everyone() {
    let grid = parse("..T\n.#.\n...");
    let c = Coord::new(0, 2);
    for (algo, r) in run_all(&grid, c, c, &Algorithm::ALL, None) {
        let r = r.unwrap();
        assert_eq!(r.path, Some(vec![c]), "{algo}");
        assert_eq!(r.cost, 0.0, "{algo}");
        assert_eq!(r.explored, vec![c], "{algo}");
    }
}

#[test]
fn jps_explores_fewer_nodes_than_astar() {
    let grid = parse(
        "
S.........
..........
..####....
.....#....
.....#....
.........E",
    );
    let (s, t) = endpoints(&grid);
    let j = jps(&grid, s, t, Heuristic::Octile).unwrap();
    let a = Graph::build(&grid).astar(s, t, Heuristic::Octile).unwrap();
    assert!((j.cost - a.cost).abs() < EPS);
    assert!(j.explored.len() < a.explored.len());
}

#[test]
fn obstacle_endpoint_is_rejected_everywhere() {
    let grid = parse("S#\n..");
    let s = Coord::new(0, 0);
    let wall = Coord::new(0, 1);
    for (algo, r) in run_all(&grid, s, wall, &Algorithm::ALL, None) {
        assert!(
            matches!(r, Err(SearchError::InvalidEndpoint { coord, .. }) if coord == wall),
            "{algo}"
        );
    }
}
