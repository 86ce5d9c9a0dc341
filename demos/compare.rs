//! Run every search on one map and print a line per algorithm.
//!
//! Run: cargo run --bin compare -- demos/maps/room.txt --heuristic octile
//!      cargo run --bin compare -- --seed 42
//!
//! Set `RUST_LOG=debug` to see graph and search summaries.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use pathgrid_core::{Coord, CostConfig, Grid, GridConfig};
use pathgrid_demos::{Density, compare, parse_cost, random_grid, random_open_cell};
use pathgrid_paths::{Algorithm, Connectivity, Heuristic};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(about = "Compare grid pathfinding algorithms on one map")]
struct Options {
    /// Text map (`.` normal, `#` obstacle, `T` trap, `S` start, `E` end).
    /// A random map is generated when omitted.
    map: Option<PathBuf>,

    /// Algorithm to run; repeat to run several. Defaults to all of them.
    #[arg(short, long = "algorithm", value_name = "NAME")]
    algorithms: Vec<Algorithm>,

    /// Heuristic for A*, Greedy, JPS and Bi-A* (manhattan, euclidean,
    /// octile, chebyshev, zero).
    #[arg(long)]
    heuristic: Option<Heuristic>,

    /// Orthogonal moves only for the graph-based algorithms.
    #[arg(long)]
    four_way: bool,

    /// Start cell as `ROW,COL`, overriding the `S` marker.
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// Goal cell as `ROW,COL`, overriding the `E` marker.
    #[arg(long, value_parser = parse_coord)]
    goal: Option<Coord>,

    /// Cost of entering a trap cell: finite and greater than 0.
    #[arg(long, default_value_t = CostConfig::TRAP, value_parser = parse_cost)]
    trap_cost: f64,

    /// Seed for the random map.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the map before the results.
    #[arg(long)]
    show: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Coord::new(row, col))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Options::parse();
    let costs = CostConfig {
        trap: opt.trap_cost,
        ..CostConfig::default()
    };

    let mut rng = StdRng::seed_from_u64(opt.seed);
    let grid = match &opt.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Grid::parse(&text, &costs)?
        }
        None => {
            let config = GridConfig {
                costs,
                ..GridConfig::default()
            };
            random_grid(&config, Density::default(), &mut rng)
        }
    };
    log::info!(
        "map {}: {} obstacles",
        grid.bounds(),
        grid.obstacle_count()
    );

    let start = opt
        .start
        .or_else(|| grid.start())
        .or_else(|| random_open_cell(&grid, &mut rng))
        .ok_or("map has no open cell to start from")?;
    let goal = opt
        .goal
        .or_else(|| grid.end())
        .or_else(|| random_open_cell(&grid, &mut rng))
        .ok_or("map has no open cell to end on")?;

    let algorithms = if opt.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        opt.algorithms
    };
    let connectivity = if opt.four_way {
        Connectivity::Four
    } else {
        Connectivity::Eight
    };

    if opt.show {
        println!("{grid}\n");
    }
    println!("--- {start} -> {goal} ---");
    for report in compare(&grid, start, goal, &algorithms, opt.heuristic, connectivity) {
        println!("  {report}");
    }
    Ok(())
}
