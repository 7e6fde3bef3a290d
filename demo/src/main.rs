//! `gridpath`: run a search strategy over a terrain map and print the route.
//!
//! Usage:
//!   gridpath                                  # 12x12 open map, BFS
//!   gridpath --map demo/maps/maze.txt --algo dfs
//!   gridpath --block 1,0 --block 1,1 --all    # edit the default map, try everything

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use gridpath_core::{Coord, DEFAULT_MAP_SIZE, Map, TerrainGrid, format_grid, load_grid};
use gridpath_search::{Algorithm, Path, SearchError, find_path};
use log::{info, warn};

use crate::render::{parse_coord, render};

/// Grid pathfinding over blocked/open terrain.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file: one row per line, integer codes separated by commas and/or spaces
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Algorithm key: dfs, bfs, hill, best, astar, dijkstra (any case)
    #[arg(short, long, default_value = "bfs")]
    algo: Algorithm,

    /// Side length of the open map used when no file is given
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE)]
    size: usize,

    /// Start cell as ROW,COL (default: top-left corner)
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// End cell as ROW,COL (default: bottom-right corner)
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Toggle a cell between blocked and open before searching (repeatable)
    #[arg(long = "block", value_parser = parse_coord)]
    blocks: Vec<Coord>,

    /// Write the map, with the path marked, back out in the map file format
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run every registered algorithm instead of just --algo
    #[arg(long)]
    all: bool,
}

fn build_map(args: &Args) -> Result<Map> {
    let grid = match &args.map {
        Some(path) => {
            load_grid(path).with_context(|| format!("failed to load map {}", path.display()))?
        }
        None => TerrainGrid::open(args.size, args.size),
    };
    let corners = Map::with_corners(grid);
    let start = args.start.unwrap_or(corners.start());
    let end = args.end.unwrap_or(corners.end());
    let mut map = Map::new(corners.grid().clone(), start, end)?;

    for &c in &args.blocks {
        if !map.toggle(c) {
            bail!("--block {c} is outside the map");
        }
    }
    Ok(map)
}

/// Run one algorithm. Unimplemented strategies are reported rather than
/// fatal when `tolerate_unimplemented` is set.
fn run(algo: Algorithm, map: &Map, tolerate_unimplemented: bool) -> Result<Option<Path>> {
    match find_path(algo, map) {
        Ok(Some(path)) => Ok(Some(path)),
        Ok(None) => {
            println!("{algo}: no path found");
            Ok(None)
        }
        Err(SearchError::Unimplemented(_)) if tolerate_unimplemented => {
            warn!("{algo}: skipped, not implemented");
            println!("{algo}: not implemented");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("{algo} search failed")),
    }
}

/// Mark `path` on a copy of `map` and describe it: one summary line, then
/// the rendered grid.
fn report(algo: Algorithm, map: &Map, path: &Path) -> (Map, String) {
    let mut shown = map.clone();
    shown.mark_path(path.coords());
    let text = format!("{algo}: {} steps\n{}", path.steps(), render(&shown));
    (shown, text)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let map = build_map(&args)?;
    info!(
        "{}x{} map, {} -> {}",
        map.grid().rows(),
        map.grid().cols(),
        map.start(),
        map.end()
    );

    let algos: Vec<Algorithm> = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algo]
    };

    let mut marked = map.clone();
    for algo in algos {
        let Some(path) = run(algo, &map, args.all)? else {
            continue;
        };
        let (shown, report) = report(algo, &map, &path);
        print!("{report}");
        marked = shown;
    }

    if let Some(out) = &args.output {
        fs::write(out, format_grid(marked.grid()))
            .with_context(|| format!("failed to write {}", out.display()))?;
        info!("wrote {}", out.display());
    }
    Ok(())
}
