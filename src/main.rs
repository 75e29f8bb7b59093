use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use slider_puzzle::{
    input,
    render::{self, ReportOptions},
    scramble, Board, DuplicateCheck, Solver, SolverConfig,
};

#[derive(Parser)]
#[command(author, version, about = "Find a shortest solution to a sliding-tile puzzle", long_about = None)]
struct Args {
    /// Puzzle file: the dimension N followed by N*N tiles, 0 for the blank (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Solve a random solvable puzzle of dimension N instead of reading one
    #[arg(short = 'r', long = "random", value_name = "N", conflicts_with = "file")]
    random: Option<usize>,

    /// Seed for the random puzzle
    #[arg(short = 's', long = "seed", requires = "random")]
    seed: Option<u64>,

    /// Scramble the random puzzle with K slides from the goal instead of a full shuffle
    #[arg(short = 'w', long = "walk", value_name = "K", requires = "random")]
    walk: Option<usize>,

    /// Give up after this many expansions (overrides SLIDER_MAX_EXPANSIONS)
    #[arg(short = 'm', long = "max-expansions", value_parser = positive)]
    max_expansions: Option<usize>,

    /// Skip boards that were already expanded instead of only checking ancestors
    #[arg(long = "closed-set")]
    closed_set: bool,

    /// Colour tiles by whether they are in their goal cell
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Print the slide leading to each board
    #[arg(long = "show-slides")]
    show_slides: bool,
}

fn positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();

    let mut config = SolverConfig::from_env()?;
    if let Some(limit) = args.max_expansions {
        config.max_expansions = Some(limit);
    }
    if args.closed_set {
        config.duplicate_check = DuplicateCheck::ClosedSet;
    }

    let board = load_board(&args)?;
    info!(
        "Solving {0}x{0} puzzle (hamming {1}, manhattan {2})",
        board.dimension(),
        board.hamming(),
        board.manhattan()
    );
    if !scramble::is_solvable(&board) {
        info!("Inversion parity says this puzzle has no solution");
    }

    let solver = Solver::with_config(board, &config)?;
    let stats = solver.stats();
    info!(
        "Search finished: {} expanded, {} generated, {} pruned",
        stats.expanded, stats.generated, stats.pruned
    );

    let options = ReportOptions {
        color: args.color,
        show_slides: args.show_slides,
    };
    let mut out = io::stdout().lock();
    render::write_report(&mut out, &solver, options)?;
    out.flush()?;
    Ok(())
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(dimension) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = match args.walk {
            Some(steps) => scramble::random_walk(dimension, steps, &mut rng)?,
            None => {
                if dimension > 3 {
                    warn!("Shuffled {dimension}x{dimension} puzzles can take very long to solve; consider --walk");
                }
                scramble::shuffled(dimension, &mut rng)?
            }
        };
        info!("Generated puzzle:\n{board}");
        return Ok(board);
    }

    let text = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            info!("Reading puzzle from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read puzzle file {}", path.display()))?
        }
        _ => {
            info!("Reading puzzle from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read puzzle from stdin")?;
            text
        }
    };
    input::parse_board(&text).context("Failed to parse puzzle")
}
