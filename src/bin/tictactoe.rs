//! Tic-Tac-Toe CLI - play against the minimax CPU or query it
//!
//! - `play` runs an interactive console game
//! - `respond` answers one JSON board/turn request from stdin
//! - `analyze` prints the score of every CPU move on a board

use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tictactoe_minimax::{
    Board, EngineConfig, MinimaxPlayer, Player, console::ConsoleGame, engine::Searcher, wire,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe against a minimax CPU", long_about = None)]
struct Cli {
    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for move ordering (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Depth searched on turn 0 (overrides the config file)
    #[arg(long, global = true)]
    max_depth: Option<u32>,

    /// Log search details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Let the CPU make the first move
        #[arg(long)]
        cpu_first: bool,
    },

    /// Read one `{"board": [...], "turn": n}` request from stdin and print the response
    Respond,

    /// Score every CPU move on a board, e.g. `XX.OO....`
    Analyze {
        /// Board cells: X, O, and `.` or a digit for empty cells
        board: String,

        /// Moves already made; defaults to the number of marks on the board
        #[arg(long)]
        turn: Option<u32>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::new(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_depth) = cli.max_depth {
        config = config.with_max_depth(max_depth);
    }
    config.validate()?;
    Ok(config)
}

fn play(config: &EngineConfig, cpu_first: bool) -> Result<()> {
    let mut cpu = MinimaxPlayer::new("CPU".to_string(), config);
    let first = if cpu_first { Player::Cpu } else { Player::Human };

    let stdin = io::stdin();
    let mut console = ConsoleGame::new(stdin.lock(), io::stdout());
    console.run(&mut cpu, first)?;
    Ok(())
}

fn respond(config: &EngineConfig) -> Result<()> {
    let mut request = String::new();
    io::stdin()
        .read_to_string(&mut request)
        .context("reading request from stdin")?;

    let mut rng = config.rng();
    let response = wire::respond_json(&request, config.max_depth, &mut rng)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{response}")?;
    Ok(())
}

fn analyze(config: &EngineConfig, board: &str, turn: Option<u32>) -> Result<()> {
    let board = Board::from_string(board)?;
    let turn = turn.unwrap_or(board.occupied_count() as u32);
    let depth = config.max_depth.saturating_sub(turn);

    println!("{board}\n");
    println!("Search depth: {depth}");

    let mut rng = config.rng();
    let mut searcher = Searcher::new(&mut rng);
    let mut scores = searcher.score_moves(&board, depth);
    let best = scores
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });

    scores.sort_unstable_by_key(|&(mv, _)| mv);
    for (mv, score) in &scores {
        println!("  move {:<2} score {score:+}", mv + 1);
    }

    match best {
        Some((mv, score)) => println!("Best move: {} (score {score:+})", mv + 1),
        None => println!("No legal moves"),
    }

    let stats = searcher.stats();
    println!("Nodes: {}  Cutoffs: {}", stats.nodes, stats.cutoffs);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Play { cpu_first } => play(&config, cpu_first),
        Commands::Respond => respond(&config),
        Commands::Analyze { ref board, turn } => analyze(&config, board, turn),
    }
}
