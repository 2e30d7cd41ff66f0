//! Goban: Go rules engine.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start GTP server for GUI integration
//! - `goban demo` - Play the demo scenarios
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `--debug` for more detail.

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use goban::board::{Board, Color};
use goban::constants::N;
use goban::game::Game;
use goban::gtp::{GtpEngine, check_size, render_board, vertex_to_string};

/// Goban: the rules of Go, served over GTP
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(short, long, default_value_t = N, value_parser = parse_size)]
    size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the rules
    Demo,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("invalid board size: {s}"))?;
    check_size(size).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    match cli.command {
        Some(Commands::Gtp) => {
            log::info!("starting GTP server on a {0}x{0} board", cli.size);
            GtpEngine::with_size(cli.size)?.run()?;
        }
        Some(Commands::Demo) | None => run_demo(cli.size)?,
    }
    Ok(())
}

fn run_demo(size: usize) -> Result<()> {
    println!("Goban: Go rules engine\n");

    println!("=== Alternating play on {size}x{size} ===");
    let mut game = Game::new(size, size);
    for (row, col) in [(0, 0), (size - 1, size - 1)] {
        let outcome = game.commit_move(row, col)?;
        println!(
            "{} at {}",
            outcome.color,
            vertex_to_string(outcome.point, game.rows())?
        );
    }
    println!("{}\n", render_board(game.board()));

    println!("=== Capture ===");
    let board = Board::from_diagram(
        &[
            ". X O O X",
            ". X O . X",
            ". . X X .",
            ". . . . .",
            ". . . . .",
        ],
        Color::Black,
    )?;
    let mut game = Game::with_board(board);
    println!("{}", render_board(game.board()));
    let outcome = game.commit_move(1, 3)?;
    println!(
        "Black at {} captures {} stone(s)",
        vertex_to_string(outcome.point, game.rows())?,
        outcome.captured.len()
    );
    println!("{}\n", render_board(game.board()));

    println!("=== Suicide ===");
    let board = Board::from_diagram(
        &[
            ". O . . .",
            "O . . . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
        ],
        Color::Black,
    )?;
    let mut game = Game::with_board(board);
    println!("{}", render_board(game.board()));
    match game.commit_move(0, 0) {
        Ok(_) => println!("Black at A5 was accepted"),
        Err(e) => println!("Black at A5 rejected: {e}"),
    }
    println!("{} to move", game.active_player());
    Ok(())
}
