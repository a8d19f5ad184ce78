use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use minefield::board::Board;
use minefield::config::GameConfig;
use minefield::console::StdConsole;
use minefield::game::Game;
use minefield::random::StdRandomizer;

/// Cross the minefield from one edge to the other without running out of
/// lives.
#[derive(Parser)]
#[command(name = "minefield", about = "Terminal minefield traversal game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "minefield.toml")]
    config: PathBuf,

    /// Override board size
    #[arg(long)]
    board_size: Option<usize>,

    /// Override number of mines
    #[arg(long)]
    mines: Option<usize>,

    /// Override number of lives
    #[arg(long)]
    lives: Option<u32>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Fatal error. Application will be terminated. Message: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides, then re-validate the combined result
    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    if let Some(mines) = cli.mines {
        config.mine_count = mines;
    }
    if let Some(lives) = cli.lives {
        config.lives = lives;
    }
    config.validate().context("validating configuration")?;

    // Compose
    let mut console = StdConsole::new();
    let mut board = Board::new(StdRandomizer::new());

    enable_raw_mode().context("enabling raw mode")?;
    let result = Game::new(&mut console, &mut board, config).run();

    // Terminal cleanup, use let _ = so it never masks the game result
    let _ = disable_raw_mode();

    result.context("running game session")?;
    Ok(())
}
