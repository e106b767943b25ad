//! Command-line interface for tictac.

use clap::Parser;

use crate::tui::GameMode;

/// Tic-tac-toe in the terminal, with an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe vs a friend or the minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start directly in the given mode, skipping the mode menu
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Simulated AI thinking delay in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,
}
