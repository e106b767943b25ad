//! Tictac - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictac::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tictac::tui::run(cli).await
}
