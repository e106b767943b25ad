//! Game mode selection.

use clap::ValueEnum;

/// Who sits in the O seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    TwoPlayer,
    /// Human X against the minimax AI.
    VsAi,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "two-player"),
            GameMode::VsAi => write!(f, "vs-ai"),
        }
    }
}
