//! Tic-tac-toe domain: board, rules, state machine, and minimax search.

pub mod minimax;
mod position;
mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::{check_winner, is_full};
pub use state::{Game, GameStatus, MoveError};
pub use types::{Board, Player, Square};

/// Alias for clarity where `Player` would clash with the player trait.
pub type Mark = Player;
