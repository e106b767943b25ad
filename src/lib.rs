//! Terminal tic-tac-toe with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **game**: board state, win/draw rules, the `Idle -> InProgress ->
//!   Won | Draw` state machine, and the minimax move selector
//! - **tui**: ratatui front end - mode menu, board rendering, and the
//!   orchestrator that turns two player implementations loose on one game
//!
//! The engine is synchronous and pure; only the front end is async, so the
//! AI's "thinking" pause can run without blocking input handling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

pub use game::minimax::best_move;
pub use game::{Board, Game, GameStatus, Mark, MoveError, Player, Position, Square};
