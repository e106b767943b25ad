//! The game state machine.
//!
//! All mutation goes through [`Game::play`]; the rest of the crate only
//! reads the state. The lifecycle is `Idle -> InProgress -> Won | Draw`,
//! with `Idle` covering the time before a mode has been chosen.

use super::position::Position;
use super::types::{Board, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game running yet (no mode chosen).
    Idle,
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Errors that can occur when playing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("square is already occupied")]
    SquareOccupied,
    /// The game is idle or already finished.
    #[display("game is not in progress")]
    NotInProgress,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new idle game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::Idle,
            history: Vec::new(),
        }
    }

    /// Activates an idle game. No-op in any other state.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            self.status = GameStatus::InProgress;
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// On success the mark is placed, the move is recorded, and the game
    /// transitions to `Won`/`Draw` when terminal, otherwise the turn passes
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotInProgress`] when the game is idle or
    /// finished, and [`MoveError::SquareOccupied`] when the square is taken.
    /// A failed move leaves the state unchanged.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::NotInProgress);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history (positions in play order).
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true if the game finished in a win or a draw.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_) | GameStatus::Draw)
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::Idle => "Choose a mode to start the game.".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn.", self.to_move),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
