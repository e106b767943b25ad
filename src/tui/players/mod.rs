//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::game::{Game, Position};
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next move for the given game.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for computer players; lets the UI show a thinking notice.
    fn is_ai(&self) -> bool {
        false
    }
}
