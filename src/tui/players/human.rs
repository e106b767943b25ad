//! Human player fed by the keyboard loop.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, mpsc};

use super::Player;
use crate::game::{Game, Position};

/// Human player receiving positions from the input loop.
///
/// In two-player mode both seats share the single keyboard channel, hence
/// the mutex around the receiver.
pub struct HumanPlayer {
    name: String,
    moves: Arc<Mutex<mpsc::UnboundedReceiver<Position>>>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        moves: Arc<Mutex<mpsc::UnboundedReceiver<Position>>>,
    ) -> Self {
        Self {
            name: name.into(),
            moves,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        self.moves
            .lock()
            .await
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Input channel closed"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
