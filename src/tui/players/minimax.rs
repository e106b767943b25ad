//! Minimax AI player.

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use super::Player;
use crate::game::minimax::best_move;
use crate::game::{Game, Position};

/// AI player driven by the exhaustive minimax search.
pub struct MinimaxPlayer {
    name: String,
    delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a new minimax player with the given thinking delay.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        // Simulated thinking pause; the search itself is nearly instant.
        tokio::time::sleep(self.delay).await;

        let position = best_move(game.board(), game.to_move())
            .ok_or_else(|| anyhow::anyhow!("No moves available"))?;
        debug!(ai = %self.name, position = ?position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}
