//! Game orchestration between players.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::players::Player;
use crate::game::{Game, Mark, MoveError, Position};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(String),
    /// The AI is thinking.
    Thinking {
        /// Display name of the thinking player.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the player who moved.
        player: String,
        /// Mark the move was made with.
        mark: Mark,
        /// Where the mark was placed.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Winner name, or `None` on a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator around a freshly started game.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let mut game = Game::new();
        game.start();
        Self {
            game,
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop until the game is over.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        loop {
            if self.game.is_over() {
                let winner = self.game.winner().map(|mark| {
                    match mark {
                        Mark::X => self.player_x.name(),
                        Mark::O => self.player_o.name(),
                    }
                    .to_string()
                });
                info!(?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { winner })?;
                return Ok(());
            }

            let mark = self.game.to_move();
            let (player_name, is_ai) = match mark {
                Mark::X => (self.player_x.name().to_string(), self.player_x.is_ai()),
                Mark::O => (self.player_o.name().to_string(), self.player_o.is_ai()),
            };

            if is_ai {
                self.event_tx.send(GameEvent::Thinking {
                    player: player_name.clone(),
                })?;
            }

            debug!(player = %player_name, "Waiting for move");
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let position = player.get_move(&self.game).await?;

            match self.game.play(position) {
                Ok(()) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mark,
                        position,
                    })?;
                    if !self.game.is_over() {
                        self.event_tx
                            .send(GameEvent::StateChanged(self.game.status_string()))?;
                    }
                }
                // Moves to occupied squares are dropped; the same player
                // keeps the turn.
                Err(MoveError::SquareOccupied) => {
                    debug!(position = ?position, "Ignoring move to occupied square");
                }
                Err(e) => {
                    warn!(error = %e, "Unexpected move rejection");
                    return Err(e.into());
                }
            }
        }
    }
}
