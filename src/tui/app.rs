//! Application state and logic.

use tracing::debug;

use super::mode::GameMode;
use super::orchestrator::GameEvent;
use crate::game::{Game, Position};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode menu; no game running.
    ModeSelect,
    /// A game is on screen (running or finished).
    Playing,
}

/// Main application state.
///
/// The orchestrator owns the authoritative game; the app mirrors it by
/// replaying `MoveMade` events, so rendering never waits on the game task.
pub struct App {
    screen: Screen,
    mode: Option<GameMode>,
    game: Game,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application showing the mode menu.
    pub fn new() -> Self {
        Self {
            screen: Screen::ModeSelect,
            mode: None,
            game: Game::new(),
            cursor: Position::Center,
            status_message: "Choose a mode to start the game.".to_string(),
        }
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the selected mode, if any.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Gets the mirrored game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Starts (or restarts) a game in the given mode.
    pub fn start_game(&mut self, mode: GameMode) {
        debug!(?mode, "Starting game");
        self.mode = Some(mode);
        self.game = Game::new();
        self.game.start();
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.status_message = "Player X's turn.".to_string();
    }

    /// Returns to the mode menu; the game goes back to idle.
    pub fn to_mode_select(&mut self) {
        debug!("Returning to mode menu");
        self.mode = None;
        self.game = Game::new();
        self.screen = Screen::ModeSelect;
        self.status_message = "Choose a mode to start the game.".to_string();
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(message) => {
                self.status_message = message;
            }
            GameEvent::Thinking { player } => {
                self.status_message = format!("{} is thinking...", player);
            }
            GameEvent::MoveMade {
                player,
                mark,
                position,
            } => {
                // Mirror the move; the orchestrator already validated it.
                if let Err(e) = self.game.play(position) {
                    debug!(error = %e, "Mirrored move rejected");
                }
                self.status_message = format!("{} ({}) played {}.", player, mark, position.label());
            }
            GameEvent::GameOver { winner } => {
                self.status_message = match winner {
                    Some(name) => format!(
                        "{} wins! Press 'r' to play again, 'm' for the menu, 'q' to quit.",
                        name
                    ),
                    None => "It's a draw! Press 'r' to play again, 'm' for the menu, 'q' to quit."
                        .to_string(),
                };
            }
        }
    }
}
