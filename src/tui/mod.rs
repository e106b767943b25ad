//! Terminal UI: mode menu, game screen, and the glue between keyboard,
//! orchestrator, and renderer.

mod app;
mod input;
mod mode;
mod orchestrator;
mod players;
mod ui;

pub use mode::GameMode;
pub use players::Player;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info};

use crate::cli::Cli;
use crate::game::Position;
use app::{App, Screen};
use orchestrator::{GameEvent, Orchestrator};
use players::{HumanPlayer, MinimaxPlayer};

/// One running game: the move channel feeding the human seat(s), the event
/// stream from the orchestrator, and the orchestrator task itself.
struct Session {
    move_tx: mpsc::UnboundedSender<Position>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn spawn_session(mode: GameMode, ai_delay: Duration) -> Session {
    let (move_tx, move_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // Both human seats read the same keyboard, so they share one receiver.
    let moves = Arc::new(Mutex::new(move_rx));
    let player_x: Box<dyn Player> = Box::new(HumanPlayer::new("Player X", Arc::clone(&moves)));
    let player_o: Box<dyn Player> = match mode {
        GameMode::TwoPlayer => Box::new(HumanPlayer::new("Player O", moves)),
        GameMode::VsAi => Box::new(MinimaxPlayer::new("Minimax", ai_delay)),
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
    let task = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator exited with error");
        }
    });

    Session {
        move_tx,
        event_rx,
        task,
    }
}

/// Run the TUI.
pub async fn run(cli: Cli) -> Result<()> {
    // Log to a file so tracing output does not corrupt the terminal UI.
    let log_file = std::fs::File::create("tictac.log").context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, cli).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI error");
    }
    res
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, cli: Cli) -> Result<()> {
    let ai_delay = Duration::from_millis(cli.ai_delay_ms);
    let mut app = App::new();
    let mut session: Option<Session> = None;

    if let Some(mode) = cli.mode {
        info!(%mode, "Mode preselected on the command line");
        app.start_game(mode);
        session = Some(spawn_session(mode, ai_delay));
    }

    loop {
        // Apply pending orchestrator events before drawing.
        if let Some(s) = session.as_mut() {
            while let Ok(ev) = s.event_rx.try_recv() {
                app.handle_event(ev);
            }
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.screen() {
            Screen::ModeSelect => match key.code {
                KeyCode::Char('1') => {
                    app.start_game(GameMode::TwoPlayer);
                    session = Some(spawn_session(GameMode::TwoPlayer, ai_delay));
                }
                KeyCode::Char('2') => {
                    app.start_game(GameMode::VsAi);
                    session = Some(spawn_session(GameMode::VsAi, ai_delay));
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') if app.game().is_over() => {
                    let mode = app.mode().context("playing screen without a mode")?;
                    app.start_game(mode);
                    session = Some(spawn_session(mode, ai_delay));
                }
                KeyCode::Char('m') if app.game().is_over() => {
                    session = None;
                    app.to_mode_select();
                }
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.set_cursor(input::move_cursor(app.cursor(), key.code));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(s) = &session {
                        let _ = s.move_tx.send(app.cursor());
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let digit = c.to_digit(10).unwrap_or(0) as usize;
                    if let Some(pos) = digit.checked_sub(1).and_then(Position::from_index) {
                        if let Some(s) = &session {
                            let _ = s.move_tx.send(pos);
                        }
                    }
                }
                _ => {}
            },
        }
    }
}
