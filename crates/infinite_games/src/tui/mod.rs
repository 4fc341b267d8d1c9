//! Terminal UI for infinite tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use infinite_tictactoe::MatchController;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

use app::{App, AppAction};

use crate::app_config::AppConfig;

/// Polling interval for keys and timers.
const TICK: Duration = Duration::from_millis(50);

/// Runs the TUI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting Infinite Games TUI");
    let controller = MatchController::new(config.match_config().clone())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(controller)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && app.handle_key(key.code, Instant::now()) == AppAction::Quit
                {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
        tokio::task::yield_now().await;
    }
}
