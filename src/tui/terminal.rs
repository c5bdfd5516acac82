//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::client::SeriesSource;
use crate::error::{HistoryError, HistoryResult};
use crate::models::HistoryQuery;
use crate::presenter::Presenter;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_error(e: io::Error) -> HistoryError {
    HistoryError::Tui(e.to_string())
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> HistoryResult<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> HistoryResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

/// Run the interactive chart until the user quits
///
/// Needs a multi-threaded tokio runtime: waiting for terminal events blocks
/// the current worker.
pub async fn run_tui<S: SeriesSource>(
    presenter: &Presenter<S>,
    query: HistoryQuery,
) -> HistoryResult<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(query, presenter.source().describe());

    let result = event_loop(&mut terminal, &mut app, presenter).await;

    restore_terminal()?;
    result
}

async fn event_loop<S: SeriesSource>(
    terminal: &mut Tui,
    app: &mut App,
    presenter: &Presenter<S>,
) -> HistoryResult<()> {
    let events = EventHandler::default();

    loop {
        if app.refresh_requested {
            app.refresh_requested = false;
            let query = app.query.clone();
            let outcome = presenter.render(&query, app).await;
            app.record_outcome(&outcome);
        }

        terminal
            .draw(|frame| super::views::render(frame, app))
            .map_err(tui_error)?;

        let event = tokio::task::block_in_place(|| events.next())
            .map_err(|e| HistoryError::Tui(e.to_string()))?;

        match event {
            Event::Key(key) => handle_key(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.notifications.remove_expired(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
