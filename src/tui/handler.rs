//! Key handling for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Apply a key press to the app state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Down | KeyCode::Char('j') => app.next_option(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_option(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_option(),
        _ => {}
    }
}
