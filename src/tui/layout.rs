//! Layout definitions for the TUI
//!
//! Sidebar with statistics and budget picker, chart panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Statistics table
    pub stats: Rect,
    /// Budget picker
    pub budgets: Rect,
    /// Chart panel
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(36), // Sidebar (fixed width)
                Constraint::Min(40),    // Chart
            ])
            .split(vertical[0]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Header row, four stats, note, borders
                Constraint::Min(3),    // Budgets
            ])
            .split(horizontal[0]);

        Self {
            stats: sidebar[0],
            budgets: sidebar[1],
            chart: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Fixed-size rect anchored to the top right corner, for notifications
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
