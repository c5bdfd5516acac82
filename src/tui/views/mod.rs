//! TUI Views module
//!
//! The chart panel, the sidebar (statistics and budget picker) and the
//! status bar.

pub mod chart;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::new(area);

    sidebar::render_stats(frame, layout.stats, app);
    sidebar::render_budgets(frame, layout.budgets, app);
    chart::render(frame, layout.chart, app.chart.as_ref());
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let toast = top_right_rect(48, 5, area);
        frame.render_widget(NotificationWidget::new(notification), toast);
    }
}
