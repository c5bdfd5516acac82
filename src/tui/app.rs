//! Application state for the TUI
//!
//! The [`App`] is the render surface of the interactive view: the presenter
//! writes statistics, chart and notifications into it, and the views draw
//! whatever it currently holds.

use crate::models::{selected_labels, ChartSpec, HistoryQuery, Statistics};
use crate::presenter::{RenderOutcome, RenderSurface};

use super::widgets::{Notification, NotificationQueue};

/// A budget that can be toggled in or out of the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOption {
    pub name: String,
    pub selected: bool,
}

/// Main application state
pub struct App {
    /// Query sent on the next refresh
    pub query: HistoryQuery,
    /// Budgets the user can pick from
    pub options: Vec<BudgetOption>,
    /// Index of the highlighted budget
    pub cursor: usize,
    /// Last rendered statistics
    pub stats: Option<Statistics>,
    /// Last rendered chart
    pub chart: Option<ChartSpec>,
    /// Pending notifications
    pub notifications: NotificationQueue,
    /// Where the data comes from, for the status bar
    pub source: String,
    /// Set when the query changed or a refresh was asked for
    pub refresh_requested: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app for an initial query; every queried budget starts selected
    pub fn new(query: HistoryQuery, source: impl Into<String>) -> Self {
        let options = query
            .budgets
            .iter()
            .map(|name| BudgetOption {
                name: name.clone(),
                selected: true,
            })
            .collect();

        Self {
            query,
            options,
            cursor: 0,
            stats: None,
            chart: None,
            notifications: NotificationQueue::new(),
            source: source.into(),
            refresh_requested: true,
            should_quit: false,
        }
    }

    /// Move the highlight down
    pub fn next_option(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    /// Move the highlight up
    pub fn previous_option(&mut self) {
        if !self.options.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.options.len() - 1);
        }
    }

    /// Toggle the highlighted budget and schedule a refresh
    pub fn toggle_option(&mut self) {
        if let Some(option) = self.options.get_mut(self.cursor) {
            option.selected = !option.selected;
            self.query.budgets = selected_labels(
                self.options
                    .iter()
                    .map(|o| (o.name.as_str(), o.selected)),
            );
            self.refresh_requested = true;
        }
    }

    /// Ask for a refresh on the next loop iteration
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Note a finished render in the notification queue
    pub fn record_outcome(&mut self, outcome: &RenderOutcome) {
        if let RenderOutcome::Rendered(_) = outcome {
            self.notifications
                .push(Notification::info(format!("Loaded {}", self.query)));
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl RenderSurface for App {
    fn notify(&mut self, message: &str) {
        self.notifications.push(Notification::error(message));
    }

    fn write_stats(&mut self, stats: &Statistics) {
        self.stats = Some(*stats);
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        self.chart = Some(chart.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            HistoryQuery::new("a", "b", vec!["Rent".into(), "Food".into(), "Fun".into()]),
            "test",
        )
    }

    #[test]
    fn test_all_budgets_start_selected() {
        let app = app();
        assert_eq!(app.options.len(), 3);
        assert!(app.options.iter().all(|o| o.selected));
        assert!(app.refresh_requested);
    }

    #[test]
    fn test_toggle_rebuilds_query() {
        let mut app = app();
        app.refresh_requested = false;
        app.next_option();
        app.toggle_option();

        assert_eq!(app.query.budgets, vec!["Rent", "Fun"]);
        assert!(app.refresh_requested);

        app.toggle_option();
        assert_eq!(app.query.budgets, vec!["Rent", "Food", "Fun"]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        app.previous_option();
        assert_eq!(app.cursor, 2);
        app.next_option();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_notify_queues_error() {
        let mut app = app();
        app.notify("no budgets selected");

        let current = app.notifications.current().unwrap();
        assert_eq!(current.message, "no budgets selected");
        assert!(app.stats.is_none());
    }
}
