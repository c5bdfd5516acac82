//! Status bar view
//!
//! Shows the data source, the current query and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Key hints shown on the right
pub const KEY_HINTS: &str = "r refresh, space toggle, up/down move, q quit";

/// Status line spans for the current app state
pub fn status_spans(app: &App) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" {}", app.source), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled(app.query.to_string(), Style::default().fg(Color::White)),
        Span::raw(" │ "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(Line::from(status_spans(app)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryQuery;

    #[test]
    fn test_status_mentions_source_and_query() {
        let app = App::new(
            HistoryQuery::new("2024-01-01", "2024-01-07", vec!["Rent".into()]),
            "history.json",
        );
        let text: String = status_spans(&app)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.contains("history.json"));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("q quit"));
    }
}
