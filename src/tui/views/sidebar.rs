//! Statistics table and budget picker

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::display::stats::{growth_note, stats_rows};
use crate::tui::app::App;

use super::chart::terminal_color;

/// Render the statistics table
pub fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Statistics ");

    let Some(stats) = app.stats.as_ref() else {
        frame.render_widget(Paragraph::new("No data yet.").block(block), area);
        return;
    };

    let mut rows: Vec<Row> = stats_rows(stats)
        .into_iter()
        .map(|row| Row::new(vec![Cell::from(row.field), Cell::from(row.value)]))
        .collect();
    if growth_note(stats).is_some() {
        rows.push(Row::new(vec![
            Cell::from("(start balance is zero)").style(Style::default().fg(Color::Yellow)),
        ]));
    }

    let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(
            Row::new(vec!["Field", "Value"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);

    frame.render_widget(table, area);
}

/// Colour of a budget's line in the last drawn chart
///
/// Budgets missing from the chart (unchecked, or not drawn yet) are grey.
pub fn legend_color(app: &App, name: &str) -> Color {
    app.chart
        .as_ref()
        .and_then(|chart| chart.datasets.iter().find(|d| d.label == name))
        .map(|d| terminal_color(d.color))
        .unwrap_or(Color::DarkGray)
}

/// Render the budget picker; checked budgets are part of the query
pub fn render_budgets(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .options
        .iter()
        .map(|option| {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let color = legend_color(app, &option.name);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", mark)),
                Span::styled(option.name.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Budgets "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{project_to_chart, BudgetSeries, HistoryQuery, SeriesResponse};
    use crate::presenter::RenderSurface;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with_reordered_response() -> App {
        let mut app = App::new(
            HistoryQuery::new("a", "b", vec!["Rent".into(), "Food".into()]),
            "test",
        );
        // the backend answers in its own order, not the selection order
        let response = SeriesResponse::new(
            vec!["d1".into(), "d2".into()],
            vec![
                BudgetSeries::new("Food", vec![50.0, 40.0]),
                BudgetSeries::new("Rent", vec![100.0, 150.0]),
            ],
        );
        app.draw_chart(&project_to_chart(&response));
        app
    }

    #[test]
    fn test_legend_color_follows_chart_dataset() {
        let app = app_with_reordered_response();
        let chart = app.chart.as_ref().unwrap();
        let rent = chart.datasets.iter().find(|d| d.label == "Rent").unwrap();

        assert_eq!(legend_color(&app, "Rent"), terminal_color(rent.color));
        assert_eq!(legend_color(&app, "Missing"), Color::DarkGray);
    }

    #[test]
    fn test_budget_list_renders_chart_colors() {
        let app = app_with_reordered_response();
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();

        terminal
            .draw(|frame| render_budgets(frame, frame.area(), &app))
            .unwrap();

        let rent_color = legend_color(&app, "Rent");
        let buffer = terminal.backend().buffer();
        // row 1 is the first item: border, "[x] ", then the name
        let cell = &buffer.content[buffer.index_of(5, 1)];
        assert_eq!(cell.symbol(), "R");
        assert_eq!(cell.fg, rent_color);
        assert_eq!(rent_color, Color::Rgb(54, 162, 235));
    }
}
