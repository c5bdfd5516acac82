//! Line chart view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::format::format_amount;
use crate::models::{ChartSpec, PaletteColor};

/// Terminal colour for a palette entry (alpha is ignored)
pub fn terminal_color(color: PaletteColor) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Points of each dataset, x being the day index
pub fn dataset_points(chart: &ChartSpec) -> Vec<Vec<(f64, f64)>> {
    chart
        .datasets
        .iter()
        .map(|d| {
            d.data
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect()
}

/// Render the chart, or a placeholder when nothing was drawn yet
pub fn render(frame: &mut Frame, area: Rect, chart: Option<&ChartSpec>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Balance History ");

    let chart = match chart {
        Some(chart) if !chart.datasets.is_empty() => chart,
        Some(_) => {
            frame.render_widget(Paragraph::new("No budgets to chart.").block(block), area);
            return;
        }
        None => {
            frame.render_widget(Paragraph::new("Loading...").block(block), area);
            return;
        }
    };

    let points = dataset_points(chart);
    let datasets: Vec<Dataset> = chart
        .datasets
        .iter()
        .zip(&points)
        .map(|(dataset, data)| {
            Dataset::default()
                .name(dataset.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(terminal_color(dataset.color)))
                .data(data)
        })
        .collect();

    let last_x = chart.labels.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = match (chart.labels.first(), chart.labels.last()) {
        (Some(first), Some(last)) => vec![Span::raw(first.clone()), Span::raw(last.clone())],
        _ => Vec::new(),
    };

    let (low, mut high) = chart.y_bounds();
    if high <= low {
        high = low + 1.0;
    }
    let mid = (low + high) / 2.0;
    let y_labels = vec![
        Span::raw(format_amount(low)),
        Span::raw(format_amount(mid)),
        Span::raw(format_amount(high)),
    ];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{project_to_chart, BudgetSeries, SeriesResponse, PALETTE};

    #[test]
    fn test_points_use_day_index() {
        let chart = project_to_chart(&SeriesResponse::new(
            vec!["d1".into(), "d2".into(), "d3".into()],
            vec![BudgetSeries::new("Rent", vec![5.0, 6.0, 7.0])],
        ));

        assert_eq!(dataset_points(&chart), vec![vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]]);
    }

    #[test]
    fn test_terminal_color_drops_alpha() {
        assert_eq!(terminal_color(PALETTE[0]), Color::Rgb(255, 99, 132));
    }
}
