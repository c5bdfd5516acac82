//! Chart summary for plain terminal output
//!
//! Lists each dataset with its first and last balance and a bar scaled to
//! the largest final balance, so the chart reads without a graphical
//! backend.

use super::format::{format_amount, format_bar, separator, truncate};
use crate::models::ChartSpec;

const NAME_WIDTH: usize = 24;
const BAR_WIDTH: usize = 20;

/// Format a chart as a legend with balances and bars
pub fn format_chart_summary(chart: &ChartSpec) -> String {
    let mut output = String::new();

    let range = match (chart.labels.first(), chart.labels.last()) {
        (Some(first), Some(last)) => format!("{} to {}", first, last),
        _ => "no days".to_string(),
    };
    output.push_str(&format!("Balance History ({})\n", range));
    output.push_str(&separator(72));
    output.push('\n');

    if chart.datasets.is_empty() {
        output.push_str("No budgets to chart.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<width$} {:>12} {:>12}  {}\n",
        "Budget",
        "Start",
        "End",
        "",
        width = NAME_WIDTH
    ));

    let max_end = chart
        .datasets
        .iter()
        .filter_map(|d| d.data.last().copied())
        .fold(0.0, f64::max);

    for dataset in &chart.datasets {
        let first = dataset.data.first().copied().unwrap_or(0.0);
        let last = dataset.data.last().copied().unwrap_or(0.0);
        output.push_str(&format!(
            "{:<width$} {:>12} {:>12}  {}\n",
            truncate(&dataset.label, NAME_WIDTH),
            format_amount(first),
            format_amount(last),
            format_bar(last, max_end, BAR_WIDTH),
            width = NAME_WIDTH
        ));
    }

    output
}
