//! Statistics table formatting
//!
//! The table has a `Field | Value` header and four rows, in this order:
//! Total Difference, Start Balance, End Balance, Growth Factor.

use tabled::{settings::Style, Table, Tabled};

use super::format::format_amount;
use crate::models::Statistics;

/// One row of the statistics table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct StatRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Rows of the statistics table, values rounded to two decimals
pub fn stats_rows(stats: &Statistics) -> Vec<StatRow> {
    vec![
        StatRow {
            field: "Total Difference",
            value: format_amount(stats.difference),
        },
        StatRow {
            field: "Start Balance",
            value: format_amount(stats.start_balance),
        },
        StatRow {
            field: "End Balance",
            value: format_amount(stats.end_balance),
        },
        StatRow {
            field: "Growth Factor",
            value: format!("{}x", format_amount(stats.growth_factor)),
        },
    ]
}

/// Note shown under the table when the growth factor is not a real ratio
pub fn growth_note(stats: &Statistics) -> Option<&'static str> {
    stats
        .growth_is_degenerate()
        .then_some("Start balance is zero: the growth factor shows the end balance.")
}

/// Format the statistics as a terminal table
pub fn format_stats_table(stats: &Statistics) -> String {
    let mut output = Table::new(stats_rows(stats))
        .with(Style::rounded())
        .to_string();

    if let Some(note) = growth_note(stats) {
        output.push('\n');
        output.push_str(note);
    }

    output
}

/// Render the statistics as `<tr>` rows for a table body
pub fn render_stats_html(stats: &Statistics) -> String {
    let mut html = String::from("<tr><th>Field</th><th>Value</th></tr>");
    for row in stats_rows(stats) {
        html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", row.field, row.value));
    }
    html
}
