//! Balance history query
//!
//! The three values a chart render is requested with: a start date, an end
//! date and the names of the budgets to plot.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request for the balance history of a set of budgets
///
/// Dates are kept as the strings the user supplied and forwarded verbatim;
/// the backend is the authority on their format and on `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// First day of the window
    pub start: String,
    /// Last day of the window
    pub end: String,
    /// Budget names, in the order they were selected
    pub budgets: Vec<String>,
}

impl HistoryQuery {
    /// Create a query from already formatted dates
    pub fn new(start: impl Into<String>, end: impl Into<String>, budgets: Vec<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            budgets,
        }
    }

    /// Query for the `days` days leading up to `today`
    ///
    /// `start` is `today - days` and `end` is `today`, both rendered with the
    /// strftime `format`.
    pub fn default_range(today: NaiveDate, days: u32, format: &str, budgets: Vec<String>) -> Self {
        let start = today - Duration::days(i64::from(days));
        Self {
            start: start.format(format).to_string(),
            end: today.format(format).to_string(),
            budgets,
        }
    }

    /// The `budgets` query parameter: names joined with commas
    pub fn budgets_param(&self) -> String {
        self.budgets.join(",")
    }

    /// Query string pairs, in the order the backend documents them
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("start", self.start.clone()),
            ("end", self.end.clone()),
            ("budgets", self.budgets_param()),
        ]
    }

    /// Whether no budget was selected
    pub fn has_no_budgets(&self) -> bool {
        self.budgets.is_empty()
    }
}

impl fmt::Display for HistoryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} [{}]", self.start, self.end, self.budgets.join(", "))
    }
}

/// Collect the display text of every selected option
///
/// Mirrors reading a multi-select control: each entry is `(label, selected)`
/// and only the labels of selected entries are kept, in order.
pub fn selected_labels<'a, I>(options: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    options
        .into_iter()
        .filter(|(_, selected)| *selected)
        .map(|(label, _)| label.to_string())
        .collect()
}
