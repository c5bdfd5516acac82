//! Core data models for balance-history
//!
//! This module contains the data structures of a render cycle: the query,
//! the backend's balance series, and the statistics and chart derived from
//! them.

pub mod chart;
pub mod query;
pub mod series;
pub mod stats;

pub use chart::{palette_color, project_to_chart, ChartSpec, Dataset, PaletteColor, PALETTE};
pub use query::{selected_labels, HistoryQuery};
pub use series::{ApiReply, BudgetSeries, ErrorPayload, SeriesResponse};
pub use stats::{compute_stats, Statistics};
