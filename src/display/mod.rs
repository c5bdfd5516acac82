//! Display formatting for terminal output
//!
//! Provides the statistics table, the chart summary and the command line
//! render surfaces built on them.

pub mod chart;
pub mod format;
pub mod stats;
pub mod terminal;

pub use chart::format_chart_summary;
pub use stats::{format_stats_table, render_stats_html, stats_rows, StatRow};
pub use terminal::{ChartFileSurface, StatsStyle, TerminalSurface};
