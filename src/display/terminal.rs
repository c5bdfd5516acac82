//! Render surfaces for the command line
//!
//! [`TerminalSurface`] prints the statistics table and a chart summary;
//! [`ChartFileSurface`] writes the Chart.js configuration to a file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::chart::format_chart_summary;
use super::stats::{format_stats_table, render_stats_html};
use crate::error::{HistoryError, HistoryResult};
use crate::models::{ChartSpec, Statistics};
use crate::presenter::RenderSurface;

/// How the statistics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsStyle {
    /// Bordered terminal table
    #[default]
    Table,
    /// `<tr>` rows for an HTML table body
    Html,
}

/// Prints renders to an output stream and notifications to an error stream
pub struct TerminalSurface<W: Write, E: Write> {
    out: W,
    err: E,
    style: StatsStyle,
    show_chart: bool,
    write_error: Option<io::Error>,
}

impl TerminalSurface<io::Stdout, io::Stderr> {
    /// Surface over stdout and stderr
    pub fn stdio(style: StatsStyle, show_chart: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), style, show_chart)
    }
}

impl<W: Write, E: Write> TerminalSurface<W, E> {
    pub fn new(out: W, err: E, style: StatsStyle, show_chart: bool) -> Self {
        Self {
            out,
            err,
            style,
            show_chart,
            write_error: None,
        }
    }

    /// Report the first write failure, if any
    pub fn finish(mut self) -> HistoryResult<()> {
        if let Err(e) = self.out.flush() {
            self.record(Err(e));
        }
        match self.write_error {
            Some(e) => Err(HistoryError::Io(format!("Failed to write output: {}", e))),
            None => Ok(()),
        }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.write_error.is_none() {
                self.write_error = Some(e);
            }
        }
    }
}

impl<W: Write, E: Write> RenderSurface for TerminalSurface<W, E> {
    fn notify(&mut self, message: &str) {
        let result = writeln!(self.err, "Error: {}", message);
        self.record(result);
    }

    fn write_stats(&mut self, stats: &Statistics) {
        let text = match self.style {
            StatsStyle::Table => format_stats_table(stats),
            StatsStyle::Html => render_stats_html(stats),
        };
        let result = writeln!(self.out, "{}", text);
        self.record(result);
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        if !self.show_chart {
            return;
        }
        let result = writeln!(self.out, "\n{}", format_chart_summary(chart));
        self.record(result);
    }
}

/// Writes the Chart.js configuration of every drawn chart to a file
///
/// Each draw replaces the whole file.
pub struct ChartFileSurface {
    path: PathBuf,
    write_error: Option<HistoryError>,
}

impl ChartFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report a failed write, if any
    pub fn finish(self) -> HistoryResult<()> {
        match self.write_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn write_chart(&self, chart: &ChartSpec) -> HistoryResult<()> {
        let json = serde_json::to_string_pretty(&chart.to_chartjs())?;
        std::fs::write(&self.path, json).map_err(|e| {
            HistoryError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl RenderSurface for ChartFileSurface {
    fn notify(&mut self, _message: &str) {}

    fn write_stats(&mut self, _stats: &Statistics) {}

    fn draw_chart(&mut self, chart: &ChartSpec) {
        if let Err(e) = self.write_chart(chart) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to write chart");
            self.write_error = Some(e);
        } else {
            tracing::info!(path = %self.path.display(), "chart configuration written");
        }
    }
}
