//! Render surfaces
//!
//! A surface is wherever a render cycle ends up: the terminal, a file, the
//! TUI. Every write replaces what the surface showed before.

use crate::models::{ChartSpec, Statistics};

/// Destination of a render cycle
pub trait RenderSurface {
    /// Show a message to the user; used when a render is aborted
    fn notify(&mut self, message: &str);

    /// Replace the statistics table
    fn write_stats(&mut self, stats: &Statistics);

    /// Replace the chart
    fn draw_chart(&mut self, chart: &ChartSpec);
}

/// Surface that keeps the last render in memory
///
/// Handy for callers that post-process a render, and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    pub notifications: Vec<String>,
    pub stats: Option<Statistics>,
    pub chart: Option<ChartSpec>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything besides notifications was written
    pub fn was_drawn(&self) -> bool {
        self.stats.is_some() || self.chart.is_some()
    }
}

impl RenderSurface for MemorySurface {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn write_stats(&mut self, stats: &Statistics) {
        self.stats = Some(*stats);
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        self.chart = Some(chart.clone());
    }
}

/// Two surfaces rendered together; notifications go to both
impl<A, B> RenderSurface for (A, B)
where
    A: RenderSurface,
    B: RenderSurface,
{
    fn notify(&mut self, message: &str) {
        self.0.notify(message);
        self.1.notify(message);
    }

    fn write_stats(&mut self, stats: &Statistics) {
        self.0.write_stats(stats);
        self.1.write_stats(stats);
    }

    fn draw_chart(&mut self, chart: &ChartSpec) {
        self.0.draw_chart(chart);
        self.1.draw_chart(chart);
    }
}
