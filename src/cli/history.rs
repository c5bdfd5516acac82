//! Balance history CLI commands
//!
//! `show` prints the statistics, `chart` writes the Chart.js configuration,
//! `view` opens the interactive chart.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::client::SeriesSource;
use crate::config::settings::Settings;
use crate::display::{ChartFileSurface, StatsStyle, TerminalSurface};
use crate::error::{HistoryError, HistoryResult};
use crate::presenter::{MemorySurface, Presenter, RenderOutcome};
use crate::tui::run_tui;

use super::QueryArgs;

/// Print the statistics table and a per-budget summary
///
/// With `html`, only the statistics rows are printed, as `<tr>` markup.
pub async fn handle_show_command(
    settings: &Settings,
    args: &QueryArgs,
    html: bool,
) -> HistoryResult<RenderOutcome> {
    let query = args.to_query_now(settings);
    let presenter = Presenter::new(args.source(settings)?);

    let style = if html { StatsStyle::Html } else { StatsStyle::Table };
    let mut surface = TerminalSurface::stdio(style, !html);

    let outcome = presenter.render(&query, &mut surface).await;
    surface.finish()?;
    Ok(outcome)
}

/// Write the Chart.js configuration to `output`, or to stdout
///
/// The statistics table goes to stdout when writing to a file and to
/// stderr otherwise, so stdout stays valid JSON.
pub async fn handle_chart_command(
    settings: &Settings,
    args: &QueryArgs,
    output: Option<PathBuf>,
) -> HistoryResult<RenderOutcome> {
    let query = args.to_query_now(settings);
    let presenter = Presenter::new(args.source(settings)?);

    match output {
        Some(path) => {
            let mut surface = (
                TerminalSurface::stdio(StatsStyle::Table, false),
                ChartFileSurface::new(path),
            );
            let outcome = presenter.render(&query, &mut surface).await;

            let (terminal, file) = surface;
            let path = file.path().to_path_buf();
            terminal.finish()?;
            file.finish()?;
            if outcome.is_rendered() {
                println!("Chart written to: {}", path.display());
            }
            Ok(outcome)
        }
        None => {
            let mut surface = (
                TerminalSurface::new(io::stderr(), io::stderr(), StatsStyle::Table, false),
                MemorySurface::new(),
            );
            let outcome = presenter.render(&query, &mut surface).await;

            let (terminal, memory) = surface;
            terminal.finish()?;
            if let Some(chart) = memory.chart {
                let json = serde_json::to_string_pretty(&chart.to_chartjs())?;
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", json)
                    .map_err(|e| HistoryError::Io(format!("Failed to write output: {}", e)))?;
            }
            Ok(outcome)
        }
    }
}

/// Open the interactive chart
pub async fn handle_view_command(settings: &Settings, args: &QueryArgs) -> HistoryResult<()> {
    let query = args.to_query_now(settings);
    let presenter = Presenter::new(args.source(settings)?);

    tracing::info!(source = %presenter.source().describe(), query = %query, "starting interactive view");
    run_tui(&presenter, query).await
}
