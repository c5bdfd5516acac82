//! CLI command for data export
//!
//! Fetches a balance history and writes it with its statistics.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::paths::HistoryPaths;
use crate::config::settings::Settings;
use crate::error::{HistoryError, HistoryResult};
use crate::export::{export_csv, export_json, export_yaml, HistoryExport};
use crate::models::HistoryQuery;
use crate::presenter::Presenter;

use super::QueryArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV table, one row per day, followed by the statistics
    Csv,
    /// JSON bundle with schema version
    Json,
    /// YAML bundle, human-readable
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments of the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path (defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// File name used when no output path is given
pub fn default_export_name(query: &HistoryQuery, format: ExportFormat) -> String {
    let safe = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    };
    format!(
        "balance-history_{}_{}.{}",
        safe(&query.start),
        safe(&query.end),
        format.extension()
    )
}

/// Handle the export command
pub async fn handle_export_command(
    paths: &HistoryPaths,
    settings: &Settings,
    query_args: &QueryArgs,
    args: &ExportArgs,
) -> HistoryResult<PathBuf> {
    let query = query_args.to_query_now(settings);
    let presenter = Presenter::new(query_args.source(settings)?);

    let response = presenter.load(&query).await?;
    let export = HistoryExport::new(&query, &response);

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            paths.ensure_directories()?;
            paths.export_dir().join(default_export_name(&query, args.format))
        }
    };

    let file = File::create(&output).map_err(|e| {
        HistoryError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_csv(&export, &mut writer)?,
        ExportFormat::Json => export_json(&export, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(&export, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| HistoryError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    tracing::info!(path = %output.display(), format = ?args.format, "balance history exported");
    println!(
        "Exported {} budgets over {} days to: {}",
        export.budgets.len(),
        export.days.len(),
        output.display()
    );

    Ok(output)
}
