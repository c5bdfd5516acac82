//! YAML Export functionality
//!
//! Same bundle as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{HistoryError, HistoryResult};
use crate::export::json::HistoryExport;

/// Write an export as YAML with a comment header
pub fn export_yaml<W: Write>(export: &HistoryExport, writer: &mut W) -> HistoryResult<()> {
    writeln!(writer, "# Balance History Export")
        .map_err(|e| HistoryError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| HistoryError::Export(e.to_string()))?;
    writeln!(writer, "# Query: {}", export.query)
        .map_err(|e| HistoryError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HistoryError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| HistoryError::Export(e.to_string()))?;

    Ok(())
}

/// Read an export back from YAML
pub fn import_yaml(yaml: &str) -> HistoryResult<HistoryExport> {
    let export: HistoryExport =
        serde_yaml::from_str(yaml).map_err(|e| HistoryError::Export(e.to_string()))?;
    export.validate()?;
    Ok(export)
}
