//! JSON Export functionality
//!
//! Exports a balance history and its statistics with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{HistoryError, HistoryResult};
use crate::models::{compute_stats, BudgetSeries, HistoryQuery, SeriesResponse, Statistics};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A balance history as exported to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The query the history answers
    pub query: HistoryQuery,

    /// Day labels
    pub days: Vec<String>,

    /// Per-budget balances
    pub budgets: Vec<BudgetSeries>,

    /// Derived statistics
    pub statistics: Statistics,
}

impl HistoryExport {
    /// Bundle a checked response with its statistics
    pub fn new(query: &HistoryQuery, response: &SeriesResponse) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            query: query.clone(),
            days: response.days.clone(),
            budgets: response.budgets.clone(),
            statistics: compute_stats(response),
        }
    }

    /// The series part of the export
    pub fn series(&self) -> SeriesResponse {
        SeriesResponse::new(self.days.clone(), self.budgets.clone())
    }

    /// Check the export can be charted again
    pub fn validate(&self) -> HistoryResult<()> {
        if self.schema_version.split('.').next() != EXPORT_SCHEMA_VERSION.split('.').next() {
            return Err(HistoryError::Export(format!(
                "Unsupported schema version {}",
                self.schema_version
            )));
        }
        self.series().validate()
    }
}

/// Write an export as JSON
pub fn export_json<W: Write>(export: &HistoryExport, writer: &mut W, pretty: bool) -> HistoryResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    };
    result.map_err(|e| HistoryError::Export(e.to_string()))
}

/// Read an export back from JSON
pub fn import_json(json: &str) -> HistoryResult<HistoryExport> {
    let export: HistoryExport =
        serde_json::from_str(json).map_err(|e| HistoryError::Export(e.to_string()))?;
    export.validate()?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_export() -> HistoryExport {
        let query = HistoryQuery::new("2025-01-01", "2025-01-08", vec!["Rent".into(), "Food".into()]);
        let response = SeriesResponse::new(
            vec!["2025-01-01".into(), "2025-01-08".into()],
            vec![
                BudgetSeries::new("Rent", vec![100.0, 150.0]),
                BudgetSeries::new("Food", vec![50.0, 40.0]),
            ],
        );
        HistoryExport::new(&query, &response)
    }

    #[test]
    fn test_export_carries_statistics() {
        let export = sample_export();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.statistics.difference, 40.0);
        assert_eq!(export.query.budgets, vec!["Rent", "Food"]);
    }

    #[test]
    fn test_json_export_reads_back() {
        let export = sample_export();
        let mut buffer = Vec::new();
        export_json(&export, &mut buffer, true).unwrap();

        let restored = import_json(&String::from_utf8(buffer).unwrap()).unwrap();
        assert_eq!(restored.series(), export.series());
        assert_eq!(restored.statistics, export.statistics);
    }

    #[test]
    fn test_import_rejects_other_major_version() {
        let mut export = sample_export();
        export.schema_version = "2.0.0".into();
        let json = serde_json::to_string(&export).unwrap();

        assert!(matches!(import_json(&json), Err(HistoryError::Export(_))));
    }
}
