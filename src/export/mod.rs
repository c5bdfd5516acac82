//! Export module for balance-history
//!
//! Saves a balance history with its statistics:
//! - CSV: one row per day, spreadsheet-compatible
//! - JSON: machine-readable bundle
//! - YAML: human-readable bundle

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, import_json, HistoryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_yaml, import_yaml};
