//! User settings for balance-history
//!
//! Manages the backend endpoint, the anti-forgery token sources and the
//! defaults used to build a query when the command line leaves them out.

use serde::{Deserialize, Serialize};

use super::paths::HistoryPaths;
use crate::error::HistoryError;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/graph/history";

/// User settings for balance-history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// URL of the balance history resource
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Anti-forgery token sent as `X-CSRFToken`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Raw `Cookie` header; its `csrftoken` entry is used when no explicit
    /// token is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    /// strftime format used for the default start/end dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Length of the default date window, in days
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,

    /// Budgets charted when none are given on the command line
    #[serde(default)]
    pub default_budgets: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_range_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            endpoint: default_endpoint(),
            csrf_token: None,
            cookie: None,
            date_format: default_date_format(),
            default_range_days: default_range_days(),
            default_budgets: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HistoryPaths) -> Result<Self, HistoryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HistoryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HistoryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HistoryPaths) -> Result<(), HistoryError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HistoryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            HistoryError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings that cannot produce a request
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.endpoint.trim().is_empty() {
            return Err(HistoryError::Config("endpoint must not be empty".into()));
        }
        if self.date_format.trim().is_empty() {
            return Err(HistoryError::Config("date_format must not be empty".into()));
        }
        Ok(())
    }
}
