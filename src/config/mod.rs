//! Configuration module for balance-history
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (endpoint, token, query defaults)

pub mod paths;
pub mod settings;

pub use paths::HistoryPaths;
pub use settings::Settings;
