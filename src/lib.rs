//! balance-history - budget balance charts from the terminal
//!
//! This library fetches the balance history of a set of budgets over a date
//! range, derives summary statistics from it, and renders both as terminal
//! tables, Chart.js configurations, exports or an interactive chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Query, series response, statistics and chart types
//! - `client`: HTTP and file sources for balance history
//! - `presenter`: One render cycle from query to surface
//! - `display`: Terminal formatting and command line surfaces
//! - `export`: JSON, CSV and YAML exports
//! - `tui`: Interactive chart
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use balance_history::client::FileSource;
//! use balance_history::models::HistoryQuery;
//! use balance_history::presenter::{MemorySurface, Presenter};
//!
//! let presenter = Presenter::new(FileSource::new("history.json"));
//! let query = HistoryQuery::new("2024-01-01", "2024-01-31", vec!["Rent".into()]);
//! let mut surface = MemorySurface::new();
//! let outcome = presenter.render(&query, &mut surface).await;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod tui;

pub use error::{HistoryError, HistoryResult};
