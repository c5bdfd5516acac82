//! Terminal User Interface module
//!
//! An interactive balance history chart built on ratatui: the chart panel,
//! the statistics table, and a budget picker whose changes re-query the
//! source.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
