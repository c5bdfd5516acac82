//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the presenter.

pub mod export;
pub mod history;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

use crate::client::{FetchOutcome, FetcherConfig, FileSource, HttpFetcher, SeriesSource};
use crate::config::settings::Settings;
use crate::error::HistoryResult;
use crate::models::HistoryQuery;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_chart_command, handle_show_command, handle_view_command};

/// Query and connection options shared by every command that fetches
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// First day of the range (defaults to a week ago)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the range (defaults to today)
    #[arg(long)]
    pub end: Option<String>,

    /// Budget to chart; repeat or separate with commas
    #[arg(short, long = "budget", value_delimiter = ',')]
    pub budgets: Vec<String>,

    /// Balance history URL
    #[arg(long, env = "BALANCE_HISTORY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Anti-forgery token sent as X-CSRFToken
    #[arg(long, env = "BALANCE_HISTORY_CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Cookie header sent with the request
    #[arg(long, env = "BALANCE_HISTORY_COOKIE")]
    pub cookie: Option<String>,

    /// Read a saved response instead of calling the endpoint
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl QueryArgs {
    /// Build the query, filling gaps from settings
    pub fn to_query(&self, settings: &Settings, today: NaiveDate) -> HistoryQuery {
        let budgets: Vec<String> = if self.budgets.is_empty() {
            settings.default_budgets.clone()
        } else {
            self.budgets
                .iter()
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty())
                .collect()
        };

        let defaults = HistoryQuery::default_range(
            today,
            settings.default_range_days,
            &settings.date_format,
            budgets,
        );

        HistoryQuery {
            start: self.start.clone().unwrap_or(defaults.start),
            end: self.end.clone().unwrap_or(defaults.end),
            budgets: defaults.budgets,
        }
    }

    /// Query for today's date
    pub fn to_query_now(&self, settings: &Settings) -> HistoryQuery {
        self.to_query(settings, Local::now().date_naive())
    }

    /// Connection details, flags taking precedence over settings
    pub fn fetcher_config(&self, settings: &Settings) -> FetcherConfig {
        let base = FetcherConfig::from_settings(settings);
        FetcherConfig {
            endpoint: self.endpoint.clone().unwrap_or(base.endpoint),
            csrf_token: self.csrf_token.clone().or(base.csrf_token),
            cookie: self.cookie.clone().or(base.cookie),
        }
    }

    /// The source the query is answered from
    pub fn source(&self, settings: &Settings) -> HistoryResult<QuerySource> {
        match &self.file {
            Some(path) => Ok(QuerySource::File(FileSource::new(path.clone()))),
            None => Ok(QuerySource::Http(HttpFetcher::new(
                self.fetcher_config(settings),
            )?)),
        }
    }
}

/// Either the live endpoint or a saved response
pub enum QuerySource {
    Http(HttpFetcher),
    File(FileSource),
}

#[async_trait]
impl SeriesSource for QuerySource {
    async fn fetch_series(&self, query: &HistoryQuery) -> FetchOutcome {
        match self {
            Self::Http(source) => source.fetch_series(query).await,
            Self::File(source) => source.fetch_series(query).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}
