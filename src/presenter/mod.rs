//! Presenter
//!
//! Drives one render cycle: fetch the balance history for a query, check it,
//! derive the statistics and the chart, and write both to a
//! [`RenderSurface`]. Any failure is reported through
//! [`RenderSurface::notify`] and nothing else is written.
//!
//! Each render takes a request token from a counter. When a render finishes
//! after a newer one was started, its response is dropped without touching
//! the surface, so overlapping refreshes can never paint older data over
//! newer data.

pub mod surface;

pub use surface::{MemorySurface, RenderSurface};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::{FetchFailure, SeriesSource};
use crate::error::{HistoryError, HistoryResult};
use crate::models::{compute_stats, project_to_chart, ApiReply, HistoryQuery, SeriesResponse, Statistics};

/// How a render cycle ended
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// Statistics and chart were written
    Rendered(Statistics),
    /// The backend refused the query with an error payload
    Rejected(String),
    /// The response did not line up and was not drawn
    Invalid(String),
    /// The fetch itself failed
    Failed(FetchFailure),
    /// A newer render was started before this one's response arrived
    Stale,
}

impl RenderOutcome {
    /// Whether the surface now shows this render's data
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Result of a fetch, before anything is drawn
enum Fetched {
    Ready(SeriesResponse),
    Rejected(String),
    Invalid(String),
    Failed(FetchFailure),
    Stale,
}

/// Renders balance history from a [`SeriesSource`]
pub struct Presenter<S> {
    source: S,
    latest: AtomicU64,
}

impl<S: SeriesSource> Presenter<S> {
    /// Create a presenter over a source
    pub fn new(source: S) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, render and report what happened
    pub async fn render<R>(&self, query: &HistoryQuery, surface: &mut R) -> RenderOutcome
    where
        R: RenderSurface + ?Sized,
    {
        match self.fetch_checked(query).await {
            Fetched::Ready(response) => {
                let stats = compute_stats(&response);
                let chart = project_to_chart(&response);

                surface.write_stats(&stats);
                surface.draw_chart(&chart);

                tracing::info!(
                    budgets = response.budgets.len(),
                    days = response.day_count(),
                    difference = stats.difference,
                    "balance history rendered"
                );
                RenderOutcome::Rendered(stats)
            }
            Fetched::Rejected(message) => {
                surface.notify(&message);
                RenderOutcome::Rejected(message)
            }
            Fetched::Invalid(message) => {
                surface.notify(&message);
                RenderOutcome::Invalid(message)
            }
            Fetched::Failed(failure) => {
                surface.notify(&failure.to_string());
                RenderOutcome::Failed(failure)
            }
            Fetched::Stale => RenderOutcome::Stale,
        }
    }

    /// Fetch and check a response without drawing it
    pub async fn load(&self, query: &HistoryQuery) -> HistoryResult<SeriesResponse> {
        match self.fetch_checked(query).await {
            Fetched::Ready(response) => Ok(response),
            Fetched::Rejected(message) => Err(HistoryError::Api(message)),
            Fetched::Invalid(message) => Err(HistoryError::Validation(message)),
            Fetched::Failed(failure) => Err(failure.into()),
            Fetched::Stale => Err(HistoryError::Fetch(
                "superseded by a newer request".into(),
            )),
        }
    }

    async fn fetch_checked(&self, query: &HistoryQuery) -> Fetched {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if query.has_no_budgets() {
            tracing::warn!(query = %query, "no budgets selected, sending query anyway");
        }

        let outcome = self.source.fetch_series(query).await;

        let latest = self.latest.load(Ordering::SeqCst);
        if latest != token {
            tracing::debug!(token, latest, "dropping stale balance history response");
            return Fetched::Stale;
        }

        match outcome {
            Ok(ApiReply::Series(response)) => match response.validate() {
                Ok(()) => Fetched::Ready(response),
                Err(e) => {
                    tracing::warn!(error = %e, "balance history response rejected");
                    Fetched::Invalid(e.to_string())
                }
            },
            Ok(ApiReply::Error(payload)) => {
                tracing::warn!(error = %payload.error, "backend refused balance history query");
                Fetched::Rejected(payload.error)
            }
            Err(failure) => {
                tracing::warn!(source = %self.source.describe(), error = %failure, "balance history fetch failed");
                Fetched::Failed(failure)
            }
        }
    }
}
