//! Data fetching
//!
//! Builds the balance history request, sends it, and hands back either the
//! parsed reply or a uniform failure value.

pub mod cookie;
pub mod fetcher;

pub use cookie::{csrf_token_from_cookie, get_cookie};
pub use fetcher::{
    classify_response, FailureKind, FetchFailure, FetchOutcome, FetcherConfig, FileSource,
    HttpFetcher, SeriesSource,
};
