//! Balance history fetching
//!
//! [`SeriesSource`] is the seam between the presenter and wherever the
//! balance series come from. [`HttpFetcher`] asks the backend with a GET
//! request; [`FileSource`] reads a saved response from disk.
//!
//! Sources never fail with an error type of their own: transport problems,
//! non-success statuses and unparseable bodies all come back as a
//! [`FetchFailure`] value.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client, StatusCode, Url};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::cookie::csrf_token_from_cookie;
use crate::config::Settings;
use crate::error::{HistoryError, HistoryResult};
use crate::export::{import_json, import_yaml};
use crate::models::{ApiReply, HistoryQuery};

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Longest body excerpt kept in a failure message
const BODY_EXCERPT_LEN: usize = 200;

/// Why a fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response
    Transport,
    /// The backend answered with a non-success status
    Status(u16),
    /// The body was not a balance history document
    Malformed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Malformed => write!(f, "malformed response"),
        }
    }
}

/// Uniform failure value returned by every [`SeriesSource`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Status(code),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Malformed,
            message: message.into(),
        }
    }
}

impl From<FetchFailure> for HistoryError {
    fn from(failure: FetchFailure) -> Self {
        Self::Fetch(failure.to_string())
    }
}

/// Result of one fetch attempt
pub type FetchOutcome = Result<ApiReply, FetchFailure>;

/// Something that can answer a [`HistoryQuery`]
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetch the balance series for `query`
    ///
    /// Each call is a fresh attempt: no retry, no timeout, no caching.
    async fn fetch_series(&self, query: &HistoryQuery) -> FetchOutcome;

    /// Short description for logs and status lines
    fn describe(&self) -> String;
}

/// Connection details for [`HttpFetcher`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetcherConfig {
    /// Balance history resource URL
    pub endpoint: String,
    /// Explicit anti-forgery token
    pub csrf_token: Option<String>,
    /// Raw `Cookie` header forwarded with every request
    pub cookie: Option<String>,
}

impl FetcherConfig {
    /// Take the connection details from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            csrf_token: settings.csrf_token.clone(),
            cookie: settings.cookie.clone(),
        }
    }

    /// The token to send: the explicit one, else the `csrftoken` cookie
    pub fn resolved_token(&self) -> Option<String> {
        self.csrf_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| self.cookie.as_deref().and_then(csrf_token_from_cookie))
    }
}

/// Fetches balance history from the backend over HTTP
///
/// Requests are `GET <endpoint>?start=..&end=..&budgets=a,b` with
/// `Accept: application/json` and, when a token is known, `X-CSRFToken`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
    endpoint: Url,
    csrf_token: Option<String>,
    cookie: Option<String>,
}

impl HttpFetcher {
    /// Build a fetcher, rejecting endpoints that are not http(s) URLs
    pub fn new(config: FetcherConfig) -> HistoryResult<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            HistoryError::Config(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(HistoryError::Config(format!(
                    "Unsupported endpoint scheme '{}' (use http or https)",
                    other
                )))
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| HistoryError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let csrf_token = config.resolved_token();

        Ok(Self {
            http,
            endpoint,
            csrf_token,
            cookie: config.cookie.filter(|c| !c.is_empty()),
        })
    }

    /// The resource URL requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether requests carry an anti-forgery token
    pub fn has_token(&self) -> bool {
        self.csrf_token.is_some()
    }
}

#[async_trait]
impl SeriesSource for HttpFetcher {
    async fn fetch_series(&self, query: &HistoryQuery) -> FetchOutcome {
        let mut request = self
            .http
            .get(self.endpoint.clone())
            .query(&query.query_pairs());

        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token.as_str());
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie.as_str());
        }

        tracing::debug!(endpoint = %self.endpoint, query = %query, csrf = self.has_token(), "requesting balance history");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "balance history request failed");
            FetchFailure::transport(format!("GET {} failed: {}", self.endpoint, e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, %status, "failed to read response body");
            FetchFailure::transport(format!("Failed to read response from {}: {}", self.endpoint, e))
        })?;

        tracing::debug!(%status, bytes = body.len(), "balance history response received");
        classify_response(status, &body)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Turn a status and body into a fetch outcome
///
/// An `{error}` payload is passed through whatever the status, since the
/// backend reports rejected queries as 400 with that body. Any other body
/// with a non-success status is a status failure.
pub fn classify_response(status: StatusCode, body: &str) -> FetchOutcome {
    match (ApiReply::from_json(body), status.is_success()) {
        (Ok(reply @ ApiReply::Error(_)), _) => Ok(reply),
        (Ok(reply), true) => Ok(reply),
        (_, false) => Err(FetchFailure::status(
            status.as_u16(),
            format!("server answered {}: {}", status, excerpt(body)),
        )),
        (Err(e), true) => Err(FetchFailure::malformed(format!(
            "response is not a balance history: {}",
            e
        ))),
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_EXCERPT_LEN {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(BODY_EXCERPT_LEN).collect();
        format!("{}...", cut)
    }
}

/// Reads a saved balance history response from disk
///
/// Accepts a raw response document, or a JSON or YAML export written by the
/// `export` command. The query is ignored; the file always answers with the
/// same document.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }

    fn parse(&self, body: &str) -> HistoryResult<ApiReply> {
        if self.is_yaml() {
            return Ok(ApiReply::Series(import_yaml(body)?.series()));
        }

        let value: serde_json::Value = serde_json::from_str(body)?;
        if value.get("schema_version").is_some() {
            Ok(ApiReply::Series(import_json(body)?.series()))
        } else {
            ApiReply::from_json(body)
        }
    }
}

#[async_trait]
impl SeriesSource for FileSource {
    async fn fetch_series(&self, query: &HistoryQuery) -> FetchOutcome {
        tracing::debug!(path = %self.path.display(), query = %query, "reading saved balance history");

        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FetchFailure::transport(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        self.parse(&body).map_err(|e| {
            FetchFailure::malformed(format!("{} is not a balance history: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SERIES: &str = r#"{"days": ["01/01", "01/08"], "budgets": [{"name": "Rent", "data": [100, 150]}]}"#;

    #[test]
    fn test_success_with_series() {
        let outcome = classify_response(StatusCode::OK, SERIES);
        assert!(matches!(outcome, Ok(ApiReply::Series(_))));
    }

    #[test]
    fn test_error_payload_passes_through_bad_request() {
        let outcome = classify_response(StatusCode::BAD_REQUEST, r#"{"error": "Error: Missing start from get parameters"}"#);
        let reply = outcome.unwrap();
        assert_eq!(
            reply.error_message(),
            Some("Error: Missing start from get parameters")
        );
    }

    #[test]
    fn test_server_error_is_status_failure() {
        let failure = classify_response(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Status(500));
        assert!(failure.message.contains("boom"));
    }

    #[test]
    fn test_series_with_error_status_is_status_failure() {
        let failure = classify_response(StatusCode::SERVICE_UNAVAILABLE, SERIES).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Status(503));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let failure = classify_response(StatusCode::OK, "<html>login</html>").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Malformed);
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let failure = classify_response(StatusCode::BAD_GATEWAY, &body).unwrap_err();
        assert!(failure.message.ends_with("..."));
        assert!(failure.message.len() < 300);
    }

    #[test]
    fn test_failure_display() {
        let failure = FetchFailure::status(500, "server answered 500");
        assert_eq!(failure.to_string(), "HTTP 500: server answered 500");

        let err: HistoryError = failure.into();
        assert!(err.is_remote());
    }

    #[test]
    fn test_token_prefers_explicit_value() {
        let config = FetcherConfig {
            endpoint: "http://localhost".into(),
            csrf_token: Some("explicit".into()),
            cookie: Some("csrftoken=fromcookie".into()),
        };
        assert_eq!(config.resolved_token().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_token_falls_back_to_cookie() {
        let config = FetcherConfig {
            endpoint: "http://localhost".into(),
            csrf_token: Some(String::new()),
            cookie: Some("sessionid=1; csrftoken=from%20cookie".into()),
        };
        assert_eq!(config.resolved_token().as_deref(), Some("from cookie"));
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let bad_scheme = FetcherConfig {
            endpoint: "ftp://example.com/history".into(),
            ..Default::default()
        };
        assert!(matches!(HttpFetcher::new(bad_scheme), Err(HistoryError::Config(_))));

        let not_a_url = FetcherConfig {
            endpoint: "graph/history".into(),
            ..Default::default()
        };
        assert!(matches!(HttpFetcher::new(not_a_url), Err(HistoryError::Config(_))));
    }

    #[test]
    fn test_fetcher_from_settings() {
        let mut settings = Settings::default();
        settings.cookie = Some("csrftoken=abc".into());

        let fetcher = HttpFetcher::new(FetcherConfig::from_settings(&settings)).unwrap();
        assert!(fetcher.has_token());
        assert_eq!(fetcher.endpoint().path(), "/api/graph/history");
    }

    #[tokio::test]
    async fn test_file_source_reads_saved_response() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SERIES.as_bytes()).unwrap();

        let source = FileSource::new(file.path());
        let query = HistoryQuery::new("a", "b", vec!["Rent".into()]);
        let reply = source.fetch_series(&query).await.unwrap();

        assert!(matches!(reply, ApiReply::Series(_)));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_transport_failure() {
        let source = FileSource::new("/definitely/not/here.json");
        let query = HistoryQuery::new("a", "b", Vec::new());
        let failure = source.fetch_series(&query).await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Transport);
    }

    fn saved_export() -> crate::export::HistoryExport {
        let query = HistoryQuery::new("a", "b", vec!["Rent".into()]);
        let response = crate::models::SeriesResponse::new(
            vec!["01/01".into(), "01/08".into()],
            vec![crate::models::BudgetSeries::new("Rent", vec![100.0, 150.0])],
        );
        crate::export::HistoryExport::new(&query, &response)
    }

    fn expect_series(reply: ApiReply) -> crate::models::SeriesResponse {
        match reply {
            ApiReply::Series(series) => series,
            other => panic!("expected a series, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_source_reads_json_export() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        crate::export::export_json(&saved_export(), &mut file, true).unwrap();

        let source = FileSource::new(file.path());
        let series = expect_series(source.fetch_series(&HistoryQuery::new("a", "b", vec![])).await.unwrap());

        assert_eq!(series.days, vec!["01/01", "01/08"]);
        assert_eq!(series.budgets[0].data, vec![100.0, 150.0]);
    }

    #[tokio::test]
    async fn test_file_source_reads_yaml_export() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        crate::export::export_yaml(&saved_export(), &mut file).unwrap();

        let source = FileSource::new(file.path());
        let series = expect_series(source.fetch_series(&HistoryQuery::new("a", "b", vec![])).await.unwrap());

        assert_eq!(series.budgets[0].name, "Rent");
    }

    #[tokio::test]
    async fn test_file_source_rejects_unknown_export_version() {
        let mut export = saved_export();
        export.schema_version = "9.0.0".into();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        crate::export::export_json(&export, &mut file, false).unwrap();

        let source = FileSource::new(file.path());
        let failure = source
            .fetch_series(&HistoryQuery::new("a", "b", vec![]))
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Malformed);
        assert!(failure.message.contains("schema version"));
    }
}
