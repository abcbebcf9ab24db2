//! Research error types

use thiserror::Error;
use shared::SharedError;

/// Result type for research setup operations
pub type ResearchResult<T> = Result<T, ResearchError>;

/// Why a single upstream call produced nothing usable.
///
/// These never escape the pipeline; they end up as diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("server error: {0}")]
    ServerError(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl UpstreamFailure {
    /// Map a non-success HTTP status onto the failure taxonomy
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => UpstreamFailure::AuthenticationFailed,
            404 => UpstreamFailure::NotFound,
            429 => UpstreamFailure::RateLimitExceeded,
            503 => UpstreamFailure::ServiceUnavailable,
            _ => UpstreamFailure::ServerError(status.to_string()),
        }
    }
}

impl From<reqwest::Error> for UpstreamFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamFailure::Timeout
        } else if err.is_decode() {
            UpstreamFailure::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            UpstreamFailure::from_status(status)
        } else {
            UpstreamFailure::NetworkError(err.to_string())
        }
    }
}

/// Startup-time research errors
#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing API key: set {var}")]
    MissingApiKey { var: String },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl ResearchError {
    pub fn config(message: impl Into<String>) -> Self {
        ResearchError::ConfigError { message: message.into() }
    }
}
