//! Classified failures produced by the API client.

use std::time::Duration;

use thiserror::Error;

/// A classified failure from the Todoist API client.
///
/// [`ApiError::RateLimited`] is internal to the transport retry loop:
/// callers only observe it wrapped in [`ApiError::RetriesExceeded`] once
/// the retry budget is spent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS).
    ///
    /// Not retried: only rate-limit responses re-attempt.
    #[error("{0}")]
    Network(String),

    /// The server rejected the bearer token (401 or 403).
    #[error("authentication failed: API error ({status}): {body}")]
    Auth {
        /// HTTP status code, 401 or 403.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Any other error status (>= 400, excluding 429).
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The server answered 429 with a wait hint (or the fallback applied).
    #[error("rate limited, retry after {}s", wait.as_secs())]
    RateLimited {
        /// How long to wait before the next attempt.
        wait: Duration,
    },

    /// Every allowed attempt was answered with 429.
    #[error("max retries exceeded: {last}")]
    RetriesExceeded {
        /// The rate-limit condition seen on the final attempt.
        last: Box<ApiError>,
    },

    /// A name lookup matched nothing in the listing.
    #[error("{resource} not found: {name}")]
    NotFound {
        /// Resource kind, e.g. `"project"` or `"section"`.
        resource: &'static str,
        /// The name fragment that failed to resolve.
        name: String,
    },

    /// A request payload failed to serialize.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body did not decode as the expected shape.
    #[error("failed to parse {context}: {source}")]
    Decode {
        /// What was being decoded, e.g. `"tasks"`.
        context: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }
}
