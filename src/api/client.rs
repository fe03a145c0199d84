//! Request pipeline: URL building, retry on rate limits, status
//! classification, and pagination unwrapping.

use std::time::Duration;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};

use crate::api::error::ApiError;
use crate::api::http::{HttpRequest, HttpSend, ReqwestSender};

/// Base endpoint for all REST calls.
pub const BASE_URL: &str = "https://api.todoist.com/api/v1";

/// Extra attempts allowed beyond the first, all spent on 429 responses.
const MAX_RETRIES: u32 = 3;

/// Fallback wait when a 429 carries no parseable `Retry-After` hint.
const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(5);

/// A Todoist API client.
///
/// One instance per command invocation; it holds no cross-run state.
/// All operations borrow the client and run to completion or a classified
/// [`ApiError`]; cancellation is the caller dropping the future.
pub struct Client {
    sender: Box<dyn HttpSend>,
}

impl Client {
    /// Creates a client authenticating with the given API token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        Ok(Self { sender: Box::new(ReqwestSender::new(token)?) })
    }

    /// Creates a client over a custom transport implementation.
    #[must_use]
    pub fn with_sender(sender: Box<dyn HttpSend>) -> Self {
        Self { sender }
    }

    pub(crate) async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, ApiError> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Vec<u8>, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Encode)?;
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    pub(crate) async fn post_empty(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        self.request(Method::POST, endpoint, &[], None).await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        self.request(Method::DELETE, endpoint, &[], None).await
    }

    /// Performs one logical API call: at most [`MAX_RETRIES`] re-attempts,
    /// all spent waiting out 429 responses. Any other failure terminates
    /// immediately.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = build_url(endpoint, query)?;
        let request = HttpRequest { method: method.clone(), url, body };

        let mut attempt = 0;
        loop {
            let start = Instant::now();
            let response = match self.sender.send(&request).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::debug!(
                        %method,
                        url = %request.url,
                        elapsed = ?start.elapsed(),
                        error = %err,
                        "request failed"
                    );
                    return Err(err);
                }
            };
            tracing::debug!(
                %method,
                url = %request.url,
                status = response.status,
                elapsed = ?start.elapsed(),
                "request completed"
            );

            if response.status == 429 {
                let wait = retry_wait(response.retry_after.as_deref());
                if attempt >= MAX_RETRIES {
                    return Err(ApiError::RetriesExceeded {
                        last: Box::new(ApiError::RateLimited { wait }),
                    });
                }
                tracing::debug!(wait_secs = wait.as_secs(), "rate limited, retrying");
                sleep(wait).await;
                attempt += 1;
                continue;
            }

            if response.status >= 400 {
                let body = response.body_text();
                return Err(match response.status {
                    401 | 403 => ApiError::Auth { status: response.status, body },
                    status => ApiError::Api { status, body },
                });
            }

            return Ok(response.body);
        }
    }
}

/// Builds the request URL, encoding non-empty query parameters.
///
/// Parameters whose value is the empty string are omitted entirely, never
/// sent as `key=`.
fn build_url(endpoint: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
    let mut url = Url::parse(&format!("{BASE_URL}/{endpoint}"))
        .map_err(|e| ApiError::Network(format!("invalid request URL: {e}")))?;
    let params: Vec<(&str, &str)> =
        query.iter().copied().filter(|(_, value)| !value.is_empty()).collect();
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Parses a `Retry-After` hint as integer seconds, falling back to
/// [`DEFAULT_RETRY_WAIT`] when the header is absent or malformed.
fn retry_wait(hint: Option<&str>) -> Duration {
    hint.and_then(|raw| raw.trim().parse::<u64>().ok())
        .map_or(DEFAULT_RETRY_WAIT, Duration::from_secs)
}

/// Cursor-paginated envelope used by list endpoints.
#[derive(Deserialize)]
struct Page<T> {
    results: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Decodes a list response, trying the paginated envelope first and
/// falling back to a bare array.
///
/// Only the first page is returned; the continuation cursor is ignored.
pub(crate) fn decode_list<T: DeserializeOwned>(
    bytes: &[u8],
    context: &'static str,
) -> Result<Vec<T>, ApiError> {
    if let Ok(page) = serde_json::from_slice::<Page<T>>(bytes) {
        if page.next_cursor.is_some() {
            tracing::debug!(context, "response is paginated; only the first page is returned");
        }
        return Ok(page.results);
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::decode(context, e))
}

/// Decodes a single object from a response body.
pub(crate) fn decode_one<T: DeserializeOwned>(
    bytes: &[u8],
    context: &'static str,
) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::decode(context, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::testing::ScriptedSender;
    use crate::api::types::Task;
    use std::sync::Arc;

    fn client_with(script: Vec<Result<crate::api::http::HttpResponse, ApiError>>) -> (Client, Arc<ScriptedSender>) {
        let sender = Arc::new(ScriptedSender::new(script));
        (Client::with_sender(Box::new(Arc::clone(&sender))), sender)
    }

    #[tokio::test(start_paused = true)]
    async fn retries_on_rate_limit_and_honors_wait_hints() {
        let (client, sender) = client_with(vec![
            ScriptedSender::rate_limited(Some("7")),
            ScriptedSender::rate_limited(Some("2")),
            ScriptedSender::ok("[]"),
        ]);

        let started = Instant::now();
        let body = client.get("tasks", &[]).await.unwrap();

        assert_eq!(body, b"[]");
        assert_eq!(sender.calls(), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(9));
    }

    #[tokio::test(start_paused = true)]
    async fn falls_back_to_five_seconds_without_a_parseable_hint() {
        for hint in [None, Some("soon"), Some("")] {
            let (client, _) = client_with(vec![
                ScriptedSender::rate_limited(hint),
                ScriptedSender::ok("[]"),
            ]);

            let started = Instant::now();
            client.get("tasks", &[]).await.unwrap();
            assert_eq!(started.elapsed(), Duration::from_secs(5));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fails_after_exhausting_retries() {
        let (client, sender) = client_with(vec![
            ScriptedSender::rate_limited(Some("1")),
            ScriptedSender::rate_limited(Some("1")),
            ScriptedSender::rate_limited(Some("1")),
            ScriptedSender::rate_limited(Some("1")),
        ]);

        let err = client.get("tasks", &[]).await.unwrap_err();

        assert_eq!(sender.calls(), 4);
        assert!(matches!(err, ApiError::RetriesExceeded { .. }));
        assert_eq!(err.to_string(), "max retries exceeded: rate limited, retry after 1s");
    }

    #[tokio::test]
    async fn classifies_auth_failures_without_retrying() {
        for status in [401, 403] {
            let (client, sender) =
                client_with(vec![ScriptedSender::status(status, "\"Unauthorized\"")]);

            let err = client.get("tasks", &[]).await.unwrap_err();

            assert_eq!(sender.calls(), 1);
            assert!(matches!(err, ApiError::Auth { status: s, .. } if s == status));
        }
    }

    #[tokio::test]
    async fn classifies_other_error_statuses_without_retrying() {
        for status in [400, 404, 500] {
            let (client, sender) = client_with(vec![ScriptedSender::status(status, "boom")]);

            let err = client.get("tasks", &[]).await.unwrap_err();

            assert_eq!(sender.calls(), 1);
            match err {
                ApiError::Api { status: s, body } => {
                    assert_eq!(s, status);
                    assert_eq!(body, "boom");
                }
                other => panic!("expected Api error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn network_errors_are_not_retried() {
        let (client, sender) =
            client_with(vec![Err(ApiError::Network("connection refused".to_owned()))]);

        let err = client.get("tasks", &[]).await.unwrap_err();

        assert_eq!(sender.calls(), 1);
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn get_omits_empty_query_values() {
        let (client, sender) = client_with(vec![ScriptedSender::ok("[]")]);

        client
            .get("tasks", &[("project_id", ""), ("filter", "today | overdue")])
            .await
            .unwrap();

        let request = &sender.requests()[0];
        assert_eq!(request.url.query(), Some("filter=today+%7C+overdue"));
    }

    #[tokio::test]
    async fn get_without_parameters_has_no_query_string() {
        let (client, sender) = client_with(vec![ScriptedSender::ok("[]")]);

        client.get("projects", &[("project_id", "")]).await.unwrap();

        assert_eq!(sender.requests()[0].url.query(), None);
    }

    #[test]
    fn decode_list_accepts_envelope_and_bare_forms() {
        let bare = br#"[{"id":"1","content":"one"},{"id":"2","content":"two"}]"#;
        let enveloped =
            br#"{"results":[{"id":"1","content":"one"},{"id":"2","content":"two"}],"next_cursor":null}"#;

        let from_bare: Vec<Task> = decode_list(bare, "tasks").unwrap();
        let from_envelope: Vec<Task> = decode_list(enveloped, "tasks").unwrap();

        assert_eq!(from_bare, from_envelope);
        assert_eq!(from_bare.len(), 2);
        assert_eq!(from_bare[0].id, "1");
    }

    #[test]
    fn decode_list_keeps_only_the_first_page() {
        let body = br#"{"results":[{"id":"1","content":"one"}],"next_cursor":"opaque"}"#;
        let tasks: Vec<Task> = decode_list(body, "tasks").unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn decode_list_reports_the_resource_context() {
        let err = decode_list::<Task>(b"{\"nope\":true}", "tasks").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse tasks:"));
    }
}
