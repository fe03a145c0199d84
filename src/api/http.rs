//! HTTP transport port and its live reqwest adapter.
//!
//! [`HttpSend`] is the seam between the request/retry pipeline and the
//! actual network: one call, one response, no retry semantics. Retry,
//! classification, and decoding live in [`crate::api::Client`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Url};

use crate::api::error::ApiError;

/// Per-attempt ceiling on a single HTTP exchange. Retry waits between
/// attempts do not count against it.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Boxed future type alias used by [`HttpSend`] to keep the trait
/// dyn-compatible.
pub type SendFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + 'a>>;

/// One HTTP exchange to perform.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully built URL, query string included.
    pub url: Url,
    /// JSON body, already serialized. `None` sends no body.
    pub body: Option<String>,
}

/// The raw outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Retry-After` header, if the server sent one.
    pub retry_after: Option<String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response body as (lossy) text, for error reporting.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single authenticated HTTP exchange.
///
/// Implementations attach credentials and content-type; they never retry.
pub trait HttpSend: Send + Sync {
    /// Executes the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] for transport-level failures
    /// (connection, timeout, TLS). HTTP error statuses are not errors at
    /// this layer; they come back as an [`HttpResponse`].
    fn send(&self, request: &HttpRequest) -> SendFuture<'_>;
}

impl<T: HttpSend + ?Sized> HttpSend for Arc<T> {
    fn send(&self, request: &HttpRequest) -> SendFuture<'_> {
        (**self).send(request)
    }
}

/// Live transport backed by [`reqwest`].
pub struct ReqwestSender {
    http: reqwest::Client,
    token: String,
}

impl ReqwestSender {
    /// Creates a live sender authenticating with the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, token: token.to_owned() })
    }
}

impl HttpSend for ReqwestSender {
    fn send(&self, request: &HttpRequest) -> SendFuture<'_> {
        let method = request.method.clone();
        let url = request.url.clone();
        let body = request.body.clone();

        Box::pin(async move {
            let mut builder = self
                .http
                .request(method, url)
                .bearer_auth(&self.token)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("request failed: {e}")))?;

            let status = response.status().as_u16();
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::Network(format!("failed to read response: {e}")))?
                .to_vec();

            Ok(HttpResponse { status, retry_after, body })
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{ApiError, HttpRequest, HttpResponse, HttpSend, SendFuture};

    /// Scripted transport double: pops one canned outcome per send and
    /// records every request it saw.
    pub(crate) struct ScriptedSender {
        script: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedSender {
        pub(crate) fn new(script: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self { script: Mutex::new(script.into()), requests: Mutex::new(Vec::new()) }
        }

        pub(crate) fn ok(body: &str) -> Result<HttpResponse, ApiError> {
            Self::status(200, body)
        }

        pub(crate) fn status(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse { status, retry_after: None, body: body.as_bytes().to_vec() })
        }

        pub(crate) fn rate_limited(retry_after: Option<&str>) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: 429,
                retry_after: retry_after.map(str::to_owned),
                body: b"\"rate limited\"".to_vec(),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpSend for ScriptedSender {
        fn send(&self, request: &HttpRequest) -> SendFuture<'_> {
            self.requests.lock().unwrap().push(request.clone());
            let next = self.script.lock().unwrap().pop_front();
            Box::pin(async move {
                next.unwrap_or_else(|| Err(ApiError::Network("script exhausted".to_owned())))
            })
        }
    }
}
