//! Todoist API client: transport, typed resources, and lookup helpers.
//!
//! [`Client`] performs authenticated calls against the fixed base
//! endpoint, retrying rate-limited responses and classifying everything
//! else into [`ApiError`]. Resource operations live one module per
//! resource as `impl Client` blocks; [`enrich`] adds the
//! bounded-concurrency comment fan-out used by `tasks --details`.

mod client;
mod comments;
mod completed;
pub mod enrich;
mod error;
mod http;
mod labels;
mod projects;
pub mod resolve;
mod sections;
mod tasks;
pub mod types;

pub use client::{Client, BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, HttpSend, ReqwestSender, SendFuture};
