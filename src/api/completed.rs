//! Completion-history queries, served by the sync-style
//! `completed/get_all` endpoint.

use serde::Serialize;

use crate::api::client::{decode_one, Client};
use crate::api::error::ApiError;
use crate::api::types::CompletedTasksResponse;

#[derive(Serialize)]
struct CompletedQuery<'a> {
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    until: Option<&'a str>,
}

impl Client {
    /// Returns recently completed tasks, newest first.
    ///
    /// `since` and `until` are `YYYY-MM-DD` bounds; either may be absent.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_completed_tasks(
        &self,
        project_id: Option<&str>,
        since: Option<&str>,
        until: Option<&str>,
        limit: u32,
    ) -> Result<CompletedTasksResponse, ApiError> {
        let query = CompletedQuery { limit, project_id, since, until };
        let response = self.post("completed/get_all", &query).await?;
        decode_one(&response, "completed tasks")
    }
}
