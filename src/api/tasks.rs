//! Task operations, including the command-batch move and reorder calls.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::client::{decode_list, decode_one, Client};
use crate::api::error::ApiError;
use crate::api::types::{AddTaskParams, Task, UpdateTaskParams};

/// Envelope for the command-batch endpoint.
///
/// Only single-command batches are produced today, but the wire shape
/// carries a list so multiple commands can share one call.
#[derive(Serialize)]
struct CommandBatch {
    commands: Vec<BatchCommand>,
}

/// One command in a batch: a type tag, a unique token, and a
/// type-specific argument map.
#[derive(Serialize)]
struct BatchCommand {
    #[serde(rename = "type")]
    kind: &'static str,
    uuid: String,
    args: serde_json::Value,
}

impl BatchCommand {
    /// Tokens only need to be unique within a single process run.
    fn new(kind: &'static str, args: serde_json::Value) -> Self {
        Self { kind, uuid: Uuid::new_v4().to_string(), args }
    }
}

impl Client {
    /// Returns active tasks, optionally scoped to a project and filtered
    /// by a Todoist filter query.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_tasks(
        &self,
        project_id: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Vec<Task>, ApiError> {
        let response = self
            .get(
                "tasks",
                &[
                    ("project_id", project_id.unwrap_or("")),
                    ("filter", filter.unwrap_or("")),
                ],
            )
            .await?;
        decode_list(&response, "tasks")
    }

    /// Returns a single task by ID.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_task(&self, task_id: &str) -> Result<Task, ApiError> {
        let response = self.get(&format!("tasks/{task_id}"), &[]).await?;
        decode_one(&response, "task")
    }

    /// Creates a new task.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_task(&self, params: &AddTaskParams) -> Result<Task, ApiError> {
        let response = self.post("tasks", params).await?;
        decode_one(&response, "task")
    }

    /// Updates an existing task.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn update_task(
        &self,
        task_id: &str,
        params: &UpdateTaskParams,
    ) -> Result<Task, ApiError> {
        let response = self.post(&format!("tasks/{task_id}"), params).await?;
        decode_one(&response, "task")
    }

    /// Marks a task as complete.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn complete_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("tasks/{task_id}/close")).await.map(|_| ())
    }

    /// Reopens a completed task.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn reopen_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("tasks/{task_id}/reopen")).await.map(|_| ())
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("tasks/{task_id}")).await.map(|_| ())
    }

    /// Moves a task to a different section or project.
    ///
    /// Exactly one target is used: a section takes precedence over a
    /// project when both are supplied.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn move_task(
        &self,
        task_id: &str,
        section_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut args = json!({ "id": task_id });
        if let Some(section_id) = section_id {
            args["section_id"] = json!(section_id);
        } else if let Some(project_id) = project_id {
            args["project_id"] = json!(project_id);
        }

        let batch = CommandBatch { commands: vec![BatchCommand::new("item_move", args)] };
        self.post("sync", &batch).await.map(|_| ())
    }

    /// Sets a task's position among its siblings.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn reorder_task(&self, task_id: &str, child_order: i64) -> Result<(), ApiError> {
        let args = json!({ "items": [{ "id": task_id, "child_order": child_order }] });
        let batch = CommandBatch { commands: vec![BatchCommand::new("item_reorder", args)] };
        self.post("sync", &batch).await.map(|_| ())
    }
}
