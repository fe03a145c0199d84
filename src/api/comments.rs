//! Comment operations. Comments expose list and create only.

use std::collections::BTreeMap;

use crate::api::client::{decode_list, decode_one, Client};
use crate::api::error::ApiError;
use crate::api::types::Comment;

impl Client {
    /// Returns comments for a task or a project.
    ///
    /// A task ID takes precedence when both are supplied.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_comments(
        &self,
        task_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<Vec<Comment>, ApiError> {
        let (key, value) = match (task_id, project_id) {
            (Some(task_id), _) => ("task_id", task_id),
            (None, Some(project_id)) => ("project_id", project_id),
            (None, None) => ("task_id", ""),
        };
        let response = self.get("comments", &[(key, value)]).await?;
        decode_list(&response, "comments")
    }

    /// Adds a comment to a task or a project.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_comment(
        &self,
        content: &str,
        task_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<Comment, ApiError> {
        let mut params = BTreeMap::from([("content", content)]);
        if let Some(task_id) = task_id {
            params.insert("task_id", task_id);
        } else if let Some(project_id) = project_id {
            params.insert("project_id", project_id);
        }
        let response = self.post("comments", &params).await?;
        decode_one(&response, "comment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::testing::ScriptedSender;
    use std::sync::Arc;

    fn client_with(
        script: Vec<Result<crate::api::http::HttpResponse, ApiError>>,
    ) -> (Client, Arc<ScriptedSender>) {
        let sender = Arc::new(ScriptedSender::new(script));
        (Client::with_sender(Box::new(Arc::clone(&sender))), sender)
    }

    #[tokio::test]
    async fn get_comments_prefers_the_task_scope() {
        let (client, sender) = client_with(vec![ScriptedSender::ok("[]")]);

        client.get_comments(Some("t1"), Some("p1")).await.unwrap();

        assert_eq!(sender.requests()[0].url.query(), Some("task_id=t1"));
    }

    #[tokio::test]
    async fn add_comment_targets_the_task() {
        let (client, sender) = client_with(vec![ScriptedSender::ok(
            r#"{"id":"c1","task_id":"t1","content":"a note","posted_at":"2024-01-15T10:30:00Z"}"#,
        )]);

        let comment = client.add_comment("a note", Some("t1"), None).await.unwrap();

        assert_eq!(comment.id, "c1");
        let body: serde_json::Value =
            serde_json::from_str(sender.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "a note");
        assert_eq!(body["task_id"], "t1");
    }
}
