//! Section operations and section name resolution.

use crate::api::client::{decode_list, decode_one, Client};
use crate::api::error::ApiError;
use crate::api::resolve;
use crate::api::types::Section;

impl Client {
    /// Returns sections, optionally scoped to a project.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_sections(&self, project_id: Option<&str>) -> Result<Vec<Section>, ApiError> {
        let response =
            self.get("sections", &[("project_id", project_id.unwrap_or(""))]).await?;
        decode_list(&response, "sections")
    }

    /// Finds a section within a project by case-insensitive name fragment.
    ///
    /// The owning project must already be resolved: remote section
    /// listings are scoped by project ID. The first match in listing
    /// order wins.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no section name contains the
    /// fragment, or any [`ApiError`] from the underlying listing call.
    pub async fn find_section(&self, project_id: &str, name: &str) -> Result<Section, ApiError> {
        let sections = self.get_sections(Some(project_id)).await?;
        resolve::first_match(sections, name)
            .ok_or_else(|| ApiError::NotFound { resource: "section", name: name.to_owned() })
    }

    /// Creates a new section in a project.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_section(&self, name: &str, project_id: &str) -> Result<Section, ApiError> {
        let params = [("name", name), ("project_id", project_id)]
            .into_iter()
            .collect::<std::collections::BTreeMap<_, _>>();
        let response = self.post("sections", &params).await?;
        decode_one(&response, "section")
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
    async fn get_sections_scopes_by_project() {
        let (client, sender) = client_with(vec![ScriptedSender::ok("[]")]);

        client.get_sections(Some("p1")).await.unwrap();

        assert_eq!(sender.requests()[0].url.query(), Some("project_id=p1"));
    }

    #[tokio::test]
    async fn find_section_resolves_within_the_project() {
        let (client, sender) = client_with(vec![ScriptedSender::ok(
            r#"[{"id":"s1","project_id":"p1","name":"In Progress"},
                {"id":"s2","project_id":"p1","name":"Done"}]"#,
        )]);

        let section = client.find_section("p1", "done").await.unwrap();

        assert_eq!(section.id, "s2");
        assert_eq!(sender.requests()[0].url.query(), Some("project_id=p1"));
    }

    #[tokio::test]
    async fn find_section_misses_are_a_not_found_failure() {
        let (client, _) = client_with(vec![ScriptedSender::ok("[]")]);

        let err = client.find_section("p1", "Backlog").await.unwrap_err();
        assert_eq!(err.to_string(), "section not found: Backlog");
    }

    #[tokio::test]
    async fn add_section_posts_name_and_project() {
        let (client, sender) = client_with(vec![ScriptedSender::ok(
            r#"{"id":"s9","project_id":"p1","name":"Review"}"#,
        )]);

        let section = client.add_section("Review", "p1").await.unwrap();

        assert_eq!(section.id, "s9");
        let body: serde_json::Value =
            serde_json::from_str(sender.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Review");
        assert_eq!(body["project_id"], "p1");
    }
}
