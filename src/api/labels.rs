//! Label operations. Labels expose list and create only.

use std::collections::BTreeMap;

use crate::api::client::{decode_list, decode_one, Client};
use crate::api::error::ApiError;
use crate::api::types::Label;

impl Client {
    /// Returns all labels.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_labels(&self) -> Result<Vec<Label>, ApiError> {
        let response = self.get("labels", &[]).await?;
        decode_list(&response, "labels")
    }

    /// Creates a new label.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_label(&self, name: &str, color: Option<&str>) -> Result<Label, ApiError> {
        let mut params = BTreeMap::from([("name", name)]);
        if let Some(color) = color {
            params.insert("color", color);
        }
        let response = self.post("labels", &params).await?;
        decode_one(&response, "label")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::testing::ScriptedSender;
    use std::sync::Arc;

    #[tokio::test]
    async fn add_label_omits_color_when_unset() {
        let sender = Arc::new(ScriptedSender::new(vec![ScriptedSender::ok(
            r#"{"id":"l1","name":"urgent"}"#,
        )]));
        let client = Client::with_sender(Box::new(Arc::clone(&sender)));

        let label = client.add_label("urgent", None).await.unwrap();

        assert_eq!(label.name, "urgent");
        let body: serde_json::Value =
            serde_json::from_str(sender.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "urgent"}));
    }
}
