//! Project operations and project name resolution.

use crate::api::client::{decode_list, decode_one, Client};
use crate::api::error::ApiError;
use crate::api::resolve;
use crate::api::types::{AddProjectParams, Project};

impl Client {
    /// Returns all projects.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self.get("projects", &[]).await?;
        decode_list(&response, "projects")
    }

    /// Returns a single project by ID.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        let response = self.get(&format!("projects/{project_id}"), &[]).await?;
        decode_one(&response, "project")
    }

    /// Finds a project by case-insensitive name fragment.
    ///
    /// The first match in listing order wins; ambiguity is not detected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no project name contains the
    /// fragment, or any [`ApiError`] from the underlying listing call.
    pub async fn find_project(&self, name: &str) -> Result<Project, ApiError> {
        let projects = self.get_projects().await?;
        resolve::first_match(projects, name)
            .ok_or_else(|| ApiError::NotFound { resource: "project", name: name.to_owned() })
    }

    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request or decoding fails.
    pub async fn add_project(&self, params: &AddProjectParams) -> Result<Project, ApiError> {
        let response = self.post("projects", params).await?;
        decode_one(&response, "project")
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("projects/{project_id}")).await.map(|_| ())
    }
}
