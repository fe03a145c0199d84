//! Domain records mirroring the Todoist API resources.
//!
//! All identifiers are opaque server-assigned strings, compared by exact
//! value. Instances are immutable snapshots of remote state: once decoded
//! they are never reconciled with the server except by re-fetching.

use serde::{Deserialize, Serialize};

/// Converts between the user-facing priority scale (1 = most urgent) and
/// the API scale (4 = most urgent).
///
/// The mapping `p -> 5 - p` is its own inverse over `1..=4`, so the same
/// function serves both directions. The value 0 means "no priority
/// specified" and passes through unchanged.
#[must_use]
pub fn convert_priority(priority: u8) -> u8 {
    match priority {
        1..=4 => 5 - priority,
        other => other,
    }
}

/// An active task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Longer free-form notes.
    #[serde(default)]
    pub description: String,
    /// Owning project ID.
    #[serde(default)]
    pub project_id: String,
    /// Owning section ID, when the task sits in a section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Parent task ID; tasks form a forest through this reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Position among siblings.
    #[serde(default)]
    pub order: i64,
    /// API-scale priority: 1 is lowest urgency, 4 highest.
    #[serde(default)]
    pub priority: u8,
    /// Due specification, absent when the task has no due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
    /// Web URL of the task.
    #[serde(default)]
    pub url: String,
    /// Label names (not IDs) attached to the task. Always serialized,
    /// even when empty.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Creation timestamp, RFC 3339.
    #[serde(default)]
    pub created_at: String,
    /// Creator user ID.
    #[serde(default)]
    pub creator_id: String,
    /// Assignee user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Assigner user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_id: Option<String>,
    /// Whether the task has been completed.
    #[serde(default)]
    pub is_completed: bool,
}

/// A task due specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    /// Due date, `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable form, e.g. `"every friday"`.
    #[serde(default)]
    pub string: String,
    /// Exact datetime, when the due carries a time of day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// Whether the due date recurs.
    #[serde(default)]
    pub is_recurring: bool,
    /// IANA timezone, when the due carries a time of day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Color name.
    #[serde(default)]
    pub color: String,
    /// Parent project ID, for nested projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Position among siblings.
    #[serde(default)]
    pub order: i64,
    /// Number of comments on the project.
    #[serde(default)]
    pub comment_count: i64,
    /// Whether the project is shared.
    #[serde(default)]
    pub is_shared: bool,
    /// Whether the project is marked favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Whether this is the account's Inbox project.
    #[serde(default)]
    pub is_inbox_project: bool,
    /// Whether this is a team inbox.
    #[serde(default)]
    pub is_team_inbox: bool,
    /// Display style, `"list"` or `"board"`.
    #[serde(default)]
    pub view_style: String,
    /// Web URL of the project.
    #[serde(default)]
    pub url: String,
}

/// A section within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Server-assigned identifier.
    pub id: String,
    /// Owning project ID.
    #[serde(default)]
    pub project_id: String,
    /// Position within the project.
    #[serde(default)]
    pub order: i64,
    /// Section name.
    pub name: String,
}

/// A label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Server-assigned identifier.
    pub id: String,
    /// Label name.
    pub name: String,
    /// Color name.
    #[serde(default)]
    pub color: String,
    /// Position in the label list.
    #[serde(default)]
    pub order: i64,
    /// Whether the label is marked favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

/// A comment on a task or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Server-assigned identifier.
    pub id: String,
    /// Task the comment belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Project the comment belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Comment text.
    pub content: String,
    /// Posting timestamp, RFC 3339.
    #[serde(default)]
    pub posted_at: String,
}

/// A completed task, as returned by the completion-history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    /// Server-assigned identifier of the completion event.
    pub id: String,
    /// ID of the task that was completed.
    #[serde(default)]
    pub task_id: String,
    /// Task text at completion time.
    pub content: String,
    /// Owning project ID.
    #[serde(default)]
    pub project_id: String,
    /// Completion timestamp, RFC 3339.
    #[serde(default)]
    pub completed_at: String,
}

/// Response envelope of the completion-history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTasksResponse {
    /// Completed tasks, most recent first.
    pub items: Vec<CompletedTask>,
}

/// Parameters for creating a task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddTaskParams {
    /// Task text.
    pub content: String,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Natural-language due date, e.g. `"next monday 3pm"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    /// Fixed due date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// API-scale priority. `None` leaves the priority unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Target project ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Target section ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Parent task ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Label names to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Assignee user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Parameters for updating a task. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskParams {
    /// New task text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New natural-language due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    /// New fixed due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// New API-scale priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Replacement label set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// New assignee user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddProjectParams {
    /// Project name.
    pub name: String,
    /// Color name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether to mark the project favorite.
    #[serde(skip_serializing_if = "is_false")]
    pub is_favorite: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}
