//! Output rendering: human-readable text or JSON envelopes.
//!
//! Every command writes either a human layout (with optional ANSI color)
//! or a `{success, data?, error?}` envelope, selected by the global
//! `--json` flag. The formatter is generic over its writer so rendering
//! is testable against byte buffers.

pub mod color;

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::api::types::{
    convert_priority, Comment, CompletedTasksResponse, Label, Project, Section, Task,
};
use color::{Color, ColorMode};

/// JSON wrapper distinguishing success from failure at the output
/// boundary.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Renders command results as human text or JSON envelopes.
pub struct Formatter<W> {
    w: W,
    as_json: bool,
    color: Color,
}

impl Formatter<io::Stdout> {
    /// Creates a formatter writing to stdout with automatic color
    /// detection.
    #[must_use]
    pub fn stdout(as_json: bool) -> Self {
        Self::new(io::stdout(), as_json, ColorMode::Auto)
    }
}

impl<W: Write> Formatter<W> {
    /// Creates a formatter over an arbitrary writer.
    #[must_use]
    pub fn new(w: W, as_json: bool, mode: ColorMode) -> Self {
        Self { w, as_json, color: Color::new(mode) }
    }

    /// Writes `data` wrapped in a success envelope.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn json<T: Serialize + ?Sized>(&mut self, data: &T) -> io::Result<()> {
        let envelope = Envelope { success: true, data: Some(data), error: None };
        let body = serde_json::to_string(&envelope)?;
        writeln!(self.w, "{body}")
    }

    /// Writes an error message, as a failure envelope in JSON mode.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_error(&mut self, message: &str) -> io::Result<()> {
        if self.as_json {
            let envelope: Envelope<()> =
                Envelope { success: false, data: None, error: Some(message.to_owned()) };
            let body = serde_json::to_string(&envelope)?;
            writeln!(self.w, "{body}")
        } else {
            writeln!(self.w, "Error: {message}")
        }
    }

    /// Writes a success message, as a `{message}` envelope in JSON mode.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_success(&mut self, message: &str) -> io::Result<()> {
        if self.as_json {
            let mut payload = HashMap::new();
            payload.insert("message", message);
            self.json(&payload)
        } else {
            writeln!(self.w, "{message}")
        }
    }

    /// Formats a task as `[p1] content (due) @labels`.
    #[must_use]
    pub fn format_task(&self, task: &Task) -> String {
        let mut parts = Vec::new();
        if let Some(label) = priority_label(task.priority) {
            parts.push(self.color.wrap(priority_color(task.priority), &format!("[{label}]")));
        }
        parts.push(task.content.clone());
        if let Some(due) = &task.due {
            let text = if due.string.is_empty() { &due.date } else { &due.string };
            parts.push(self.color.wrap(color::GRAY, &format!("({text})")));
        }
        if !task.labels.is_empty() {
            parts.push(self.color.wrap(color::CYAN, &format!("@{}", task.labels.join(" @"))));
        }
        parts.join(" ")
    }

    /// Formats a task as a single line prefixed by its ID.
    #[must_use]
    pub fn format_task_line(&self, task: &Task) -> String {
        format!("{}  {}", self.color.wrap(color::GRAY, &task.id), self.format_task(task))
    }

    /// Writes a task listing as an indented forest.
    ///
    /// Subtasks nest under their parent; a task whose parent is absent
    /// from the listing is shown as a root. Siblings are ordered by their
    /// `order` field.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_tasks(&mut self, tasks: &[Task]) -> io::Result<()> {
        if self.as_json {
            return self.json(tasks);
        }
        if tasks.is_empty() {
            return writeln!(self.w, "No tasks found.");
        }

        let ids: std::collections::HashSet<&str> =
            tasks.iter().map(|task| task.id.as_str()).collect();
        let mut children: HashMap<&str, Vec<&Task>> = HashMap::new();
        let mut roots: Vec<&Task> = Vec::new();
        for task in tasks {
            match task.parent_id.as_deref().filter(|parent| ids.contains(parent)) {
                Some(parent) => children.entry(parent).or_default().push(task),
                None => roots.push(task),
            }
        }
        roots.sort_by_key(|task| task.order);
        for siblings in children.values_mut() {
            siblings.sort_by_key(|task| task.order);
        }

        for root in &roots {
            self.write_task_tree(root, 0, &children)?;
        }
        Ok(())
    }

    fn write_task_tree(
        &mut self,
        task: &Task,
        level: usize,
        children: &HashMap<&str, Vec<&Task>>,
    ) -> io::Result<()> {
        writeln!(self.w, "{}{}", "  ".repeat(level), self.format_task_line(task))?;
        if let Some(kids) = children.get(task.id.as_str()) {
            for child in kids {
                self.write_task_tree(child, level + 1, children)?;
            }
        }
        Ok(())
    }

    /// Writes a flat task listing with descriptions and fetched comments.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_tasks_with_comments(
        &mut self,
        tasks: &[Task],
        comments: &HashMap<String, Vec<Comment>>,
    ) -> io::Result<()> {
        if tasks.is_empty() {
            return writeln!(self.w, "No tasks found.");
        }
        for (index, task) in tasks.iter().enumerate() {
            writeln!(self.w, "{}", self.format_task_line(task))?;
            if !task.description.is_empty() {
                writeln!(self.w, "    {}", self.color.wrap(color::GRAY, &task.description))?;
            }
            if let Some(found) = comments.get(&task.id).filter(|found| !found.is_empty()) {
                self.write_comment_block(found, 4)?;
            }
            if index < tasks.len() - 1 {
                writeln!(self.w)?;
            }
        }
        Ok(())
    }

    /// Writes a single task line plus its description.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_task(&mut self, task: &Task) -> io::Result<()> {
        if self.as_json {
            return self.json(task);
        }
        writeln!(self.w, "{}", self.format_task_line(task))?;
        if !task.description.is_empty() {
            writeln!(self.w, "    {}", self.color.wrap(color::GRAY, &task.description))?;
        }
        Ok(())
    }

    /// Writes the multi-line detail block for a single task.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_task_detail(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.w, "ID:       {}", task.id)?;
        writeln!(self.w, "Content:  {}", task.content)?;
        if !task.description.is_empty() {
            writeln!(self.w, "Notes:    {}", task.description)?;
        }
        if let Some(due) = &task.due {
            let text = if due.string.is_empty() { &due.date } else { &due.string };
            writeln!(self.w, "Due:      {text}")?;
        }
        if task.priority > 1 {
            writeln!(self.w, "Priority: p{}", convert_priority(task.priority))?;
        }
        if !task.labels.is_empty() {
            writeln!(self.w, "Labels:   @{}", task.labels.join(" @"))?;
        }
        writeln!(self.w, "URL:      {}", task.url)
    }

    /// Writes a single blank separator line.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.w)
    }

    /// Writes a `Comments (n):` block at the given indent.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_comment_block(&mut self, comments: &[Comment], indent: usize) -> io::Result<()> {
        let pad = " ".repeat(indent);
        writeln!(self.w, "{pad}Comments ({}):", comments.len())?;
        for comment in comments {
            writeln!(self.w, "{pad}  [{}] {}", short_date(&comment.posted_at), comment.content)?;
        }
        Ok(())
    }

    /// Writes a comment listing.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_comments(&mut self, comments: &[Comment]) -> io::Result<()> {
        if self.as_json {
            return self.json(comments);
        }
        if comments.is_empty() {
            return writeln!(self.w, "No comments found.");
        }
        for comment in comments {
            writeln!(
                self.w,
                "{}  {}",
                self.color.wrap(color::GRAY, &short_date(&comment.posted_at)),
                comment.content
            )?;
        }
        Ok(())
    }

    /// Formats a project with favorite/inbox markers.
    #[must_use]
    pub fn format_project(&self, project: &Project) -> String {
        let mut markers = Vec::new();
        if project.is_favorite {
            markers.push("*");
        }
        if project.is_inbox_project {
            markers.push("inbox");
        }
        if markers.is_empty() {
            project.name.clone()
        } else {
            format!(
                "{} {}",
                project.name,
                self.color.wrap(color::GRAY, &format!("[{}]", markers.join(", ")))
            )
        }
    }

    /// Writes a project listing.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_projects(&mut self, projects: &[Project]) -> io::Result<()> {
        if self.as_json {
            return self.json(projects);
        }
        if projects.is_empty() {
            return writeln!(self.w, "No projects found.");
        }
        for project in projects {
            writeln!(
                self.w,
                "{}  {}",
                self.color.wrap(color::GRAY, &project.id),
                self.format_project(project)
            )?;
        }
        Ok(())
    }

    /// Writes a single project.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_project(&mut self, project: &Project) -> io::Result<()> {
        if self.as_json {
            return self.json(project);
        }
        writeln!(
            self.w,
            "{}  {}",
            self.color.wrap(color::GRAY, &project.id),
            self.format_project(project)
        )
    }

    /// Writes a section listing.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_sections(&mut self, sections: &[Section]) -> io::Result<()> {
        if self.as_json {
            return self.json(sections);
        }
        if sections.is_empty() {
            return writeln!(self.w, "No sections found.");
        }
        for section in sections {
            writeln!(self.w, "{}  {}", self.color.wrap(color::GRAY, &section.id), section.name)?;
        }
        Ok(())
    }

    /// Writes a label listing.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_labels(&mut self, labels: &[Label]) -> io::Result<()> {
        if self.as_json {
            return self.json(labels);
        }
        if labels.is_empty() {
            return writeln!(self.w, "No labels found.");
        }
        for label in labels {
            writeln!(
                self.w,
                "{}  {}",
                self.color.wrap(color::GRAY, &label.id),
                self.color.wrap(color::CYAN, &format!("@{}", label.name))
            )?;
        }
        Ok(())
    }

    /// Writes the completion history.
    ///
    /// # Errors
    ///
    /// Returns an error when a write fails.
    pub fn write_completed(&mut self, response: &CompletedTasksResponse) -> io::Result<()> {
        if self.as_json {
            return self.json(response);
        }
        if response.items.is_empty() {
            return writeln!(self.w, "No completed tasks found.");
        }
        for item in &response.items {
            writeln!(
                self.w,
                "{}  {}",
                self.color.wrap(color::GRAY, &short_date(&item.completed_at)),
                self.color.wrap(color::STRIKE, &item.content)
            )?;
        }
        Ok(())
    }
}

/// Human label for an API-scale priority: `p1` for the most urgent down
/// to `p3`; the default priority has no label.
#[must_use]
pub fn priority_label(priority: u8) -> Option<&'static str> {
    match priority {
        4 => Some("p1"),
        3 => Some("p2"),
        2 => Some("p3"),
        _ => None,
    }
}

fn priority_color(priority: u8) -> &'static str {
    match priority {
        4 => color::RED,
        3 => color::YELLOW,
        2 => color::BLUE,
        _ => "",
    }
}

/// Trims a timestamp to its date part, tolerating non-RFC-3339 input.
fn short_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.get(..10).unwrap_or(timestamp).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Due;

    fn plain() -> Formatter<Vec<u8>> {
        Formatter::new(Vec::new(), false, ColorMode::Never)
    }

    fn rendered(formatter: Formatter<Vec<u8>>) -> String {
        String::from_utf8(formatter.w).unwrap()
    }

    fn task(id: &str, content: &str, parent: Option<&str>, order: i64) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "content": content,
            "parent_id": parent,
            "order": order,
        }))
        .unwrap()
    }

    #[test]
    fn tasks_render_as_an_indented_forest() {
        let tasks = vec![
            task("1", "root", None, 1),
            task("2", "child", Some("1"), 1),
            task("3", "grandchild", Some("2"), 1),
        ];

        let mut out = plain();
        out.write_tasks(&tasks).unwrap();

        assert_eq!(rendered(out), "1  root\n  2  child\n    3  grandchild\n");
    }

    #[test]
    fn orphaned_parent_references_become_roots() {
        let tasks = vec![task("2", "orphan", Some("missing"), 1)];

        let mut out = plain();
        out.write_tasks(&tasks).unwrap();

        assert_eq!(rendered(out), "2  orphan\n");
    }

    #[test]
    fn siblings_sort_by_order() {
        let tasks = vec![task("b", "second", None, 2), task("a", "first", None, 1)];

        let mut out = plain();
        out.write_tasks(&tasks).unwrap();

        assert_eq!(rendered(out), "a  first\nb  second\n");
    }

    #[test]
    fn format_task_shows_priority_due_and_labels() {
        let mut sample = task("1", "Call mom", None, 1);
        sample.priority = 4;
        sample.due = Some(Due {
            date: "2024-01-15".into(),
            string: "Jan 15".into(),
            datetime: None,
            is_recurring: false,
            timezone: None,
        });
        sample.labels = vec!["family".into(), "weekly".into()];

        let out = plain();
        assert_eq!(out.format_task(&sample), "[p1] Call mom (Jan 15) @family @weekly");
    }

    #[test]
    fn empty_listing_prints_a_notice() {
        let mut out = plain();
        out.write_tasks(&[]).unwrap();
        assert_eq!(rendered(out), "No tasks found.\n");
    }

    #[test]
    fn json_mode_wraps_data_in_a_success_envelope() {
        let mut out = Formatter::new(Vec::new(), true, ColorMode::Never);
        out.write_tasks(&[task("1", "root", None, 1)]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered(out)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"][0]["id"], "1");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn errors_become_a_failure_envelope_in_json_mode() {
        let mut out = Formatter::new(Vec::new(), true, ColorMode::Never);
        out.write_error("project not found: Errands").unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered(out)).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "project not found: Errands");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn task_detail_converts_priority_for_display() {
        let mut sample = task("9", "Ship release", None, 1);
        sample.priority = 3;
        sample.url = "https://todoist.com/task/9".into();

        let mut out = plain();
        out.write_task_detail(&sample).unwrap();

        let text = rendered(out);
        assert!(text.contains("Priority: p2"));
        assert!(text.contains("ID:       9"));
    }

    #[test]
    fn comment_dates_are_shortened() {
        let comments = vec![Comment {
            id: "c1".into(),
            task_id: Some("t1".into()),
            project_id: None,
            content: "done".into(),
            posted_at: "2024-01-15T10:30:00Z".into(),
        }];

        let mut out = plain();
        out.write_comments(&comments).unwrap();
        assert_eq!(rendered(out), "2024-01-15  done\n");
    }

    #[test]
    fn priority_labels_cover_the_urgent_range_only() {
        assert_eq!(priority_label(4), Some("p1"));
        assert_eq!(priority_label(3), Some("p2"));
        assert_eq!(priority_label(2), Some("p3"));
        assert_eq!(priority_label(1), None);
        assert_eq!(priority_label(0), None);
    }

    #[test]
    fn projects_render_markers() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Work",
            "is_favorite": true,
        }))
        .unwrap();

        let out = plain();
        assert_eq!(out.format_project(&project), "Work [*]");
    }
}
