//! `todoist comment` command: view or add comments on a task.

use crate::cli::Cli;
use crate::output::Formatter;

/// Execute the `comment` command.
///
/// With a message, adds a comment; without one, lists the task's
/// comments.
///
/// # Errors
///
/// Returns an error string when the API call or output fails.
pub async fn run(cli: &Cli, task_id: &str, message: &[String]) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    if message.is_empty() {
        let comments =
            client.get_comments(Some(task_id), None).await.map_err(|e| e.to_string())?;
        return out.write_comments(&comments).map_err(|e| e.to_string());
    }

    let content = message.join(" ");
    let comment =
        client.add_comment(&content, Some(task_id), None).await.map_err(|e| e.to_string())?;

    if cli.json {
        return out.json(&comment).map_err(|e| e.to_string());
    }
    out.write_success("Comment added").map_err(|e| e.to_string())
}
