//! `todoist view` command.

use crate::cli::Cli;
use crate::output::Formatter;

/// Execute the `view` command.
///
/// Shows the task detail block plus its comments. A failing comment
/// fetch is not fatal here: the task itself has already been shown.
///
/// # Errors
///
/// Returns an error string when the task fetch or output fails.
pub async fn run(cli: &Cli, task_id: &str) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let task = client.get_task(task_id).await.map_err(|e| e.to_string())?;

    if cli.json {
        return out.json(&task).map_err(|e| e.to_string());
    }

    out.write_task_detail(&task).map_err(|e| e.to_string())?;

    if let Ok(comments) = client.get_comments(Some(task_id), None).await {
        if !comments.is_empty() {
            out.blank_line().map_err(|e| e.to_string())?;
            out.write_comment_block(&comments, 0).map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
