//! `todoist complete` and `todoist reopen` commands.

use crate::cli::Cli;
use crate::output::Formatter;

/// Execute the `complete` command.
///
/// Fetches the task first so the confirmation can echo what was
/// completed.
///
/// # Errors
///
/// Returns an error string when the fetch, the completion call, or
/// output fails.
pub async fn run(cli: &Cli, task_id: &str) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let task = client.get_task(task_id).await.map_err(|e| e.to_string())?;
    client.complete_task(task_id).await.map_err(|e| e.to_string())?;

    out.write_success(&format!("Completed: {}", task.content)).map_err(|e| e.to_string())
}

/// Execute the `reopen` command.
///
/// # Errors
///
/// Returns an error string when the reopen call or output fails.
pub async fn run_reopen(cli: &Cli, task_id: &str) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    client.reopen_task(task_id).await.map_err(|e| e.to_string())?;
    out.write_success("Task reopened").map_err(|e| e.to_string())
}
