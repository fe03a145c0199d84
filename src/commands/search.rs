//! `todoist search` command: client-side content search.

use crate::api::types::Task;
use crate::cli::Cli;
use crate::output::Formatter;

/// Execute the `search` command.
///
/// Fetches all active tasks and filters locally.
///
/// # Errors
///
/// Returns an error string when the listing call or output fails.
pub async fn run(cli: &Cli, query: &str) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let tasks = client.get_tasks(None, None).await.map_err(|e| e.to_string())?;
    let matches = matching_tasks(tasks, query);

    out.write_tasks(&matches).map_err(|e| e.to_string())
}

/// Keeps tasks whose content or description contains the query,
/// case-insensitively.
fn matching_tasks(tasks: Vec<Task>, query: &str) -> Vec<Task> {
    let needle = query.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| {
            task.content.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .collect()
}
