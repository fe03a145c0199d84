//! `todoist delete` command.

use std::io::{self, BufRead, Write};

use crate::cli::Cli;
use crate::output::Formatter;

/// Execute the `delete` command.
///
/// Fetches the task first to show what will be deleted, then asks for
/// confirmation unless `--force` is set or output is JSON.
///
/// # Errors
///
/// Returns an error string when the fetch, the delete call, or output
/// fails.
pub async fn run(cli: &Cli, task_id: &str, force: bool) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let task = client.get_task(task_id).await.map_err(|e| e.to_string())?;

    if !force && !cli.json && !confirm(&task.content)? {
        return out.write_success("Cancelled").map_err(|e| e.to_string());
    }

    client.delete_task(task_id).await.map_err(|e| e.to_string())?;
    out.write_success(&format!("Deleted: {}", task.content)).map_err(|e| e.to_string())
}

fn confirm(content: &str) -> Result<bool, String> {
    print!("Delete task: {content}\nThis cannot be undone. Continue? [y/N] ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).map_err(|e| e.to_string())?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
