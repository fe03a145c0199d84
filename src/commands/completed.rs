//! `todoist completed` command: completion history.

use crate::cli::{Cli, CompletedArgs};
use crate::output::Formatter;

/// Execute the `completed` command.
///
/// # Errors
///
/// Returns an error string when project resolution, the history call,
/// or output fails.
pub async fn run(cli: &Cli, args: &CompletedArgs) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let project_id = match &args.project {
        Some(name) => Some(client.find_project(name).await.map_err(|e| e.to_string())?.id),
        None => None,
    };

    let response = client
        .get_completed_tasks(
            project_id.as_deref(),
            args.since.as_deref(),
            args.until.as_deref(),
            args.limit,
        )
        .await
        .map_err(|e| e.to_string())?;

    out.write_completed(&response).map_err(|e| e.to_string())
}
