//! `todoist update` command.

use crate::api::types::{convert_priority, UpdateTaskParams};
use crate::cli::{Cli, UpdateArgs};
use crate::output::Formatter;

/// Execute the `update` command.
///
/// # Errors
///
/// Returns an error string when the update call or output fails.
pub async fn run(cli: &Cli, args: &UpdateArgs) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let params = UpdateTaskParams {
        content: args.content.clone(),
        description: args.description.clone(),
        due_string: args.due.clone(),
        priority: args.priority.map(convert_priority),
        labels: args.labels.clone(),
        ..UpdateTaskParams::default()
    };

    let task = client.update_task(&args.task_id, &params).await.map_err(|e| e.to_string())?;
    out.write_task(&task).map_err(|e| e.to_string())
}
