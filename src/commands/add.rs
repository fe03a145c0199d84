//! `todoist add` command.

use crate::api::types::{convert_priority, AddTaskParams};
use crate::cli::{AddArgs, Cli};
use crate::output::Formatter;

/// Execute the `add` command.
///
/// # Errors
///
/// Returns an error string when name resolution, the create call, or
/// output fails.
pub async fn run(cli: &Cli, args: &AddArgs) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let mut params = AddTaskParams {
        content: args.content.join(" "),
        description: args.description.clone(),
        due_string: args.due.clone(),
        priority: args.priority.map(convert_priority),
        labels: args.labels.clone(),
        ..AddTaskParams::default()
    };

    if let Some(project) = &args.project {
        let project = client.find_project(project).await.map_err(|e| e.to_string())?;
        if let Some(section) = &args.section {
            let section =
                client.find_section(&project.id, section).await.map_err(|e| e.to_string())?;
            params.section_id = Some(section.id);
        }
        params.project_id = Some(project.id);
    }

    let task = client.add_task(&params).await.map_err(|e| e.to_string())?;
    out.write_task(&task).map_err(|e| e.to_string())
}
