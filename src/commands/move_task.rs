//! `todoist move` command.

use crate::cli::{Cli, MoveArgs};
use crate::output::Formatter;

/// Execute the `move` command.
///
/// A section target is resolved within the task's current project, so
/// the task is fetched first; a project target resolves by name
/// directly.
///
/// # Errors
///
/// Returns an error string when neither target is given, resolution
/// fails, or the move call fails.
pub async fn run(cli: &Cli, args: &MoveArgs) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);

    if args.section.is_none() && args.project.is_none() {
        return Err("must specify either --section or --project".to_owned());
    }

    let client = super::api_client()?;

    let mut section_id = None;
    if let Some(section) = &args.section {
        let task = client
            .get_task(&args.task_id)
            .await
            .map_err(|e| format!("failed to get task: {e}"))?;
        let found = client
            .find_section(&task.project_id, section)
            .await
            .map_err(|e| e.to_string())?;
        section_id = Some(found.id);
    }

    let mut project_id = None;
    if let Some(project) = &args.project {
        let found = client.find_project(project).await.map_err(|e| e.to_string())?;
        project_id = Some(found.id);
    }

    client
        .move_task(&args.task_id, section_id.as_deref(), project_id.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    let message = if let Some(section) = &args.section {
        format!("Moved task to section: {section}")
    } else {
        format!("Moved task to project: {}", args.project.as_deref().unwrap_or_default())
    };
    out.write_success(&message).map_err(|e| e.to_string())
}
