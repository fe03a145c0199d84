//! `todoist sections` command and its `add` subcommand.

use crate::cli::{Cli, SectionsAction};
use crate::output::Formatter;

/// Execute the `sections` command or one of its subcommands.
///
/// # Errors
///
/// Returns an error string when project resolution, the API call, or
/// output fails.
pub async fn run(
    cli: &Cli,
    project: Option<&str>,
    action: Option<&SectionsAction>,
) -> Result<(), String> {
    match action {
        Some(SectionsAction::Add { name, project }) => add(cli, name, project).await,
        None => list(cli, project).await,
    }
}

async fn list(cli: &Cli, project: Option<&str>) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let project_id = match project {
        Some(name) => Some(client.find_project(name).await.map_err(|e| e.to_string())?.id),
        None => None,
    };

    let sections =
        client.get_sections(project_id.as_deref()).await.map_err(|e| e.to_string())?;
    out.write_sections(&sections).map_err(|e| e.to_string())
}

async fn add(cli: &Cli, name: &str, project: &str) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let project = client.find_project(project).await.map_err(|e| e.to_string())?;
    let section = client.add_section(name, &project.id).await.map_err(|e| e.to_string())?;

    if cli.json {
        return out.json(&section).map_err(|e| e.to_string());
    }
    out.write_success(&format!("Created section: {}", section.name)).map_err(|e| e.to_string())
}
