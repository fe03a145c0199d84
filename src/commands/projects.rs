//! `todoist projects` command and its `add` subcommand.

use crate::api::types::AddProjectParams;
use crate::cli::{Cli, ProjectsAction};
use crate::output::Formatter;

/// Execute the `projects` command or one of its subcommands.
///
/// # Errors
///
/// Returns an error string when the API call or output fails.
pub async fn run(cli: &Cli, action: Option<&ProjectsAction>) -> Result<(), String> {
    match action {
        Some(ProjectsAction::Add { name, color, favorite }) => {
            add(cli, name, color.as_deref(), *favorite).await
        }
        None => list(cli).await,
    }
}

async fn list(cli: &Cli) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let projects = client.get_projects().await.map_err(|e| e.to_string())?;
    out.write_projects(&projects).map_err(|e| e.to_string())
}

async fn add(cli: &Cli, name: &str, color: Option<&str>, favorite: bool) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let params = AddProjectParams {
        name: name.to_owned(),
        color: color.map(str::to_owned),
        is_favorite: favorite,
    };
    let project = client.add_project(&params).await.map_err(|e| e.to_string())?;
    out.write_project(&project).map_err(|e| e.to_string())
}
