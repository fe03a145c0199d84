//! `todoist labels` command and its `add` subcommand.

use crate::cli::{Cli, LabelsAction};
use crate::output::Formatter;

/// Execute the `labels` command or one of its subcommands.
///
/// # Errors
///
/// Returns an error string when the API call or output fails.
pub async fn run(cli: &Cli, action: Option<&LabelsAction>) -> Result<(), String> {
    match action {
        Some(LabelsAction::Add { name, color }) => add(cli, name, color.as_deref()).await,
        None => list(cli).await,
    }
}

async fn list(cli: &Cli) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let labels = client.get_labels().await.map_err(|e| e.to_string())?;
    out.write_labels(&labels).map_err(|e| e.to_string())
}

async fn add(cli: &Cli, name: &str, color: Option<&str>) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let client = super::api_client()?;

    let label = client.add_label(name, color).await.map_err(|e| e.to_string())?;

    if cli.json {
        return out.json(&label).map_err(|e| e.to_string());
    }
    out.write_success(&format!("Created label: @{}", label.name)).map_err(|e| e.to_string())
}
