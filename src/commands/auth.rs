//! `todoist auth` command: token validation, storage, and status.

use std::io::{self, BufRead, Write};

use crate::api::Client;
use crate::cli::{AuthAction, Cli};
use crate::config::{self, Config};
use crate::output::Formatter;

/// Execute the `auth` command or one of its subcommands.
///
/// # Errors
///
/// Returns an error string when token validation, storage, or output
/// fails.
pub async fn run(cli: &Cli, token: Option<&str>, action: Option<&AuthAction>) -> Result<(), String> {
    match action {
        Some(AuthAction::Logout) => logout(cli),
        Some(AuthAction::Status) => status(cli),
        None => authenticate(cli, token).await,
    }
}

async fn authenticate(cli: &Cli, token: Option<&str>) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);

    let token = match token {
        Some(token) => token.to_owned(),
        None => prompt_for_token()?,
    };
    if token.is_empty() {
        return Err("token cannot be empty".to_owned());
    }

    // Validate the token with a harmless listing call before persisting.
    let client = Client::new(&token).map_err(|e| e.to_string())?;
    client.get_projects().await.map_err(|e| format!("invalid token: {e}"))?;

    config::save(&Config { api_token: token }).map_err(|e| e.to_string())?;
    out.write_success(&format!(
        "Authenticated successfully. Config saved to {}",
        config::config_path().display()
    ))
    .map_err(|e| e.to_string())
}

fn prompt_for_token() -> Result<String, String> {
    print!("Enter your Todoist API token: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| format!("failed to read token: {e}"))?;
    Ok(input.trim().to_owned())
}

fn logout(cli: &Cli) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    let path = config::config_path();

    match std::fs::remove_file(&path) {
        Ok(()) => out.write_success("Logged out successfully.").map_err(|e| e.to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            out.write_success("No credentials stored.").map_err(|e| e.to_string())
        }
        Err(err) => Err(format!("failed to remove config: {err}")),
    }
}

fn status(cli: &Cli) -> Result<(), String> {
    let mut out = Formatter::stdout(cli.json);
    match config::load() {
        Ok(_) => out.write_success("Authenticated").map_err(|e| e.to_string()),
        Err(err) => out.write_error(&err.to_string()).map_err(|e| e.to_string()),
    }
}
