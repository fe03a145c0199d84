//! Command dispatch and handlers.

pub mod add;
pub mod auth;
pub mod comment;
pub mod complete;
pub mod completed;
pub mod delete;
pub mod labels;
pub mod move_task;
pub mod projects;
pub mod search;
pub mod sections;
pub mod tasks;
pub mod update;
pub mod view;

use crate::api::Client;
use crate::cli::{Cli, Command};
use crate::config;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Auth { token, action } => auth::run(cli, token.as_deref(), action.as_ref()).await,
        Command::Tasks(args) => tasks::run(cli, args).await,
        Command::Add(args) => add::run(cli, args).await,
        Command::Update(args) => update::run(cli, args).await,
        Command::Complete { task_id } => complete::run(cli, task_id).await,
        Command::Reopen { task_id } => complete::run_reopen(cli, task_id).await,
        Command::Delete { task_id, force } => delete::run(cli, task_id, *force).await,
        Command::View { task_id } => view::run(cli, task_id).await,
        Command::Search { query } => search::run(cli, query).await,
        Command::MoveTask(args) => move_task::run(cli, args).await,
        Command::Projects { action } => projects::run(cli, action.as_ref()).await,
        Command::Sections { project, action } => {
            sections::run(cli, project.as_deref(), action.as_ref()).await
        }
        Command::Labels { action } => labels::run(cli, action.as_ref()).await,
        Command::Comment { task_id, message } => comment::run(cli, task_id, message).await,
        Command::Completed(args) => completed::run(cli, args).await,
    }
}

/// Builds an API client from stored credentials.
pub(crate) fn api_client() -> Result<Client, String> {
    let token = config::load_token().map_err(|e| e.to_string())?;
    Client::new(&token).map_err(|e| e.to_string())
}
