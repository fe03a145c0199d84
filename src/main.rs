//! Binary entrypoint for the `todoist` CLI.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match todoist_cli::run(std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
