//! Core library entry for the `todoist` CLI.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Parses arguments, wires up diagnostics, and dispatches to the
/// selected command, racing it against Ctrl-C so an interrupt aborts
/// in-flight requests, retry waits, and enrichment workers.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dotenvy::dotenv().ok();

    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };

    init_tracing(cli.debug);

    tokio::select! {
        result = commands::dispatch(&cli) => result,
        _ = tokio::signal::ctrl_c() => Err("interrupted".to_owned()),
    }
}

/// Installs a stderr subscriber at debug level when `--debug` is set.
///
/// Request tracing must never affect command behavior, so installation
/// failures (e.g. a subscriber already set in tests) are ignored.
fn init_tracing(debug: bool) {
    if !debug {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("todoist_cli=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
