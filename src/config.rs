//! Credential storage: environment variable or persisted JSON config.
//!
//! The environment token has highest precedence; the config file at
//! `~/.todoist-cli/config.json` is the durable fallback. Core code treats
//! this module as an opaque provider: load returns a token or a typed
//! not-configured failure, save persists durably.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that short-circuits credential loading.
pub const TOKEN_ENV_VAR: &str = "TODOIST_API_TOKEN";

const CONFIG_DIR_NAME: &str = ".todoist-cli";
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Todoist API token.
    pub api_token: String,
}

/// Failures loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No environment token and no config file on disk.
    #[error("not configured. Run 'todoist auth' or set {TOKEN_ENV_VAR}")]
    NotConfigured,
    /// The config file exists but holds no token.
    #[error("no API token configured. Run 'todoist auth'")]
    EmptyToken,
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Read(#[source] io::Error),
    /// The config file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),
    /// The config could not be serialized.
    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),
    /// The config file or its directory could not be written.
    #[error("failed to write config: {0}")]
    Write(#[source] io::Error),
}

/// Directory holding the config file (`~/.todoist-cli`).
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(CONFIG_DIR_NAME)
}

/// Full path of the config file.
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Loads configuration, preferring the environment token over the file.
///
/// # Errors
///
/// Returns [`ConfigError::NotConfigured`] when neither source provides a
/// token, and read/parse failures for a broken config file.
pub fn load() -> Result<Config, ConfigError> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.is_empty() {
            return Ok(Config { api_token: token });
        }
    }
    load_file(&config_path())
}

/// Returns the API token from the environment or stored config.
///
/// # Errors
///
/// Propagates any [`ConfigError`] from [`load`].
pub fn load_token() -> Result<String, ConfigError> {
    load().map(|config| config.api_token)
}

/// Persists configuration to disk (0700 directory, 0600 file on unix).
///
/// # Errors
///
/// Returns a [`ConfigError`] when the directory or file cannot be written.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    save_to(&config_dir(), config)
}

fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotConfigured)
        }
        Err(err) => return Err(ConfigError::Read(err)),
    };
    let config: Config = serde_json::from_str(&data).map_err(ConfigError::Parse)?;
    if config.api_token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    Ok(config)
}

fn save_to(dir: &Path, config: &Config) -> Result<(), ConfigError> {
    fs::create_dir_all(dir).map_err(ConfigError::Write)?;
    let data = serde_json::to_string_pretty(config).map_err(ConfigError::Encode)?;
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, data).map_err(ConfigError::Write)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
            .map_err(ConfigError::Write)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(ConfigError::Write)?;
    }

    Ok(())
}
