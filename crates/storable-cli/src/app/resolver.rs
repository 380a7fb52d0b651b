//! Path resolution for config and store files.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::Cli;
use crate::config::{default_config_path, default_durable_path, default_session_path, load_config};

/// Resolved locations of both store files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorePaths {
    pub durable: PathBuf,
    pub session: PathBuf,
}

/// Resolve the config file path, preferring `--config` / `STORABLE_CONFIG`.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(value) => Ok(PathBuf::from(value)),
        None => default_config_path(),
    }
}

/// Resolve store paths: flags and env first, then the config file, then defaults.
pub fn resolve_store_paths(cli: &Cli) -> anyhow::Result<StorePaths> {
    let config = load_config(&resolve_config_path(cli)?)?;

    let durable = match cli
        .durable_path
        .clone()
        .or(config.storage.durable_path)
    {
        Some(path) => PathBuf::from(path),
        None => default_durable_path()?,
    };
    let session = cli
        .session_path
        .clone()
        .or(config.storage.session_path)
        .map(PathBuf::from)
        .unwrap_or_else(default_session_path);

    Ok(StorePaths { durable, session })
}
