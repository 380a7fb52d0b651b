use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorableConfig {
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durable_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_path: Option<String>,
}

impl StorableConfig {
    pub fn new(durable_path: PathBuf, session_path: PathBuf) -> Self {
        Self {
            storage: StorageSection {
                durable_path: Some(durable_path.to_string_lossy().to_string()),
                session_path: Some(session_path.to_string_lossy().to_string()),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_durable_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("durable.json"))
}

/// Session data lives in the runtime dir, which the OS clears at logout.
pub fn default_session_path() -> PathBuf {
    xdg_runtime_dir().join("session.json")
}

pub fn read_config(path: &Path) -> anyhow::Result<StorableConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if it exists; a missing file means all defaults.
pub fn load_config(path: &Path) -> anyhow::Result<StorableConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(StorableConfig::default())
    }
}

pub fn write_config(path: &Path, config: &StorableConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Some(value) = non_empty_env("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(value).join("storable"));
    }
    Ok(home_dir()?.join(".config").join("storable"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Some(value) = non_empty_env("XDG_DATA_HOME") {
        return Ok(PathBuf::from(value).join("storable"));
    }
    Ok(home_dir()?.join(".local").join("share").join("storable"))
}

pub fn xdg_runtime_dir() -> PathBuf {
    match non_empty_env("XDG_RUNTIME_DIR") {
        Some(value) => PathBuf::from(value).join("storable"),
        None => std::env::temp_dir().join("storable"),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
