//! Subcommands.

pub mod config;
pub mod rename;

use std::path::{Path, PathBuf};

use fakren_core::FakrenConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fakren")
        .join("config.json")
}

/// Resolve the config file to use: the explicit path, else the default one.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration from `path`, falling back to defaults when it does not exist.
pub fn load_or_default(path: &Path) -> anyhow::Result<FakrenConfig> {
    if path.exists() {
        Ok(FakrenConfig::from_file(path)?)
    } else {
        Ok(FakrenConfig::default())
    }
}

/// Load the configuration for a run.
///
/// An explicit `--config` path must exist; the default path is optional.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<FakrenConfig> {
    match explicit {
        Some(path) => Ok(FakrenConfig::from_file(Path::new(path))?),
        None => load_or_default(&default_config_path()),
    }
}
