use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default marker printed by `parse` for empty components.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// User configuration loaded from `~/.config/funurl/config.toml`.
///
/// Every field is optional in the file; absent fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunUrlConfig {
    /// Marker shown by `parse` for components that are empty.
    pub missing_value: String,
    /// Optional `tracing` filter directive (e.g. "debug"); `RUST_LOG` wins when set.
    pub log_filter: Option<String>,
}

impl Default for FunUrlConfig {
    fn default() -> Self {
        Self {
            missing_value: DEFAULT_MISSING_VALUE.to_string(),
            log_filter: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("funurl")?;
    Ok(xdg_dirs.get_config_home().join("funurl").join("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults if no file exists.
pub fn load() -> Result<FunUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(FunUrlConfig::default());
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<FunUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FunUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
