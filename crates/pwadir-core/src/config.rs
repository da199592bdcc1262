use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::DEFAULT_TRACKING_PREFIX;

/// Global configuration loaded from `~/.config/pwadir/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwadirConfig {
    /// Query parameter prefixes stripped from start URLs (matched case-insensitively).
    #[serde(default = "default_tracking_prefixes")]
    pub tracking_param_prefixes: Vec<String>,
    /// Optional tracing filter directive; `RUST_LOG` still takes precedence.
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_tracking_prefixes() -> Vec<String> {
    vec![DEFAULT_TRACKING_PREFIX.to_string()]
}

impl Default for PwadirConfig {
    fn default() -> Self {
        Self {
            tracking_param_prefixes: default_tracking_prefixes(),
            log_filter: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pwadir")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PwadirConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PwadirConfig> {
    if !path.exists() {
        let default_cfg = PwadirConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PwadirConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
