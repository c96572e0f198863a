use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::reindex::ReindexLayout;

/// Global configuration loaded from `~/.config/discoverer/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscovererConfig {
    /// Root used when no root is given on the command line. `~` is expanded.
    /// If missing, the user's home directory is used.
    pub default_root: Option<String>,
    /// Directory under the root holding one subdirectory per capture config.
    pub configs_dir: String,
    /// Directory under the root receiving summaries.
    pub results_dir: String,
    /// Site list file name inside each config subdirectory.
    pub site_list_file: String,
    /// Capture archive file name inside each config subdirectory.
    pub archive_file: String,
}

impl Default for DiscovererConfig {
    fn default() -> Self {
        Self {
            default_root: None,
            configs_dir: "webgrab".to_string(),
            results_dir: "discoverer".to_string(),
            site_list_file: "config.json".to_string(),
            archive_file: "cache.zip".to_string(),
        }
    }
}

impl DiscovererConfig {
    /// Resolve the root directory: the explicit argument, else `default_root`, else `~`.
    pub fn resolve_root(&self, arg: Option<&str>) -> Result<PathBuf> {
        let raw = arg.or(self.default_root.as_deref()).unwrap_or("~");
        expand_tilde(raw)
    }

    /// Paths the reindex run reads from and writes to, below `root`.
    pub fn layout(&self, root: &Path) -> ReindexLayout {
        ReindexLayout {
            configs_dir: root.join(&self.configs_dir),
            results_dir: root.join(&self.results_dir),
            site_list_file: self.site_list_file.clone(),
            archive_file: self.archive_file.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("discoverer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<DiscovererConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DiscovererConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DiscovererConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DiscovererConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Expands a leading `~` (alone or followed by `/`) to the home directory.
pub fn expand_tilde(raw: &str) -> Result<PathBuf> {
    let rest = match raw.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(raw)),
    };
    let home = directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .context("cannot determine home directory for `~` expansion")?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}
