use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser-like User-Agent; some servers reject requests from non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/47.0.2526.111 Safari/537.36";

/// Global configuration loaded from `~/.config/favicon/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaviconConfig {
    /// User-Agent header sent with every GET and HEAD.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_timeout() -> u64 {
    30
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            max_redirections: default_max_redirections(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("favicon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FaviconConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FaviconConfig::default();
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

/// Load configuration from a specific file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<FaviconConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: FaviconConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
