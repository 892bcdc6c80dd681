use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// API host used when neither the config file nor the environment sets one.
pub const DEFAULT_API_HOST: &str = "https://www.blog-keeper.com";

/// Environment variable that overrides `api_host` from the config file.
pub const API_HOST_ENV: &str = "BLOG_KEEPER_API_HOST";

/// Client configuration loaded from `~/.config/blog-keeper/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Blog Keeper API (parse and batch-download endpoints).
    #[serde(default = "default_api_host")]
    pub api_host: String,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
        }
    }
}

impl ClientConfig {
    /// Checks that `api_host` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_host)
            .with_context(|| format!("api_host {:?} is not a valid URL", self.api_host))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("api_host must be http or https, got {:?}", other),
        }
    }

    /// Applies an `api_host` override (normally from `BLOG_KEEPER_API_HOST`).
    ///
    /// Empty or unusable values are ignored with a warning and the current host is kept.
    pub fn apply_api_host_override(&mut self, value: Option<String>) {
        let Some(value) = value else { return };
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let candidate = ClientConfig {
            api_host: value.to_string(),
        };
        match candidate.validate() {
            Ok(()) => self.api_host = candidate.api_host,
            Err(e) => tracing::warn!(
                "ignoring {}={:?}: {:#}; using {}",
                API_HOST_ENV,
                value,
                e,
                self.api_host
            ),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blog-keeper")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists, with
/// `BLOG_KEEPER_API_HOST` applied on top.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    let env_value = match std::env::var(API_HOST_ENV) {
        Ok(v) => Some(v),
        Err(std::env::VarError::NotPresent) => None,
        Err(e) => {
            tracing::warn!("unable to read {}: {}; using configured host", API_HOST_ENV, e);
            None
        }
    };
    load_or_init_at(&path, env_value)
}

/// Load configuration from `path`, writing the default there if it is missing.
///
/// `api_host_override` is applied before validation, so a usable override
/// rescues a file whose `api_host` is invalid.
pub fn load_or_init_at(path: &Path, api_host_override: Option<String>) -> Result<ClientConfig> {
    let mut cfg = read_or_init(path)?;
    cfg.apply_api_host_override(api_host_override);
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

fn read_or_init(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ClientConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
