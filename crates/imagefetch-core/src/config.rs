use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::allow_list::AllowList;
use crate::http::RequestOptions;

/// Browser-like user agent; the search endpoint alters or refuses output for bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/77.0.3865.90 Safari/537.36";

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Global configuration loaded from `~/.config/imagefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFetchConfig {
    /// Permitted image extensions (e.g. ".jpg"). Used as a text pre-filter and a sniffed-type gate;
    /// ".jpg" and ".jpeg" admit each other in the gate.
    pub extensions: Vec<String>,
    /// Images to save per keyword when `--limit` is not given.
    pub default_limit: usize,
    /// Root directory for per-keyword image folders, relative to the working directory.
    pub output_dir: PathBuf,
    /// Minimum pause between successive image downloads, in milliseconds.
    pub request_delay_ms: u64,
    /// Total timeout for one image GET, in milliseconds.
    pub image_timeout_ms: u64,
    /// Total timeout for the search page GET, in seconds.
    pub page_timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Image search endpoint; `q` and `tbm` are appended.
    pub search_endpoint: String,
}

impl Default for ImageFetchConfig {
    fn default() -> Self {
        Self {
            extensions: AllowList::default_extensions(),
            default_limit: 10,
            output_dir: PathBuf::from("images"),
            request_delay_ms: 1000,
            image_timeout_ms: 1000,
            page_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

impl ImageFetchConfig {
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(&self.extensions)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn page_request(&self) -> RequestOptions {
        RequestOptions {
            timeout: Duration::from_secs(self.page_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn image_request(&self) -> RequestOptions {
        RequestOptions {
            timeout: Duration::from_millis(self.image_timeout_ms),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Checks values that would otherwise fail deep inside a run.
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.search_endpoint)
            .with_context(|| format!("invalid search_endpoint: {}", self.search_endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("search_endpoint must be http or https: {}", self.search_endpoint);
        }
        if endpoint.query().is_some() {
            anyhow::bail!("search_endpoint must not carry a query: {}", self.search_endpoint);
        }
        if self.allow_list().is_empty() {
            anyhow::bail!("extensions must list at least one image extension");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imagefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImageFetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImageFetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImageFetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ImageFetchConfig::default();
        assert_eq!(cfg.default_limit, 10);
        assert_eq!(cfg.output_dir, PathBuf::from("images"));
        assert_eq!(cfg.request_delay(), Duration::from_secs(1));
        assert_eq!(cfg.image_request().timeout, Duration::from_secs(1));
        assert_eq!(
            cfg.extensions,
            vec![".jpg", ".png", ".ico", ".gif", ".jpeg"]
        );
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ImageFetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ImageFetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_limit, cfg.default_limit);
        assert_eq!(parsed.extensions, cfg.extensions);
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.search_endpoint, cfg.search_endpoint);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            extensions = ["png", ".WEBP"]
            default_limit = 3
            output_dir = "/tmp/pics"
            request_delay_ms = 0
            image_timeout_ms = 2500
            page_timeout_secs = 5
            user_agent = "test-agent"
            search_endpoint = "https://images.example.com/find"
        "#;
        let cfg: ImageFetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_limit, 3);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/pics"));
        assert_eq!(cfg.request_delay(), Duration::ZERO);
        assert_eq!(cfg.image_request().timeout, Duration::from_millis(2500));
        assert_eq!(cfg.page_request().user_agent, "test-agent");
        let allow = cfg.allow_list();
        assert!(allow.permits_extension(".png"));
        assert!(allow.permits_extension(".webp"));
        assert!(!allow.permits_extension(".jpg"));
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_endpoint_and_empty_allow_list() {
        let mut cfg = ImageFetchConfig::default();
        cfg.search_endpoint = "not a url".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = ImageFetchConfig::default();
        cfg.search_endpoint = "ftp://example.com/search".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = ImageFetchConfig::default();
        cfg.search_endpoint = "https://example.com/search?hl=en".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = ImageFetchConfig::default();
        cfg.extensions.clear();
        assert!(cfg.validate().is_err());
    }
}
