//! Configuration management
//!
//! Settings are read from a TOML file: `--config <path>` when given,
//! otherwise `~/.config/labelgrade/config.toml` (XDG standard). Every
//! section is optional and falls back to defaults, so an empty file (or no
//! file at all) reproduces the built-in rating policy.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::RatingPolicy;
use crate::paths;

/// Environment variable holding the labeling API key
pub const API_KEY_ENV: &str = "LABELGRADE_API_KEY";

/// Default labeling API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.scale.com/v1";

/// Errors raised while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("cannot access config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Policy values are inconsistent
    #[error("invalid rating policy: {0}")]
    Policy(String),
}

/// labelgrade configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rating worker threads (0 = one per CPU, 1 = sequential)
    pub workers: usize,
    /// Scoring thresholds and label sets
    pub policy: RatingPolicy,
    /// Image cache and output settings
    pub image: ImageConfig,
    /// Labeling API settings
    pub api: ApiConfig,
}

/// Image cache and output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Where downloaded originals are cached
    pub cache_dir: PathBuf,
    /// Where annotated images are written
    pub output_dir: PathBuf,
    /// Per-image download timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            cache_dir: paths::image_cache_dir(),
            output_dir: paths::output_dir(),
            timeout_secs: 30,
        }
    }
}

/// Labeling API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; task records live at `{base_url}/task/{id}`
    pub base_url: String,
    /// API key; the environment variable takes precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            key: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or from the default location
    ///
    /// A missing default file yields defaults; an explicitly requested file
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !required && !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = parse_at(&content, &path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config text and validate the policy
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_at(content, Path::new("<inline>"))
    }

    /// Write the commented default config to `path`
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        let io = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io)?;
        }
        fs::write(path, default_config_toml()).map_err(io)
    }

    /// API key from the environment, falling back to the config file
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api.key.clone())
    }
}

fn parse_at(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.policy.validate().map_err(ConfigError::Policy)?;
    Ok(config)
}

/// Commented default config, as written by `labelgrade init`
#[must_use]
pub fn default_config_toml() -> String {
    let body = toml::to_string_pretty(&Config::default()).unwrap_or_default();
    format!(
        "# labelgrade configuration\n\
         #\n\
         # Every value below is the built-in default; delete what you do not change.\n\
         # `workers` sets rating threads (0 = one per CPU, 1 = sequential).\n\
         # The API key is read from ${API_KEY_ENV} or from `key` under [api].\n\
         \n\
         {body}"
    )
}
