//! Configuration types for salesq.
//!
//! [`Config::load`] layers, in order: the built-in defaults, an optional TOML
//! file (explicit path, else `$XDG_CONFIG_HOME/salesq/config.toml`), and
//! `SALESQ__SECTION__KEY` environment variables. [`Config::defaults`] returns
//! the built-in defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[dataset]
records     = 100
window_days = 120

[server]
bind         = "127.0.0.1:8000"
path         = "/mcp"
max_sessions = 256

[resource]
uri = "sales://dataset"
"#;

/// Largest dataset whose ids still fit `SALE-NNNN`.
pub const MAX_RECORDS: usize = 9999;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub resource: ResourceConfig,
}

/// `[dataset]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_records")]
    pub records: usize,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

fn default_records() -> usize { 100 }
fn default_window_days() -> u32 { 120 }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
            window_days: default_window_days(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_bind() -> String { "127.0.0.1:8000".to_string() }
fn default_path() -> String { "/mcp".to_string() }
fn default_max_sessions() -> usize { 256 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            path: default_path(),
            max_sessions: default_max_sessions(),
        }
    }
}

/// `[resource]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default = "default_resource_uri")]
    pub uri: String,
}

fn default_resource_uri() -> String { "sales://dataset".to_string() }

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            uri: default_resource_uri(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration, layered on top of the built-in defaults. A missing
    /// file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix("SALESQ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RECORDS).contains(&self.dataset.records) {
            return Err(ConfigError::RecordCount {
                value: self.dataset.records,
                max: MAX_RECORDS,
            });
        }
        if self.dataset.window_days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.resource.uri.is_empty() {
            return Err(ConfigError::EmptyResourceUri);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("salesq")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
