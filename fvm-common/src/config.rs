//! Bootstrap configuration
//!
//! Services read a small TOML file at startup. Nothing here changes while
//! running; restart to pick up edits.
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (and their environment fallbacks)
//! 2. TOML configuration file
//! 3. Built-in defaults
//!
//! A missing configuration file is not an error: the defaults apply and
//! [`Config::source`] is `None`. A file that exists but does not parse is
//! an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// Default HTTP port for the travel service
pub const DEFAULT_PORT: u16 = 5730;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Catalog JSON file replacing the embedded catalog (optional)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a configuration file; `None` if it does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml(&text)?;
                info!("Loaded configuration from {}", path.display());
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Platform configuration file location (`<config dir>/fvm/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fvm").join("config.toml"))
}

/// Command-line configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` serves the embedded catalog
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    /// File the settings came from; `None` when running on defaults
    pub source: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from overrides, the TOML file and defaults
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let path = overrides.config_path.clone().or_else(default_config_path);

        let loaded = match &path {
            Some(path) => TomlConfig::load_optional(path)?,
            None => None,
        };

        let config = match loaded {
            Some(toml_config) => Self {
                source: path,
                ..Self::merge(toml_config, overrides)
            },
            None => {
                warn!("No configuration file found, using defaults");
                Self::merge(TomlConfig::default(), overrides)
            }
        };
        Ok(config)
    }

    /// Apply overrides on top of a loaded TOML configuration
    pub fn merge(toml_config: TomlConfig, overrides: ConfigOverrides) -> Self {
        Self {
            host: overrides.host.unwrap_or(toml_config.host),
            port: overrides.port.unwrap_or(toml_config.port),
            catalog_path: overrides.catalog_path.or(toml_config.catalog_path),
            log_level: overrides.log_level.unwrap_or(toml_config.logging.level),
            source: None,
        }
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(default_port(), 5730);
    }

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_overrides_win() {
        let toml_config = TomlConfig {
            port: 8000,
            catalog_path: Some(PathBuf::from("/srv/catalog.json")),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            port: Some(9000),
            ..Default::default()
        };

        let config = Config::merge(toml_config, overrides);

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
