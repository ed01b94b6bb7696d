use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/surf-coffee/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("surf-coffee").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The menu has at least one category, and no category is empty
    /// - Product ids are unique across the whole menu
    /// - Every product has a positive price
    pub fn validate(&self) -> Result<(), ConfigError> {
        let categories = self.menu.categories();
        if categories.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one menu category must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in categories {
            if category.products.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Menu category '{}' has no products", category.id),
                });
            }
            for product in &category.products {
                if !seen.insert(product.id.as_str()) {
                    return Err(ConfigError::ValidationError {
                        message: format!("Product '{}' appears more than once", product.id),
                    });
                }
                if product.price == 0 {
                    return Err(ConfigError::ValidationError {
                        message: format!("Product '{}' must have a positive price", product.id),
                    });
                }
            }
        }

        Ok(())
    }
}
