//! Configuration management for the Tanu Videography Studio servers
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (TANU_* prefix, `__` between sections)
//! 2. tanu.local.toml (gitignored, local overrides)
//! 3. tanu.toml (git-tracked, project config)
//! 4. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::ConfigLoader;

/// Main studio configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub api: ApiConfig,
    pub site: SiteConfig,
}

/// Content server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    /// Reported as `serverInfo.environment` by `/api/data`.
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr("api.bind_address", &self.bind_address)
    }
}

/// Website settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub bind_address: String,
    pub public_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5173".to_string(),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr("site.bind_address", &self.bind_address)
    }
}

fn parse_addr(key: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::ValidationError(format!("{key} is not a socket address: {value}")))
}

impl StudioConfig {
    /// Load configuration from the current directory
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Checks every address before any server tries to bind it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.socket_addr()?;
        self.site.socket_addr()?;
        if self.api.environment.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.environment must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve relative paths against the project directory
    fn resolve_paths(&mut self, project_dir: &Path) {
        if self.site.public_dir.is_relative() {
            self.site.public_dir = project_dir.join(&self.site.public_dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StudioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.socket_addr().unwrap().port(), 3000);
        assert_eq!(config.site.socket_addr().unwrap().port(), 5173);
    }

    #[test]
    fn test_rejects_bad_address() {
        let mut config = StudioConfig::default();
        config.site.bind_address = "localhost".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.bind_address"));
    }

    #[test]
    fn test_rejects_blank_environment() {
        let mut config = StudioConfig::default();
        config.api.environment = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shipped_project_config_parses() {
        let shipped: StudioConfig =
            toml::from_str(include_str!("../../../tanu.toml")).expect("tanu.toml should parse");
        assert!(shipped.validate().is_ok());
    }
}
