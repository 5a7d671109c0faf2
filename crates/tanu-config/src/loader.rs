//! Configuration loader with multi-source merging

use crate::{ConfigError, StudioConfig};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILE: &str = "tanu.toml";
const LOCAL_CONFIG_FILE: &str = "tanu.local.toml";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    env_vars: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "TANU".to_string(),
            env_vars: None,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "TANU")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read environment overrides from `vars` instead of the process
    /// environment. Prefix and separators still apply.
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<StudioConfig> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = StudioConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Project config, then 3. local overrides
        for name in [PROJECT_CONFIG_FILE, LOCAL_CONFIG_FILE] {
            if let Some(contents) = read_optional(&self.project_dir.join(name))? {
                builder = builder.add_source(config::File::from_str(
                    &contents,
                    config::FileFormat::Toml,
                ));
            }
        }

        // 4. Environment variables (TANU_SITE__BIND_ADDRESS, ...)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(self.env_vars.clone()),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut studio_config: StudioConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        studio_config.resolve_paths(&self.project_dir);
        studio_config.validate()?;

        Ok(studio_config)
    }

}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .with_env_prefix("TANU_TEST_DEFAULTS")
            .load()
            .expect("Failed to load config");

        assert_eq!(config.api.bind_address, "127.0.0.1:3000");
        assert_eq!(config.api.environment, "development");
        assert_eq!(config.site.bind_address, "127.0.0.1:5173");
        assert_eq!(config.site.public_dir, temp_dir.path().join("public"));
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("tanu.toml"),
            r#"
[api]
bind_address = "0.0.0.0:4000"
environment = "staging"

[site]
public_dir = "/srv/tanu/public"
"#,
        )
        .expect("Failed to write config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("TANU_TEST_PROJECT")
            .load()
            .expect("Failed to load config");

        assert_eq!(config.api.bind_address, "0.0.0.0:4000");
        assert_eq!(config.api.environment, "staging");
        assert_eq!(config.site.public_dir, PathBuf::from("/srv/tanu/public"));
        // Untouched keys keep their defaults
        assert_eq!(config.site.bind_address, "127.0.0.1:5173");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("tanu.toml"),
            "[site]\nbind_address = \"127.0.0.1:8080\"\n",
        )
        .expect("Failed to write project config");
        fs::write(
            project_dir.join("tanu.local.toml"),
            "[site]\nbind_address = \"127.0.0.1:9999\"\n",
        )
        .expect("Failed to write local config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("TANU_TEST_LOCAL")
            .load()
            .expect("Failed to load config");

        assert_eq!(config.site.bind_address, "127.0.0.1:9999");
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("tanu.toml"),
            "[api]\nbind_address = \"not-an-address\"\n",
        )
        .expect("Failed to write config");

        let result = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .with_env_prefix("TANU_TEST_INVALID")
            .load();

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_every_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("tanu.toml"),
            "[api]\nenvironment = \"staging\"\n\n[site]\nbind_address = \"127.0.0.1:8080\"\n",
        )
        .expect("Failed to write project config");
        fs::write(
            project_dir.join("tanu.local.toml"),
            "[site]\nbind_address = \"127.0.0.1:9999\"\n",
        )
        .expect("Failed to write local config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_vars([
                ("TANU_SITE__BIND_ADDRESS", "0.0.0.0:8080"),
                ("TANU_API__ENVIRONMENT", "production"),
            ])
            .load()
            .expect("Failed to load config");

        assert_eq!(config.site.bind_address, "0.0.0.0:8080");
        assert_eq!(config.api.environment, "production");
        // Keys absent from the environment keep their file or default value
        assert_eq!(config.api.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_env_ignores_other_prefixes() {
        let temp_dir = tempdir().expect("Failed to create temp dir");

        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .with_env_vars([
                ("OTHER_API__ENVIRONMENT", "production"),
                ("TANUAPI__ENVIRONMENT", "production"),
            ])
            .load()
            .expect("Failed to load config");

        assert_eq!(config.api.environment, "development");
    }

    #[test]
    fn test_invalid_env_address_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");

        let result = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .with_env_vars([("TANU_API__BIND_ADDRESS", "nowhere")])
            .load();

        assert!(result.is_err());
    }
}
