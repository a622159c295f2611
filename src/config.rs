//! Configuration for a sync run.
//!
//! Values come from a config file (`--config`, or `nuclasses/config.*` under
//! the user config directory), then `NUCLASSES_*` environment variables,
//! then `DATABASE_URL` for the store.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::nuapi::NuApiConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://nuclasses.db?mode=rwc";

#[derive(Clone, Debug, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub db: DbConfig,
    pub nuapi: NuApiConfig,
}

impl AppConfig {
    /// Loads from `path`, or from the default location when `None`. The
    /// default file may be absent as long as the environment supplies the
    /// required keys.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match default_config_stem() {
                Some(stem) => builder.add_source(File::from(stem).required(false)),
                None => builder,
            },
        };

        builder = builder.add_source(
            Environment::with_prefix("NUCLASSES")
                .prefix_separator("_")
                .separator("__"),
        );

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("db.url", url)?;
        }

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

/// `<config dir>/nuclasses/config`, without extension so any supported
/// format is picked up.
pub fn default_config_stem() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nuclasses").join("config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[db]
url = "sqlite://catalog-test.db"

[nuapi]
key = "secret"
base_url = "http://localhost:9999"
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.nuapi.key, "secret");
        assert_eq!(config.nuapi.base_url, "http://localhost:9999");
        assert_eq!(config.nuapi.timeout_secs, crate::nuapi::DEFAULT_TIMEOUT_SECS);
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(config.db.url, "sqlite://catalog-test.db");
        }
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "nuapi:\n  key: abc").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.nuapi.key, "abc");
        assert_eq!(config.nuapi.base_url, crate::nuapi::DEFAULT_BASE_URL);
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(config.db.url, DEFAULT_DATABASE_URL);
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_key_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[db]\nurl = \"sqlite::memory:\"").unwrap();

        if std::env::var("NUCLASSES_NUAPI__KEY").is_err() {
            let result = AppConfig::load(Some(file.path()));
            assert!(matches!(result, Err(AppError::Config(_))));
        }
    }
}
