//! Runtime configuration.
//!
//! Layered, lowest precedence first: built-in defaults, the TOML file given
//! with `--config`, then `UF_API_*` environment variables (nested keys joined
//! with `__`, e.g. `UF_API_DATABASE__PATH`).

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub api:      ApiConfig,
  pub database: DatabaseConfig,
  pub log:      LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  pub host:                 String,
  pub port:                 u16,
  pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
  /// Default level for the `tracing` filter; `RUST_LOG` overrides it.
  pub level: String,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("api.host", "0.0.0.0")?
      .set_default("api.port", 42000_i64)?
      .set_default("api.request_timeout_secs", 30_i64)?
      .set_default("database.path", "frisbee.db")?
      .set_default("log.level", "info")?
      .add_source(File::from(path).required(false))
      .add_source(
        Environment::with_prefix("UF_API")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.api.host, self.api.port)
  }

  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.api.request_timeout_secs)
  }
}
