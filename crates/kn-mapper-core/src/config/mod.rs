//! Configuration management for kn-mapper.

mod sub_configs;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{
    LoggingConfig, LookupConfig, RedisSettings, RocksDbSettings, StoreBackend, StoreConfig,
    DEFAULT_REDIS_HOST, DEFAULT_REDIS_PASSWORD, DEFAULT_REDIS_PORT, DEFAULT_TAXON,
};

/// Environment variable selecting the environment-specific config file.
pub const ENV_SELECTOR: &str = "KN_MAPPER_ENV";

/// Prefix for environment overrides (`KN_MAPPER__STORE__REDIS__HOST=...`).
pub const ENV_PREFIX: &str = "KN_MAPPER";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct MapperConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MapperConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{KN_MAPPER_ENV}.toml (environment-specific)
    /// 3. Environment variables with KN_MAPPER__ prefix
    pub fn load() -> CoreResult<Self> {
        let config = Self::load_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Same layering as [`load`](Self::load) without validation, for
    /// callers that still apply overrides.
    pub fn load_unvalidated() -> CoreResult<Self> {
        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without validation.
    pub fn parse_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        match self.store.backend {
            StoreBackend::Redis => {
                if self.store.redis.host.trim().is_empty() {
                    return Err(CoreError::ConfigError(
                        "store.redis.host must not be empty".into(),
                    ));
                }
                if self.store.redis.port == 0 {
                    return Err(CoreError::ConfigError(
                        "store.redis.port must be greater than 0".into(),
                    ));
                }
            }
            StoreBackend::RocksDb => {
                if self.store.rocksdb.path.is_none() {
                    return Err(CoreError::ConfigError(
                        "store.rocksdb.path is required when store.backend = \"rocksdb\"".into(),
                    ));
                }
            }
        }

        if self.store.rocksdb.max_open_files == 0 {
            return Err(CoreError::ConfigError(
                "store.rocksdb.max_open_files must not be 0 (use -1 for unlimited)".into(),
            ));
        }

        Ok(())
    }
}
