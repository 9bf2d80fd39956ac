//! Sub-configuration structures for kn-mapper components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CoreError;

/// Public KnowEnG mapping store.
pub const DEFAULT_REDIS_HOST: &str = "knowredis.knoweng.org";
pub const DEFAULT_REDIS_PORT: u16 = 6379;
pub const DEFAULT_REDIS_PASSWORD: &str = "KnowEnG";

/// Human (Homo sapiens).
pub const DEFAULT_TAXON: &str = "9606";

/// Which store implementation serves lookups.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Live Redis mapping store
    #[default]
    Redis,
    /// Read-only RocksDB snapshot of the same key space
    RocksDb,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Redis => f.write_str("redis"),
            StoreBackend::RocksDb => f.write_str("rocksdb"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "rocksdb" => Ok(StoreBackend::RocksDb),
            other => Err(CoreError::ConfigError(format!(
                "unknown store backend '{}' (expected 'redis' or 'rocksdb')",
                other
            ))),
        }
    }
}

/// Store selection and per-backend settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub redis: RedisSettings,
    #[serde(default)]
    pub rocksdb: RocksDbSettings,
}

/// Redis connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RedisSettings {
    #[serde(default = "default_redis_host")]
    pub host: String,

    #[serde(default = "default_redis_port")]
    pub port: u16,

    /// Password; `None` or empty connects without AUTH
    #[serde(default = "default_redis_password")]
    pub password: Option<String>,

    /// Logical database index
    #[serde(default)]
    pub db: i64,

    /// Connect timeout in seconds (0 = no timeout)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_redis_host() -> String {
    DEFAULT_REDIS_HOST.to_string()
}

fn default_redis_port() -> u16 {
    DEFAULT_REDIS_PORT
}

fn default_redis_password() -> Option<String> {
    Some(DEFAULT_REDIS_PASSWORD.to_string())
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: default_redis_host(),
            port: default_redis_port(),
            password: default_redis_password(),
            db: 0,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// RocksDB snapshot settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RocksDbSettings {
    /// Snapshot directory; required when backend = "rocksdb"
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_max_open_files")]
    pub max_open_files: i32,

    /// Block cache size in bytes (default: 64MB)
    #[serde(default = "default_block_cache_size")]
    pub block_cache_size: usize,
}

fn default_max_open_files() -> i32 {
    1000
}

fn default_block_cache_size() -> usize {
    64 * 1024 * 1024
}

impl Default for RocksDbSettings {
    fn default() -> Self {
        Self {
            path: None,
            max_open_files: default_max_open_files(),
            block_cache_size: default_block_cache_size(),
        }
    }
}

/// Default resolution context applied when the caller gives none.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LookupConfig {
    /// Source hint; unset by default
    #[serde(default)]
    pub default_hint: Option<String>,

    /// Taxon; empty string means unknown species
    #[serde(default = "default_taxon")]
    pub default_taxon: Option<String>,

    /// Forced node type ("Gene"/"Property"); unset means infer
    #[serde(default)]
    pub node_type: Option<String>,
}

fn default_taxon() -> Option<String> {
    Some(DEFAULT_TAXON.to_string())
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_hint: None,
            default_taxon: default_taxon(),
            node_type: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when neither -v nor RUST_LOG is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
