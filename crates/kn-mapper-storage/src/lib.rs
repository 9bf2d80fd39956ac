//! KnowEnG Mapper Storage Layer
//!
//! Concrete [`KeyValueStore`] backends for the mapping store.
//!
//! # Architecture
//! - `redis_backend`: live Redis store, one `MGET` per bulk read
//! - `rocksdb_backend`: read-only RocksDB snapshot of the same key space
//! - `error`: storage error types
//!
//! Both backends are read-only from the resolvers' point of view.

pub mod error;
pub mod redis_backend;
pub mod rocksdb_backend;

use kn_mapper_core::config::{StoreBackend, StoreConfig};
use kn_mapper_core::KeyValueStore;
use tracing::info;

pub use error::{StorageError, StorageResult};
pub use redis_backend::{connection_info, RedisStore};
pub use rocksdb_backend::{RocksDbConfig, RocksDbStore};

/// Open the backend selected by `config.backend`.
///
/// # Errors
/// - `StorageError::ConnectionFailed` if Redis cannot be reached
/// - `StorageError::OpenFailed` if the RocksDB snapshot cannot be opened
/// - `StorageError::Config` if the selected backend is missing settings
pub fn open_store(config: &StoreConfig) -> StorageResult<Box<dyn KeyValueStore>> {
    info!(backend = %config.backend, "opening mapping store");
    match config.backend {
        StoreBackend::Redis => Ok(Box::new(RedisStore::connect(&config.redis)?)),
        StoreBackend::RocksDb => {
            let path = config.rocksdb.path.as_ref().ok_or_else(|| {
                StorageError::Config("store.rocksdb.path is not set".to_string())
            })?;
            let rocks_config = RocksDbConfig::from(&config.rocksdb);
            Ok(Box::new(RocksDbStore::open_with_config(path, rocks_config)?))
        }
    }
}
