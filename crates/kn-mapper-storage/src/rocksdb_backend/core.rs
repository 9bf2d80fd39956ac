//! Core RocksDbStore struct and batch-read operations.

use rocksdb::{BlockBasedOptions, Cache, Options, DB};
use std::path::Path;
use tracing::{debug, info};

use kn_mapper_core::{CoreResult, KeyValueStore, StoreKey};

use super::config::RocksDbConfig;
use crate::error::{StorageError, StorageResult};

/// Read-only RocksDB snapshot of the mapping store.
///
/// # Thread Safety
/// RocksDB's `DB` type is internally thread-safe for concurrent reads.
/// This struct can be shared across threads via `Arc<RocksDbStore>`.
///
/// # Example
/// ```
/// use kn_mapper_storage::{RocksDbStore, StorageError};
///
/// # fn main() -> Result<(), StorageError> {
/// # let dir = tempfile::TempDir::new().map_err(|e| StorageError::Config(e.to_string()))?;
/// # rocksdb::DB::open_default(dir.path())?.put("unique::BRCA1", "ENSG00000012048")?;
/// let store = RocksDbStore::open(dir.path())?;
/// let values = store.get_many(&["unique::BRCA1", "unique::NOPE"])?;
/// assert_eq!(values, vec![Some("ENSG00000012048".to_string()), None]);
/// # Ok(())
/// # }
/// ```
pub struct RocksDbStore {
    /// The RocksDB database instance.
    db: DB,
    /// Shared block cache (kept alive for DB lifetime).
    #[allow(dead_code)]
    cache: Cache,
    /// Database path for reference.
    path: String,
}

impl RocksDbStore {
    /// Open a snapshot at `path` with default configuration.
    ///
    /// # Returns
    /// * `Ok(RocksDbStore)` - Successfully opened database
    /// * `Err(StorageError::OpenFailed)` - Missing directory or not a RocksDB database
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::open_with_config(path, RocksDbConfig::default())
    }

    /// Open a snapshot with custom configuration.
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: RocksDbConfig,
    ) -> StorageResult<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let cache = Cache::new_lru_cache(config.block_cache_size);

        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_block_cache(&cache);
        block_opts.set_bloom_filter(10.0, false);

        let mut db_opts = Options::default();
        db_opts.set_max_open_files(config.max_open_files);
        db_opts.set_block_based_table_factory(&block_opts);

        let db = DB::open_for_read_only(&db_opts, &path_str, config.error_if_log_file_exist)
            .map_err(|e| StorageError::OpenFailed {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path_str, "opened rocksdb mapping snapshot (read-only)");
        Ok(Self {
            db,
            cache,
            path: path_str,
        })
    }

    /// Get the database path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieves multiple values in a single batch operation.
    ///
    /// Returns a Vec in the same order as `keys`; `None` for absent keys.
    ///
    /// # Errors
    /// * `StorageError::ReadFailed` - RocksDB batch read error
    /// * `StorageError::Serialization` - A stored value is not UTF-8
    pub fn get_many<K: AsRef<str>>(&self, keys: &[K]) -> StorageResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.db.multi_get(keys.iter().map(|k| k.as_ref().as_bytes()));

        let mut values = Vec::with_capacity(keys.len());
        for (key, result) in keys.iter().zip(results) {
            match result {
                Ok(Some(bytes)) => {
                    let value = String::from_utf8(bytes).map_err(|e| {
                        StorageError::Serialization(format!(
                            "value of '{}' is not UTF-8: {}",
                            key.as_ref(),
                            e
                        ))
                    })?;
                    values.push(Some(value));
                }
                Ok(None) => values.push(None),
                Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
            }
        }

        debug!(
            requested = keys.len(),
            found = values.iter().filter(|v| v.is_some()).count(),
            "rocksdb multi_get"
        );
        Ok(values)
    }
}

impl KeyValueStore for RocksDbStore {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        let rendered: Vec<String> = keys.iter().map(StoreKey::render).collect();
        Ok(self.get_many(&rendered)?)
    }

    fn backend_name(&self) -> &'static str {
        "rocksdb"
    }
}

impl std::fmt::Debug for RocksDbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocksDbStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// DB is automatically closed when RocksDbStore is dropped (RocksDB's Drop impl)
