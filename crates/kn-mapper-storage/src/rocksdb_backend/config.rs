//! RocksDB snapshot configuration.

use kn_mapper_core::config::RocksDbSettings;

/// Default block cache size: 64MB.
pub const DEFAULT_CACHE_SIZE: usize = 64 * 1024 * 1024;

/// Default maximum open files.
pub const DEFAULT_MAX_OPEN_FILES: i32 = 1000;

/// Options applied when opening a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RocksDbConfig {
    /// Maximum open files (-1 for unlimited)
    pub max_open_files: i32,
    /// Shared LRU block cache size in bytes
    pub block_cache_size: usize,
    /// Fail if the snapshot still has an unflushed WAL
    pub error_if_log_file_exist: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            max_open_files: DEFAULT_MAX_OPEN_FILES,
            block_cache_size: DEFAULT_CACHE_SIZE,
            error_if_log_file_exist: false,
        }
    }
}

impl From<&RocksDbSettings> for RocksDbConfig {
    fn from(settings: &RocksDbSettings) -> Self {
        Self {
            max_open_files: settings.max_open_files,
            block_cache_size: settings.block_cache_size,
            ..Self::default()
        }
    }
}
