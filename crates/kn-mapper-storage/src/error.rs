//! Storage error types.
//!
//! Errors are designed for fail-fast debugging with descriptive messages.
//! The backends never retry; every failure reaches the caller.

use kn_mapper_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// RocksDB snapshot failed to open.
    #[error("Failed to open database at '{path}': {message}")]
    OpenFailed {
        /// The path where database open was attempted
        path: String,
        /// The underlying error message from RocksDB
        message: String,
    },

    /// Could not establish a connection to the Redis store.
    #[error("Failed to connect to {endpoint}: {message}")]
    ConnectionFailed {
        /// host:port/db of the store (password redacted)
        endpoint: String,
        /// The underlying error message from the client
        message: String,
    },

    /// Bulk read failed.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// A stored value could not be decoded as UTF-8.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend settings are missing or inconsistent.
    #[error("Storage configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for StorageError {
    fn from(e: redis::RedisError) -> Self {
        StorageError::ReadFailed(e.to_string())
    }
}

impl From<rocksdb::Error> for StorageError {
    fn from(e: rocksdb::Error) -> Self {
        StorageError::ReadFailed(e.to_string())
    }
}

impl From<StorageError> for CoreError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Config(msg) => CoreError::ConfigError(msg),
            other => CoreError::Store(other.to_string()),
        }
    }
}

/// Convenient Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
