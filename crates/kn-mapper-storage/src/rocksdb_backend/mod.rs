//! RocksDB snapshot backend.
//!
//! Serves lookups from an offline RocksDB copy of the mapping keyspace:
//! keys are the exact store key strings (`taxon::BRCA1::9606`), values are
//! UTF-8 strings. Opened read-only; snapshots are produced elsewhere.
//!
//! # Module Structure
//! - `config`: Configuration options (RocksDbConfig)
//! - `core`: RocksDbStore with open and batch-read operations

mod config;
mod core;

#[cfg(test)]
mod tests_core;

pub use self::config::{RocksDbConfig, DEFAULT_CACHE_SIZE, DEFAULT_MAX_OPEN_FILES};
pub use self::core::RocksDbStore;
