//! Redis storage backend.
//!
//! The KnowEnG mapping store is a plain Redis keyspace of string values.
//! Every bulk read is a single `MGET`, which returns values in request
//! order with nil for absent keys.
//!
//! # Module Structure
//! - `config`: Connection info built from `RedisSettings`
//! - `core`: `RedisStore` with connect and bulk-read operations

mod config;
mod core;

pub use self::config::{connection_info, endpoint};
pub use self::core::RedisStore;
