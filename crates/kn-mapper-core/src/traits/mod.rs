//! Core trait definitions.
//!
//! # Traits
//!
//! - [`KeyValueStore`]: bulk read access to the mapping store

mod kv_store;

pub use kv_store::{check_reply_len, KeyValueStore};
