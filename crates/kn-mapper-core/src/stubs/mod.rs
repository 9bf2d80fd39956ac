//! Stub implementations for testing.
//!
//! # TEST ONLY
//!
//! All stub exports are gated with `#[cfg(any(test, feature = "test-utils"))]`.
//! Downstream test crates enable them with:
//!
//! ```toml
//! [dev-dependencies]
//! kn-mapper-core = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! - [`InMemoryStore`]: HashMap-backed store that records every bulk query

#[cfg(any(test, feature = "test-utils"))]
mod in_memory_store;

#[cfg(any(test, feature = "test-utils"))]
pub use in_memory_store::InMemoryStore;
