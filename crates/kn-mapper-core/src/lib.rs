//! KnowEnG Mapper Core Library
//!
//! Resolves external gene/protein identifiers to canonical stable ids and
//! decorates them with node metadata read from the KnowEnG mapping store.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`NodeType`, `CanonicalId`, `SourceHint`, `Taxon`, `NodeRecord`)
//! - Typed store keys (`StoreKey`) for every lookup pattern of the mapping store
//! - The `KeyValueStore` trait, the only capability the resolvers need
//! - The resolvers on `NodeMapper` (gene cascade, metadata lookup, classification)
//! - Error types and configuration structures
//!
//! # Example
//!
//! ```
//! use kn_mapper_core::keys::StoreKey;
//! use kn_mapper_core::types::{SourceHint, Taxon};
//!
//! let hint = SourceHint::normalize(Some("entrez")).unwrap();
//! let taxon = Taxon::normalize(Some("9606")).unwrap();
//! let key = StoreKey::triplet("brca1", &taxon, &hint);
//! assert_eq!(key.to_string(), "triplet::BRCA1::9606::ENTREZ");
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod resolve;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use crate::config::MapperConfig;
pub use crate::error::{CoreError, CoreResult};
pub use crate::keys::StoreKey;
pub use crate::resolve::NodeMapper;
pub use crate::traits::KeyValueStore;
pub use crate::types::{
    CanonicalId, NodeMetadata, NodeRecord, NodeType, SourceHint, Taxon, UNMAPPED_SENTINEL,
};
