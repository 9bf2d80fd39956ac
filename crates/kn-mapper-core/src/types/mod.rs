//! Domain types for identifier resolution.
//!
//! - [`NodeType`]: Gene vs Property, decided once per batch
//! - [`SourceHint`] / [`Taxon`]: optional disambiguation context
//! - [`CanonicalId`]: a stable id, a store marker, or the unmapped sentinel
//! - [`NodeMetadata`] / [`NodeRecord`]: the per-identifier output

mod canonical;
mod context;
mod node_type;
mod record;

pub use canonical::{CanonicalId, UNMAPPED_PREFIX, UNMAPPED_SENTINEL};
pub use context::{LookupContext, SourceHint, Taxon};
pub use node_type::{parse_node_type, NodeType};
pub use record::{NodeMetadata, NodeRecord, METADATA_TYPE_DEFAULT};
