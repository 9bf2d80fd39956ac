//! Identifier resolution against the mapping store.
//!
//! [`NodeMapper`] owns a [`KeyValueStore`] handle and implements the three
//! resolution stages, one file each:
//!
//! - `gene`: ordered hint/taxon-aware cascade from raw id to stable id
//! - `describe`: type/alias/description lookup for resolved ids
//! - `node_info`: node-type classification, dispatch, record assembly
//!
//! Every stage issues a small fixed number of bulk reads and never writes.

mod describe;
mod gene;
mod node_info;


pub use describe::MetadataField;
pub use gene::LookupPass;

use tracing::trace;

use crate::error::CoreResult;
use crate::keys::StoreKey;
use crate::traits::{check_reply_len, KeyValueStore};

/// Resolver facade over a mapping store.
///
/// # Example
/// ```rust,ignore
/// let mapper = NodeMapper::new(store);
/// let records = mapper.resolve(&["BRCA1", "TP53"], None, None, Some("9606"))?;
/// ```
#[derive(Debug, Clone)]
pub struct NodeMapper<S> {
    store: S,
}

impl<S: KeyValueStore> NodeMapper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// One bulk read; the reply is guaranteed to line up with `keys`.
    fn fetch(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        trace!(
            backend = self.store.backend_name(),
            keys = keys.len(),
            "multi_get"
        );
        let values = self.store.multi_get(keys)?;
        check_reply_len(self.store.backend_name(), keys.len(), values)
    }
}
