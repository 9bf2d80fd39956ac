//! Node metadata lookup for resolved canonical ids.

use tracing::debug;

use crate::error::CoreResult;
use crate::keys::StoreKey;
use crate::traits::KeyValueStore;
use crate::types::{CanonicalId, NodeMetadata};

use super::NodeMapper;

/// Metadata attribute stored under `stable::<id>::<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Type,
    Alias,
    Description,
}

impl MetadataField {
    /// Lookup order; one bulk read per field.
    pub const ALL: [MetadataField; 3] = [
        MetadataField::Type,
        MetadataField::Alias,
        MetadataField::Description,
    ];

    pub fn key(&self, stable_id: &str) -> StoreKey {
        match self {
            MetadataField::Type => StoreKey::stable_type(stable_id),
            MetadataField::Alias => StoreKey::stable_alias(stable_id),
            MetadataField::Description => StoreKey::stable_desc(stable_id),
        }
    }

    fn assign(&self, metadata: &mut NodeMetadata, value: String) {
        match self {
            MetadataField::Type => metadata.node_type = value,
            MetadataField::Alias => metadata.alias = value,
            MetadataField::Description => metadata.description = value,
        }
    }
}

impl<S: KeyValueStore> NodeMapper<S> {
    /// Fetch type, alias and description for each canonical id.
    ///
    /// Slots start at [`NodeMetadata::defaults_for`]; only `Stable` ids are
    /// queried, and any store miss keeps the default. When every id is
    /// unmapped no store call is made at all.
    ///
    /// # Errors
    /// - `CoreError::Store` if a bulk read fails
    pub fn describe(&self, canonical_ids: &[CanonicalId]) -> CoreResult<Vec<NodeMetadata>> {
        let mut metadata: Vec<NodeMetadata> = canonical_ids
            .iter()
            .map(NodeMetadata::defaults_for)
            .collect();

        let (slots, stable_ids): (Vec<usize>, Vec<&str>) = canonical_ids
            .iter()
            .enumerate()
            .filter_map(|(slot, cid)| cid.stable_id().map(|id| (slot, id)))
            .unzip();

        if slots.is_empty() {
            debug!(total = canonical_ids.len(), "all ids unmapped, skipping metadata lookup");
            return Ok(metadata);
        }

        for field in MetadataField::ALL {
            let keys: Vec<StoreKey> = stable_ids.iter().map(|id| field.key(id)).collect();
            let values = self.fetch(&keys)?;
            let mut found = 0;
            for (slot, value) in slots.iter().zip(values) {
                if let Some(value) = value {
                    field.assign(&mut metadata[*slot], value);
                    found += 1;
                }
            }
            debug!(field = ?field, queried = slots.len(), found, "metadata lookup");
        }

        Ok(metadata)
    }
}
