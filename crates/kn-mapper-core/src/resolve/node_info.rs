//! Node classification, dispatch and record assembly.
//!
//! A batch is homogeneous: either every identifier is a gene (resolved via
//! the gene cascade) or every identifier is a property (already canonical).
//! When the caller does not say which, the store's `stable::<id>::type`
//! records vote; a split vote fails the batch.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::keys::StoreKey;
use crate::traits::KeyValueStore;
use crate::types::{parse_node_type, CanonicalId, LookupContext, NodeRecord, NodeType};

use super::NodeMapper;

impl<S: KeyValueStore> NodeMapper<S> {
    /// Infer the node type of a batch from the store.
    ///
    /// Identifiers without a type record, or with a type other than
    /// `Gene`/`Property`, do not vote. No votes at all means `Gene`.
    ///
    /// # Errors
    /// - `CoreError::AmbiguousNodeType` if both kinds are present
    /// - `CoreError::Store` if the bulk read fails
    pub fn classify<T: AsRef<str>>(&self, ids: &[T]) -> CoreResult<NodeType> {
        if ids.is_empty() {
            return Ok(NodeType::Gene);
        }

        let keys: Vec<StoreKey> = ids
            .iter()
            .map(|id| StoreKey::stable_type(id.as_ref()))
            .collect();
        let values = self.fetch(&keys)?;

        let mut property_count = 0;
        let mut gene_count = 0;
        for value in values.iter().flatten() {
            match value.parse::<NodeType>() {
                Ok(NodeType::Property) => property_count += 1,
                Ok(NodeType::Gene) => gene_count += 1,
                Err(_) => debug!(value = %value, "ignoring unknown stored node type"),
            }
        }

        debug!(property_count, gene_count, "node type vote");

        match (property_count, gene_count) {
            (p, g) if p > 0 && g > 0 => {
                warn!(
                    property_count = p,
                    gene_count = g,
                    "batch mixes property and gene identifiers"
                );
                Err(CoreError::AmbiguousNodeType {
                    property_count: p,
                    gene_count: g,
                })
            }
            (p, _) if p > 0 => Ok(NodeType::Property),
            _ => Ok(NodeType::Gene),
        }
    }

    /// Resolve a batch of raw identifiers to full output records.
    ///
    /// # Arguments
    /// * `ids` - Raw identifiers, possibly empty strings
    /// * `node_type` - `"Gene"`, `"Property"`, or `None`/`""` to infer
    /// * `hint` - Source authority hint, `None`/`""` if unknown
    /// * `taxon` - Species taxon id, `None`/`""` if unknown
    ///
    /// # Returns
    /// One `NodeRecord` per input identifier, in input order.
    ///
    /// # Errors
    /// - `CoreError::InvalidNodeType` for an unrecognised `node_type`
    /// - `CoreError::AmbiguousNodeType` if inference finds mixed kinds
    /// - `CoreError::Store` if any bulk read fails
    pub fn resolve<T: AsRef<str>>(
        &self,
        ids: &[T],
        node_type: Option<&str>,
        hint: Option<&str>,
        taxon: Option<&str>,
    ) -> CoreResult<Vec<NodeRecord>> {
        let node_type = parse_node_type(node_type)?;
        self.resolve_as(ids, node_type, LookupContext::new(hint, taxon))
    }

    /// Typed form of [`resolve`](Self::resolve).
    pub fn resolve_as<T: AsRef<str>>(
        &self,
        ids: &[T],
        node_type: Option<NodeType>,
        ctx: LookupContext,
    ) -> CoreResult<Vec<NodeRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let node_type = match node_type {
            Some(nt) => nt,
            None => self.classify(ids)?,
        };

        let canonical_ids = match node_type {
            NodeType::Gene => self.resolve_gene_in(ids, ctx)?,
            NodeType::Property => ids
                .iter()
                .map(|id| CanonicalId::stable(id.as_ref()))
                .collect(),
        };

        let metadata = self.describe(&canonical_ids)?;

        let records: Vec<NodeRecord> = ids
            .iter()
            .zip(canonical_ids)
            .zip(metadata)
            .map(|((raw, cid), meta)| NodeRecord::new(raw.as_ref(), cid, meta))
            .collect();

        let unmapped = records
            .iter()
            .filter(|r| r.canonical_id.stable_id().is_none())
            .count();
        info!(
            backend = self.store().backend_name(),
            node_type = %node_type,
            total = records.len(),
            unmapped,
            "node resolution complete"
        );
        Ok(records)
    }
}
