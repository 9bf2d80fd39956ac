//! Gene resolution cascade.
//!
//! Four passes, most specific first. Each pass only queries slots that are
//! still unmapped, in one bulk read, so an earlier match is never
//! overridden:
//!
//! 1. `Triplet` when hint and taxon are both known
//! 2. `Taxon` when taxon is known
//! 3. `Hint` when hint is known
//! 4. `Unique` only when taxon is unknown; a global key is the only safe
//!    source without species context

use tracing::{debug, info};

use crate::error::CoreResult;
use crate::keys::StoreKey;
use crate::traits::KeyValueStore;
use crate::types::{CanonicalId, LookupContext};

use super::NodeMapper;

/// One lookup strategy of the gene cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPass {
    Triplet,
    Taxon,
    Hint,
    Unique,
}

impl LookupPass {
    /// Fixed precedence order.
    pub const ORDER: [LookupPass; 4] = [
        LookupPass::Triplet,
        LookupPass::Taxon,
        LookupPass::Hint,
        LookupPass::Unique,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LookupPass::Triplet => "triplet",
            LookupPass::Taxon => "taxon",
            LookupPass::Hint => "hint",
            LookupPass::Unique => "unique",
        }
    }

    /// Whether this pass runs for the given context.
    pub fn applies(&self, ctx: &LookupContext) -> bool {
        match self {
            LookupPass::Triplet => ctx.hint.is_some() && ctx.taxon.is_some(),
            LookupPass::Taxon => ctx.taxon.is_some(),
            LookupPass::Hint => ctx.hint.is_some(),
            LookupPass::Unique => ctx.taxon.is_none(),
        }
    }

    /// Passes that run for `ctx`, in precedence order.
    pub fn applicable(ctx: &LookupContext) -> Vec<LookupPass> {
        Self::ORDER
            .into_iter()
            .filter(|pass| pass.applies(ctx))
            .collect()
    }

    /// Store key for `raw_id`; `None` when the pass does not apply.
    pub fn key_for(&self, raw_id: &str, ctx: &LookupContext) -> Option<StoreKey> {
        match (self, &ctx.taxon, &ctx.hint) {
            (LookupPass::Triplet, Some(taxon), Some(hint)) => {
                Some(StoreKey::triplet(raw_id, taxon, hint))
            }
            (LookupPass::Taxon, Some(taxon), _) => Some(StoreKey::taxon(raw_id, taxon)),
            (LookupPass::Hint, _, Some(hint)) => Some(StoreKey::hint(raw_id, hint)),
            (LookupPass::Unique, None, _) => Some(StoreKey::unique(raw_id)),
            _ => None,
        }
    }
}

impl<S: KeyValueStore> NodeMapper<S> {
    /// Resolve raw gene identifiers to canonical ids.
    ///
    /// `hint` and `taxon` are normalized here (empty means unknown), and
    /// UniProt hint spellings are folded onto `UNIPROT_GN`.
    ///
    /// # Returns
    /// One `CanonicalId` per input, same order. Identifiers no pass could
    /// resolve are `CanonicalId::Unmapped`.
    ///
    /// # Errors
    /// - `CoreError::Store` if a bulk read fails
    pub fn resolve_gene<T: AsRef<str>>(
        &self,
        ids: &[T],
        hint: Option<&str>,
        taxon: Option<&str>,
    ) -> CoreResult<Vec<CanonicalId>> {
        self.resolve_gene_in(ids, LookupContext::new(hint, taxon))
    }

    /// Same as [`resolve_gene`](Self::resolve_gene) with an already
    /// normalized context.
    pub fn resolve_gene_in<T: AsRef<str>>(
        &self,
        ids: &[T],
        ctx: LookupContext,
    ) -> CoreResult<Vec<CanonicalId>> {
        let ctx = ctx.with_folded_hint();
        let mut resolved = vec![CanonicalId::Unmapped; ids.len()];

        for pass in LookupPass::applicable(&ctx) {
            self.fill_pass(pass, ids, &ctx, &mut resolved)?;
        }

        let mapped = resolved.iter().filter(|c| c.stable_id().is_some()).count();
        info!(
            total = ids.len(),
            mapped,
            hint = ctx.hint.as_ref().map(|h| h.as_str()),
            taxon = ctx.taxon.as_ref().map(|t| t.as_str()),
            "gene resolution complete"
        );
        Ok(resolved)
    }

    /// Run one pass over the still-unmapped slots. Returns slots filled.
    fn fill_pass<T: AsRef<str>>(
        &self,
        pass: LookupPass,
        ids: &[T],
        ctx: &LookupContext,
        resolved: &mut [CanonicalId],
    ) -> CoreResult<usize> {
        let (slots, keys): (Vec<usize>, Vec<StoreKey>) = resolved
            .iter()
            .enumerate()
            .filter(|(_, cid)| cid.is_unmapped())
            .filter_map(|(slot, _)| pass.key_for(ids[slot].as_ref(), ctx).map(|key| (slot, key)))
            .unzip();

        if slots.is_empty() {
            debug!(pass = pass.name(), "no unmapped slots left, skipping pass");
            return Ok(0);
        }

        let values = self.fetch(&keys)?;
        let mut filled = 0;
        for (slot, value) in slots.iter().zip(values) {
            if let Some(value) = value {
                resolved[*slot] = CanonicalId::from_store(value);
                filled += 1;
            }
        }

        debug!(
            pass = pass.name(),
            queried = slots.len(),
            filled,
            "gene lookup pass"
        );
        Ok(filled)
    }
}
