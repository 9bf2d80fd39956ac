//! Canonical (stable) identifier outcome of resolution.

use serde::{Serialize, Serializer};
use std::fmt;

/// Literal written for identifiers that could not be resolved.
pub const UNMAPPED_SENTINEL: &str = "unmapped-none";

/// Prefix the mapping store uses for its own non-mapping markers
/// (e.g. `unmapped-many` for ids that match several genes).
pub const UNMAPPED_PREFIX: &str = "unmapped";

/// Result of resolving one raw identifier.
///
/// Carried as a typed variant through the pipeline; the sentinel string only
/// appears when rendering output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CanonicalId {
    /// A store-assigned stable identifier.
    Stable(String),
    /// The store answered with an `unmapped*` marker. Rendered verbatim,
    /// never looked up as a stable id, and final for the gene cascade.
    Rejected(String),
    /// No mapping found under the supplied hint/taxon context.
    #[default]
    Unmapped,
}

impl CanonicalId {
    pub fn stable(id: impl Into<String>) -> Self {
        CanonicalId::Stable(id.into())
    }

    /// Classify a canonical id value read from the store.
    pub fn from_store(value: String) -> Self {
        if value.starts_with(UNMAPPED_PREFIX) {
            CanonicalId::Rejected(value)
        } else {
            CanonicalId::Stable(value)
        }
    }

    /// True only while no lookup pass has answered for this slot.
    pub fn is_unmapped(&self) -> bool {
        matches!(self, CanonicalId::Unmapped)
    }

    /// The stable id, if resolved. `None` for both unmapped forms.
    pub fn stable_id(&self) -> Option<&str> {
        match self {
            CanonicalId::Stable(id) => Some(id),
            CanonicalId::Rejected(_) | CanonicalId::Unmapped => None,
        }
    }

    /// Output form: the stable id, the store marker, or [`UNMAPPED_SENTINEL`].
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalId::Stable(id) | CanonicalId::Rejected(id) => id,
            CanonicalId::Unmapped => UNMAPPED_SENTINEL,
        }
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CanonicalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
