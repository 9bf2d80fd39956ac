//! Typed keys for the mapping store.
//!
//! # Key Format
//! | Pattern | Value | Used by |
//! |---------|-------|---------|
//! | `stable::<id>::type` | `Gene` / `Property` | classification, metadata |
//! | `stable::<id>::alias` | display alias | metadata |
//! | `stable::<id>::desc` | description | metadata |
//! | `triplet::<ID>::<taxon>::<hint>` | stable id | gene pass 1 |
//! | `taxon::<ID>::<taxon>` | stable id | gene pass 2 |
//! | `hint::<ID>::<hint>` | stable id | gene pass 3 |
//! | `unique::<ID>` | stable id | gene pass 4 |
//!
//! `<ID>` is the raw identifier uppercased; store keys for gene lookups are
//! case-normalized. `stable::` keys take the id verbatim.

use std::fmt;

use crate::types::{SourceHint, Taxon};

/// Segment separator in store keys.
pub const KEY_SEPARATOR: &str = "::";

/// One key of the mapping store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    StableType(String),
    StableAlias(String),
    StableDesc(String),
    Triplet {
        id: String,
        taxon: String,
        hint: String,
    },
    Taxon {
        id: String,
        taxon: String,
    },
    Hint {
        id: String,
        hint: String,
    },
    Unique(String),
}

impl StoreKey {
    /// `stable::<id>::type`
    pub fn stable_type(id: &str) -> Self {
        StoreKey::StableType(id.to_string())
    }

    /// `stable::<id>::alias`
    pub fn stable_alias(id: &str) -> Self {
        StoreKey::StableAlias(id.to_string())
    }

    /// `stable::<id>::desc`
    pub fn stable_desc(id: &str) -> Self {
        StoreKey::StableDesc(id.to_string())
    }

    /// `triplet::<ID>::<taxon>::<hint>`
    pub fn triplet(raw_id: &str, taxon: &Taxon, hint: &SourceHint) -> Self {
        StoreKey::Triplet {
            id: raw_id.to_uppercase(),
            taxon: taxon.as_str().to_string(),
            hint: hint.as_str().to_string(),
        }
    }

    /// `taxon::<ID>::<taxon>`
    pub fn taxon(raw_id: &str, taxon: &Taxon) -> Self {
        StoreKey::Taxon {
            id: raw_id.to_uppercase(),
            taxon: taxon.as_str().to_string(),
        }
    }

    /// `hint::<ID>::<hint>`
    pub fn hint(raw_id: &str, hint: &SourceHint) -> Self {
        StoreKey::Hint {
            id: raw_id.to_uppercase(),
            hint: hint.as_str().to_string(),
        }
    }

    /// `unique::<ID>`
    pub fn unique(raw_id: &str) -> Self {
        StoreKey::Unique(raw_id.to_uppercase())
    }

    /// Wire representation as sent to the store.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = KEY_SEPARATOR;
        match self {
            StoreKey::StableType(id) => write!(f, "stable{sep}{id}{sep}type"),
            StoreKey::StableAlias(id) => write!(f, "stable{sep}{id}{sep}alias"),
            StoreKey::StableDesc(id) => write!(f, "stable{sep}{id}{sep}desc"),
            StoreKey::Triplet { id, taxon, hint } => {
                write!(f, "triplet{sep}{id}{sep}{taxon}{sep}{hint}")
            }
            StoreKey::Taxon { id, taxon } => write!(f, "taxon{sep}{id}{sep}{taxon}"),
            StoreKey::Hint { id, hint } => write!(f, "hint{sep}{id}{sep}{hint}"),
            StoreKey::Unique(id) => write!(f, "unique{sep}{id}"),
        }
    }
}
