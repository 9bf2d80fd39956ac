//! Disambiguation context: source hint and taxon.
//!
//! Callers pass hint/taxon as loose optional strings; empty and absent both
//! mean "unknown". Normalization happens here, once, at the boundary.

use std::fmt;

/// Hint values the store files under the `UNIPROT_GN` namespace.
const UNIPROT_SYNONYMS: &[&str] = &["UNIPROT", "UNIPROTKB"];

/// Store namespace for UniProt gene-name mappings.
pub const UNIPROT_GN: &str = "UNIPROT_GN";

/// Uppercased name of the identifier's source authority (e.g. `ENTREZ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceHint(String);

impl SourceHint {
    /// Normalize an optional raw hint. Empty or absent gives `None`.
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some("") => None,
            Some(s) => Some(SourceHint(s.to_uppercase())),
        }
    }

    /// Collapse UniProt spellings onto the store's `UNIPROT_GN` namespace.
    pub fn fold_synonyms(self) -> Self {
        if UNIPROT_SYNONYMS.contains(&self.0.as_str()) {
            SourceHint(UNIPROT_GN.to_string())
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Species taxon id, string-typed (numeric in practice, e.g. `9606`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Taxon(String);

impl Taxon {
    /// Normalize an optional raw taxon. Empty or absent gives `None`.
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some("") => None,
            Some(s) => Some(Taxon(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Taxon {
    fn from(id: u32) -> Self {
        Taxon(id.to_string())
    }
}

impl fmt::Display for Taxon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized hint + taxon pair used by the gene cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupContext {
    pub hint: Option<SourceHint>,
    pub taxon: Option<Taxon>,
}

impl LookupContext {
    /// Normalize raw caller input.
    pub fn new(hint: Option<&str>, taxon: Option<&str>) -> Self {
        Self {
            hint: SourceHint::normalize(hint),
            taxon: Taxon::normalize(taxon),
        }
    }

    /// Same context with the hint mapped onto its store namespace.
    pub fn with_folded_hint(self) -> Self {
        Self {
            hint: self.hint.map(SourceHint::fold_synonyms),
            taxon: self.taxon,
        }
    }
}
