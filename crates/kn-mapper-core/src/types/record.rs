//! Per-identifier output records.

use serde::Serialize;

use super::canonical::CanonicalId;

/// Type reported for nodes with no `stable::<id>::type` record.
pub const METADATA_TYPE_DEFAULT: &str = "None";

/// Descriptive metadata of a canonical node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeMetadata {
    #[serde(rename = "type")]
    pub node_type: String,
    pub alias: String,
    pub description: String,
}

impl NodeMetadata {
    /// Defaults used when the store has nothing: type `"None"`, alias and
    /// description equal to the canonical id text.
    pub fn defaults_for(canonical: &CanonicalId) -> Self {
        Self {
            node_type: METADATA_TYPE_DEFAULT.to_string(),
            alias: canonical.as_str().to_string(),
            description: canonical.as_str().to_string(),
        }
    }
}

/// One output row: raw identifier, canonical id, type, alias, description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub raw_id: String,
    pub canonical_id: CanonicalId,
    #[serde(flatten)]
    pub metadata: NodeMetadata,
}

impl NodeRecord {
    pub fn new(raw_id: impl Into<String>, canonical_id: CanonicalId, metadata: NodeMetadata) -> Self {
        Self {
            raw_id: raw_id.into(),
            canonical_id,
            metadata,
        }
    }

    /// The five output columns, in order.
    pub fn columns(&self) -> [&str; 5] {
        [
            self.raw_id.as_str(),
            self.canonical_id.as_str(),
            self.metadata.node_type.as_str(),
            self.metadata.alias.as_str(),
            self.metadata.description.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_unmapped() {
        let meta = NodeMetadata::defaults_for(&CanonicalId::Unmapped);
        assert_eq!(meta.node_type, "None");
        assert_eq!(meta.alias, "unmapped-none");
        assert_eq!(meta.description, "unmapped-none");
    }

    #[test]
    fn test_columns_order() {
        let cid = CanonicalId::stable("ENSG001");
        let record = NodeRecord::new(
            "BRCA1",
            cid.clone(),
            NodeMetadata {
                node_type: "Gene".into(),
                alias: "BRCA1_ALIAS".into(),
                description: "ENSG001".into(),
            },
        );
        assert_eq!(
            record.columns(),
            ["BRCA1", "ENSG001", "Gene", "BRCA1_ALIAS", "ENSG001"]
        );
    }

    #[test]
    fn test_record_json_shape() {
        let record = NodeRecord::new(
            "X",
            CanonicalId::Unmapped,
            NodeMetadata::defaults_for(&CanonicalId::Unmapped),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["raw_id"], "X");
        assert_eq!(value["canonical_id"], "unmapped-none");
        assert_eq!(value["type"], "None");
        assert_eq!(value["alias"], "unmapped-none");
    }
}
