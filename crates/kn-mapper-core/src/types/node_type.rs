//! Node type classification values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Kind of node an identifier refers to.
///
/// Property identifiers are already canonical and skip gene resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Gene,
    Property,
}

impl NodeType {
    /// The exact string the store records under `stable::<id>::type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Gene => "Gene",
            NodeType::Property => "Property",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gene" => Ok(NodeType::Gene),
            "Property" => Ok(NodeType::Property),
            other => Err(CoreError::InvalidNodeType {
                value: other.to_string(),
            }),
        }
    }
}

/// Parse an optional caller-supplied node type.
///
/// Absent and empty both mean "infer from the store".
///
/// # Errors
/// `CoreError::InvalidNodeType` for any other value than `Gene`/`Property`.
pub fn parse_node_type(value: Option<&str>) -> CoreResult<Option<NodeType>> {
    match value {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("Gene".parse::<NodeType>().unwrap(), NodeType::Gene);
        assert_eq!("Property".parse::<NodeType>().unwrap(), NodeType::Property);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "gene".parse::<NodeType>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidNodeType { ref value } if value == "gene"));
    }

    #[test]
    fn test_parse_optional_empty_means_unspecified() {
        assert_eq!(parse_node_type(None).unwrap(), None);
        assert_eq!(parse_node_type(Some("")).unwrap(), None);
        assert_eq!(parse_node_type(Some("Gene")).unwrap(), Some(NodeType::Gene));
        assert!(parse_node_type(Some("Protein")).is_err());
    }

    #[test]
    fn test_display_roundtrips_store_value() {
        for nt in [NodeType::Gene, NodeType::Property] {
            assert_eq!(nt.to_string().parse::<NodeType>().unwrap(), nt);
        }
    }
}
