//! Error types for kn-mapper-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the resolvers, along with the [`CoreResult<T>`] type alias.
//!
//! Per-identifier store misses are NOT errors: they degrade to the
//! unmapped sentinel or to metadata defaults. Only batch-level problems
//! (classification, validation, transport) surface here.
//!
//! # Examples
//!
//! ```rust
//! use kn_mapper_core::CoreError;
//!
//! let error = CoreError::InvalidNodeType {
//!     value: "Protein".to_string(),
//! };
//! assert!(error.to_string().contains("Protein"));
//! ```

use thiserror::Error;

/// Top-level error type for kn-mapper-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Automatic node-type inference found both kinds in one batch.
    ///
    /// # When This Occurs
    ///
    /// - No explicit node type was given, and the store records at least one
    ///   identifier as `Property` and at least one as `Gene`
    ///
    /// Fatal for the whole batch: no partial output is produced.
    #[error(
        "Mixture of property and gene nodes: {property_count} property, {gene_count} gene"
    )]
    AmbiguousNodeType {
        /// Number of identifiers typed `Property` in the store
        property_count: usize,
        /// Number of identifiers typed `Gene` in the store
        gene_count: usize,
    },

    /// An explicit node type was neither `Gene` nor `Property`.
    #[error("Invalid node type: '{value}' (expected 'Gene' or 'Property')")]
    InvalidNodeType {
        /// The rejected node type string
        value: String,
    },

    /// The backing key-value store failed or replied inconsistently.
    ///
    /// # When This Occurs
    ///
    /// - Connection to the store was refused or dropped
    /// - A multi-get reply had a different length than the request
    /// - A stored value could not be decoded
    ///
    /// The resolvers never retry; the failure propagates to the caller.
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration is invalid or missing.
    ///
    /// # When This Occurs
    ///
    /// - Config file could not be read or parsed
    /// - Invalid value (e.g. port 0, empty host)
    /// - Environment variable parsing failure
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether this error comes from a malformed invocation rather than
    /// from the environment (store, filesystem, config).
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            CoreError::AmbiguousNodeType { .. } | CoreError::InvalidNodeType { .. }
        )
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        CoreError::ConfigError(e.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_node_type_message() {
        let error = CoreError::AmbiguousNodeType {
            property_count: 2,
            gene_count: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("Mixture of property and gene nodes"));
        assert!(msg.contains("2 property"));
        assert!(msg.contains("3 gene"));
    }

    #[test]
    fn test_invalid_node_type_message() {
        let error = CoreError::InvalidNodeType {
            value: "Protein".to_string(),
        };
        assert!(error.to_string().contains("'Protein'"));
    }

    #[test]
    fn test_store_error_message() {
        let error = CoreError::Store("connection refused".to_string());
        assert_eq!(error.to_string(), "Store error: connection refused");
    }

    #[test]
    fn test_invocation_error_classification() {
        assert!(CoreError::InvalidNodeType {
            value: "x".into()
        }
        .is_invocation_error());
        assert!(CoreError::AmbiguousNodeType {
            property_count: 1,
            gene_count: 1
        }
        .is_invocation_error());
        assert!(!CoreError::Store("x".into()).is_invocation_error());
        assert!(!CoreError::ConfigError("x".into()).is_invocation_error());
    }

    #[test]
    fn test_core_result_alias() {
        fn returns_err() -> CoreResult<()> {
            Err(CoreError::Store("test".into()))
        }
        assert!(returns_err().is_err());
    }
}
