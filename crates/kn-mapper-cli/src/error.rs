//! CLI error type and exit code mapping.
//!
//! Exit codes:
//! - 0: success
//! - 1: store, I/O or configuration failure
//! - 2: invalid invocation (ambiguous or invalid node type)

use std::path::PathBuf;

use kn_mapper_core::CoreError;
use kn_mapper_storage::StorageError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
    InvalidInvocation = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> i32 {
        code as i32
    }
}

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Map an error to the exit code the process should return.
pub fn exit_code_for_error(error: &CliError) -> CliExitCode {
    match error {
        CliError::Core(e) if e.is_invocation_error() => CliExitCode::InvalidInvocation,
        _ => CliExitCode::Failure,
    }
}
