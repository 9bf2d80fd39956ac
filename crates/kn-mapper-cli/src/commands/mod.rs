//! CLI command handlers
//!
//! # Modules
//!
//! - `args`: store and lookup options shared by every command
//! - `map`: map a file of identifiers to a TSV node map
//! - `lookup`: resolve identifiers given on the command line

pub mod args;
pub mod lookup;
pub mod map;

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use kn_mapper_core::{KeyValueStore, MapperConfig, NodeMapper, NodeRecord};
use kn_mapper_storage::open_store;
use tracing::error;

use crate::error::{exit_code_for_error, CliError, CliExitCode};

/// Open the configured store and wrap it in a mapper.
pub fn open_mapper(config: &MapperConfig) -> Result<NodeMapper<Box<dyn KeyValueStore>>, CliError> {
    let store = open_store(&config.store)?;
    Ok(NodeMapper::new(store))
}

/// Write records as tab-separated rows, no header. Fields holding a tab,
/// newline or quote are quoted so every record stays on one row.
pub fn write_tsv<W: Write>(records: &[NodeRecord], out: W) -> Result<(), CliError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);
    for record in records {
        writer.write_record(record.columns())?;
    }
    writer.flush().map_err(|e| CliError::io("<output>", e))?;
    Ok(())
}

/// Log a handler failure and turn it into a process exit code.
pub fn finish<T>(result: Result<T, CliError>) -> i32 {
    match result {
        Ok(_) => CliExitCode::Success.into(),
        Err(e) => {
            error!("{}", e);
            exit_code_for_error(&e).into()
        }
    }
}
