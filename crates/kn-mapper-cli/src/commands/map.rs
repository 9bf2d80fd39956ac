//! `map` command: resolve a file of identifiers to a node map.
//!
//! # Usage
//!
//! ```bash
//! kn-mapper map genes.txt -H Entrez -t 9606
//! # writes genes.node_map.txt: raw, canonical, type, alias, description
//! ```
//!
//! Only the first tab-separated column of each input line is read, with
//! TSV quoting undone. Blank lines resolve as empty identifiers so output
//! rows line up with input.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Args;
use csv::{ReaderBuilder, StringRecord};
use kn_mapper_core::{KeyValueStore, MapperConfig, NodeMapper};
use tracing::info;

use super::args::{LookupArgs, ResolveOptions, StoreArgs};
use super::{finish, open_mapper, write_tsv};
use crate::error::CliError;

/// Suffix of the default output file.
pub const NODE_MAP_SUFFIX: &str = "node_map.txt";

/// Arguments for the map command.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Input file, one identifier per line (first tab column)
    pub infile: PathBuf,

    /// Output file (default: <infile stem>.node_map.txt)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Execute the map command.
///
/// # Returns
///
/// Exit code:
/// - 0: node map written
/// - 1: store, I/O or configuration failure
/// - 2: ambiguous or invalid node type
pub fn handle_map(args: MapArgs, config: MapperConfig) -> i32 {
    finish(run(&args, &config))
}

fn run(args: &MapArgs, config: &MapperConfig) -> Result<usize, CliError> {
    let opts = ResolveOptions::from_args(&args.lookup, config);
    let outfile = args
        .outfile
        .clone()
        .unwrap_or_else(|| default_outfile(&args.infile));

    let mapper = open_mapper(config)?;
    map_file(&mapper, &args.infile, &outfile, &opts)
}

/// `<stem>.node_map.txt` in the current directory.
pub fn default_outfile(infile: &Path) -> PathBuf {
    let stem = infile
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    PathBuf::from(format!("{}.{}", stem, NODE_MAP_SUFFIX))
}

/// Read raw identifiers: first tab column per line, blank lines kept.
pub fn read_ids(path: &Path) -> Result<Vec<String>, CliError> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;
    let mut ids = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| CliError::io(path, e))?;
        ids.push(first_column(line.trim_end_matches('\r'))?);
    }
    Ok(ids)
}

/// First tab-separated field of one line, with TSV quoting undone.
/// A blank line gives an empty id.
pub fn first_column(line: &str) -> Result<String, CliError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(String::new());
    }
    Ok(record.get(0).unwrap_or_default().to_string())
}

/// Resolve every identifier in `infile` and write the node map to `outfile`.
///
/// Returns the number of rows written. Nothing is written if resolution
/// fails.
pub fn map_file<S: KeyValueStore>(
    mapper: &NodeMapper<S>,
    infile: &Path,
    outfile: &Path,
    opts: &ResolveOptions,
) -> Result<usize, CliError> {
    let ids = read_ids(infile)?;
    info!(infile = %infile.display(), count = ids.len(), "mapping identifiers");

    let records = mapper.resolve(
        &ids,
        opts.node_type.as_deref(),
        opts.hint.as_deref(),
        opts.taxon.as_deref(),
    )?;

    let out = File::create(outfile).map_err(|e| CliError::io(outfile, e))?;
    write_tsv(&records, BufWriter::new(out))?;

    info!(outfile = %outfile.display(), rows = records.len(), "node map written");
    Ok(records.len())
}
