//! `lookup` command: resolve identifiers given on the command line.

use std::io::{self, Write};

use clap::Args;
use kn_mapper_core::{KeyValueStore, MapperConfig, NodeMapper, NodeRecord};

use super::args::{LookupArgs, ResolveOptions, StoreArgs};
use super::{finish, open_mapper, write_tsv};
use crate::error::CliError;

/// Arguments for the lookup command.
#[derive(Args, Debug)]
pub struct LookupCommandArgs {
    /// Identifiers to resolve
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Print a JSON array instead of TSV rows
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Execute the lookup command, printing to stdout.
pub fn handle_lookup(args: LookupCommandArgs, config: MapperConfig) -> i32 {
    finish(run(&args, &config))
}

fn run(args: &LookupCommandArgs, config: &MapperConfig) -> Result<(), CliError> {
    let opts = ResolveOptions::from_args(&args.lookup, config);
    let mapper = open_mapper(config)?;

    let stdout = io::stdout();
    lookup_to(&mapper, &args.ids, &opts, args.json, stdout.lock())
}

/// Resolve `ids` and render them to `out`.
pub fn lookup_to<S: KeyValueStore, W: Write>(
    mapper: &NodeMapper<S>,
    ids: &[String],
    opts: &ResolveOptions,
    json: bool,
    mut out: W,
) -> Result<(), CliError> {
    let records = mapper.resolve(
        ids,
        opts.node_type.as_deref(),
        opts.hint.as_deref(),
        opts.taxon.as_deref(),
    )?;

    if json {
        write_json(&records, &mut out)
    } else {
        write_tsv(&records, out)
    }
}

fn write_json<W: Write>(records: &[NodeRecord], out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out).map_err(|e| CliError::io("<stdout>", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kn_mapper_core::stubs::InMemoryStore;

    fn property_store() -> InMemoryStore {
        InMemoryStore::with_entries([
            ("stable::GO:0006281::type", "Property"),
            ("stable::GO:0006281::alias", "DNA repair"),
            ("stable::GO:0006281::desc", "The process of restoring DNA"),
        ])
    }

    fn opts() -> ResolveOptions {
        ResolveOptions {
            hint: None,
            taxon: Some("9606".into()),
            node_type: None,
        }
    }

    #[test]
    fn test_lookup_tsv() {
        let store = property_store();
        let mapper = NodeMapper::new(&store);
        let mut buf = Vec::new();

        lookup_to(&mapper, &["GO:0006281".to_string()], &opts(), false, &mut buf)
            .expect("lookup");

        let text = String::from_utf8(buf).expect("utf8");
        println!("AFTER: {:?}", text);
        assert_eq!(
            text,
            "GO:0006281\tGO:0006281\tProperty\tDNA repair\tThe process of restoring DNA\n"
        );
    }

    #[test]
    fn test_lookup_json() {
        let store = property_store();
        let mapper = NodeMapper::new(&store);
        let mut buf = Vec::new();

        lookup_to(&mapper, &["GO:0006281".to_string()], &opts(), true, &mut buf)
            .expect("lookup");

        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        println!("AFTER: {}", value);
        assert_eq!(value[0]["raw_id"], "GO:0006281");
        assert_eq!(value[0]["canonical_id"], "GO:0006281");
        assert_eq!(value[0]["type"], "Property");
        assert_eq!(value[0]["alias"], "DNA repair");
        assert_eq!(value[0]["description"], "The process of restoring DNA");
    }

    #[test]
    fn test_lookup_invalid_node_type() {
        let store = property_store();
        let mapper = NodeMapper::new(&store);
        let bad = ResolveOptions {
            node_type: Some("Protein".into()),
            ..opts()
        };

        let err = lookup_to(&mapper, &["X".to_string()], &bad, false, Vec::new()).unwrap_err();

        assert_eq!(
            crate::error::exit_code_for_error(&err),
            crate::error::CliExitCode::InvalidInvocation
        );
    }
}
