//! KnowEnG Mapper CLI
//!
//! Batch resolution of gene/protein identifiers against the KnowEnG
//! mapping store.
//!
//! # Commands
//!
//! - `map`: map a file of identifiers to `<stem>.node_map.txt`
//! - `lookup`: resolve identifiers given as arguments, TSV or JSON to stdout
//!
//! Exit codes: 0 success, 1 store/I/O/config failure, 2 invalid invocation.

use clap::{Parser, Subcommand};
use kn_mapper_core::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// KnowEnG Mapper - map identifiers to canonical KnowEnG nodes
#[derive(Parser)]
#[command(name = "kn-mapper")]
#[command(author = "KnowEnG Team")]
#[command(version)]
#[command(about = "Map gene and property identifiers to canonical KnowEnG node ids")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a file of identifiers and write a node map
    ///
    /// Output columns: raw id, canonical id, type, alias, description.
    Map(commands::map::MapArgs),
    /// Resolve identifiers given on the command line
    Lookup(commands::lookup::LookupCommandArgs),
}

impl Commands {
    fn store_args(&self) -> &commands::args::StoreArgs {
        match self {
            Commands::Map(args) => &args.store,
            Commands::Lookup(args) => &args.store,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Config first: its logging level applies when neither -v nor RUST_LOG is set
    let loaded = cli.command.store_args().load_config();
    let level = match &loaded {
        Ok(config) => config.logging.level.clone(),
        Err(_) => LoggingConfig::default().level,
    };

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => std::process::exit(commands::finish::<()>(Err(e.into()))),
    };

    let exit_code = match cli.command {
        Commands::Map(args) => commands::map::handle_map(args, config),
        Commands::Lookup(args) => commands::lookup::handle_lookup(args, config),
    };

    std::process::exit(exit_code);
}
