//! Store and lookup options shared by `map` and `lookup`.

use std::path::PathBuf;

use clap::Args;
use kn_mapper_core::config::StoreBackend;
use kn_mapper_core::{CoreResult, MapperConfig};
use tracing::debug;

/// Where the mapping store lives. Flags override the loaded configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// TOML config file (default: config/default.toml layered with KN_MAPPER__* env vars)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store backend: redis or rocksdb
    #[arg(long, value_parser = parse_backend)]
    pub backend: Option<StoreBackend>,

    /// Redis host
    #[arg(long)]
    pub redis_host: Option<String>,

    /// Redis port
    #[arg(long)]
    pub redis_port: Option<u16>,

    /// Redis password ("" connects without AUTH)
    #[arg(long)]
    pub redis_pass: Option<String>,

    /// RocksDB snapshot directory (for --backend rocksdb)
    #[arg(long, value_name = "DIR")]
    pub rocksdb_path: Option<PathBuf>,
}

/// Resolution context options.
#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    /// Source of the identifiers (e.g. Entrez, UniProt)
    #[arg(short = 'H', long)]
    pub source_hint: Option<String>,

    /// Species taxon id; pass "" for unknown species
    #[arg(short, long)]
    pub taxon: Option<String>,

    /// Node type of the batch: Gene or Property (default: infer)
    #[arg(long)]
    pub node_type: Option<String>,
}

fn parse_backend(s: &str) -> Result<StoreBackend, String> {
    s.parse::<StoreBackend>().map_err(|e| e.to_string())
}

/// Effective hint, taxon and node type after applying flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub hint: Option<String>,
    pub taxon: Option<String>,
    pub node_type: Option<String>,
}

impl ResolveOptions {
    pub fn from_args(args: &LookupArgs, config: &MapperConfig) -> Self {
        Self {
            hint: args
                .source_hint
                .clone()
                .or_else(|| config.lookup.default_hint.clone()),
            taxon: args
                .taxon
                .clone()
                .or_else(|| config.lookup.default_taxon.clone()),
            node_type: args
                .node_type
                .clone()
                .or_else(|| config.lookup.node_type.clone()),
        }
    }
}

impl StoreArgs {
    /// Load the base configuration, apply flag overrides, then validate.
    pub fn load_config(&self) -> CoreResult<MapperConfig> {
        let mut config = match &self.config {
            Some(path) => MapperConfig::parse_file(path)?,
            None => MapperConfig::load_unvalidated()?,
        };
        self.apply(&mut config);
        config.validate()?;
        debug!(backend = %config.store.backend, "effective store configuration");
        Ok(config)
    }

    fn apply(&self, config: &mut MapperConfig) {
        if let Some(backend) = self.backend {
            config.store.backend = backend;
        }
        if let Some(host) = &self.redis_host {
            config.store.redis.host = host.clone();
        }
        if let Some(port) = self.redis_port {
            config.store.redis.port = port;
        }
        if let Some(pass) = &self.redis_pass {
            config.store.redis.password = Some(pass.clone());
        }
        if let Some(path) = &self.rocksdb_path {
            config.store.rocksdb.path = Some(path.clone());
        }
    }
}
