//! Tests for TOML loading.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::{MapperConfig, StoreBackend};
use crate::error::CoreError;

fn write_config(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(body.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_from_file_partial_sections_fill_defaults() {
    let file = write_config(
        r#"
[store.redis]
host = "localhost"
password = ""

[lookup]
default_hint = "entrez"
"#,
    );

    let config = MapperConfig::from_file(file.path()).unwrap();

    assert_eq!(config.store.backend, StoreBackend::Redis);
    assert_eq!(config.store.redis.host, "localhost");
    assert_eq!(config.store.redis.port, 6379);
    assert_eq!(config.store.redis.password.as_deref(), Some(""));
    assert_eq!(config.lookup.default_hint.as_deref(), Some("entrez"));
    assert_eq!(config.lookup.default_taxon.as_deref(), Some("9606"));
}

#[test]
fn test_from_file_rocksdb_backend() {
    let file = write_config(
        r#"
[store]
backend = "rocksdb"

[store.rocksdb]
path = "/data/kn_snapshot"
"#,
    );

    let config = MapperConfig::from_file(file.path()).unwrap();

    assert_eq!(config.store.backend, StoreBackend::RocksDb);
    assert_eq!(
        config.store.rocksdb.path.as_deref(),
        Some(std::path::Path::new("/data/kn_snapshot"))
    );
}

#[test]
fn test_from_file_missing() {
    let err = MapperConfig::from_file(std::path::Path::new("/nonexistent/kn.toml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigError(ref msg) if msg.contains("Failed to read")));
}

#[test]
fn test_from_file_malformed() {
    let file = write_config("[store\nbackend = ");
    let err = MapperConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigError(ref msg) if msg.contains("Failed to parse")));
}

#[test]
fn test_toml_roundtrip() {
    let config = MapperConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: MapperConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_parse_file_defers_validation() {
    let file = write_config(
        r#"
[store]
backend = "rocksdb"
"#,
    );

    let parsed = MapperConfig::parse_file(file.path()).unwrap();
    assert_eq!(parsed.store.backend, StoreBackend::RocksDb);
    assert!(parsed.store.rocksdb.path.is_none());

    assert!(matches!(
        MapperConfig::from_file(file.path()),
        Err(CoreError::ConfigError(_))
    ));
}
