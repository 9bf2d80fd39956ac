//! Backend selection through `open_store`.
//!
//! Uses REAL RocksDB snapshots on disk; the Redis path is only exercised
//! for its failure mode since no server is available in CI.

use kn_mapper_core::config::{RedisSettings, StoreBackend, StoreConfig};
use kn_mapper_core::{CoreError, NodeMapper, UNMAPPED_SENTINEL};
use kn_mapper_storage::{open_store, StorageError};
use rocksdb::DB;
use tempfile::TempDir;

fn snapshot(entries: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    {
        let db = DB::open_default(tmp.path()).expect("open fixture db");
        for (key, value) in entries {
            db.put(key, value).expect("put fixture");
        }
    }
    tmp
}

fn rocksdb_config(tmp: &TempDir) -> StoreConfig {
    let mut config = StoreConfig {
        backend: StoreBackend::RocksDb,
        ..StoreConfig::default()
    };
    config.rocksdb.path = Some(tmp.path().to_path_buf());
    config
}

#[test]
fn test_open_store_rocksdb_resolves() {
    println!("=== TEST: open_store(rocksdb) end to end ===");
    let tmp = snapshot(&[
        ("hint::P38398::UNIPROT_GN", "ENSG00000012048"),
        ("stable::ENSG00000012048::type", "Gene"),
        ("stable::ENSG00000012048::alias", "BRCA1"),
        ("stable::ENSG00000012048::desc", "BRCA1 DNA repair associated"),
    ]);

    let store = open_store(&rocksdb_config(&tmp)).expect("open store");
    assert_eq!(store.backend_name(), "rocksdb");

    let mapper = NodeMapper::new(store);
    let records = mapper
        .resolve(&["p38398", "Q00000"], None, Some("UniProtKB"), None)
        .expect("resolve");

    println!("AFTER: records={:?}", records);
    assert_eq!(
        records[0].columns(),
        [
            "p38398",
            "ENSG00000012048",
            "Gene",
            "BRCA1",
            "BRCA1 DNA repair associated"
        ]
    );
    assert_eq!(records[1].canonical_id.as_str(), UNMAPPED_SENTINEL);
    println!("RESULT: PASS");
}

#[test]
fn test_open_store_rocksdb_without_path() {
    let config = StoreConfig {
        backend: StoreBackend::RocksDb,
        ..StoreConfig::default()
    };

    let err = open_store(&config).err().expect("must fail without path");

    assert!(matches!(err, StorageError::Config(_)));
    let core: CoreError = err.into();
    assert!(matches!(core, CoreError::ConfigError(_)));
}

#[test]
fn test_open_store_redis_unreachable() {
    let config = StoreConfig {
        backend: StoreBackend::Redis,
        redis: RedisSettings {
            host: "127.0.0.1".into(),
            port: 1,
            password: None,
            connect_timeout_secs: 1,
            ..RedisSettings::default()
        },
        ..StoreConfig::default()
    };

    let err = open_store(&config).err().expect("nothing listens on port 1");

    assert!(matches!(err, StorageError::ConnectionFailed { .. }));
}
