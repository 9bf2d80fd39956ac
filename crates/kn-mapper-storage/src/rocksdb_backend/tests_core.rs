//! RocksDB snapshot tests.
//!
//! Tests use REAL data stored in RocksDB. Each test writes a fixture
//! snapshot with a writable handle, closes it, then reads it back through
//! the read-only `RocksDbStore`.

use rocksdb::DB;
use tempfile::TempDir;

use super::core::RocksDbStore;
use crate::error::StorageError;
use kn_mapper_core::{CanonicalId, KeyValueStore, NodeMapper, StoreKey};

// =========================================================================
// Test Helpers (REAL DATA)
// =========================================================================

/// Write `entries` into a fresh snapshot directory.
fn create_snapshot(entries: &[(&str, &str)]) -> TempDir {
    let raw: Vec<(&str, Vec<u8>)> = entries
        .iter()
        .map(|(k, v)| (*k, v.as_bytes().to_vec()))
        .collect();
    create_raw_snapshot(&raw)
}

/// Same as `create_snapshot` but with arbitrary value bytes.
fn create_raw_snapshot(entries: &[(&str, Vec<u8>)]) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    {
        let db = DB::open_default(tmp.path()).expect("open writable fixture db");
        for (key, value) in entries {
            db.put(key.as_bytes(), value).expect("put fixture");
        }
        db.flush().expect("flush fixture");
    }
    tmp
}

// =========================================================================
// open Tests
// =========================================================================

#[test]
fn test_open_missing_path_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    let missing = tmp.path().join("does-not-exist");

    let err = RocksDbStore::open(&missing).unwrap_err();

    println!("AFTER: err={}", err);
    assert!(matches!(err, StorageError::OpenFailed { ref path, .. } if path.contains("does-not-exist")));
}

#[test]
fn test_open_reports_path() {
    let tmp = create_snapshot(&[]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");
    assert_eq!(store.path(), tmp.path().to_string_lossy());
    assert_eq!(store.backend_name(), "rocksdb");
}

// =========================================================================
// get_many / multi_get Tests
// =========================================================================

#[test]
fn test_get_many_preserves_order() {
    println!("=== TEST: get_many order and misses ===");
    let tmp = create_snapshot(&[("unique::A", "S_A"), ("unique::C", "S_C")]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");

    let values = store
        .get_many(&["unique::C", "unique::B", "unique::A"])
        .expect("get_many");

    println!("AFTER: values={:?}", values);
    assert_eq!(values, vec![Some("S_C".into()), None, Some("S_A".into())]);
    println!("RESULT: PASS");
}

#[test]
fn test_get_many_empty() {
    let tmp = create_snapshot(&[]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");
    let keys: Vec<String> = Vec::new();
    assert!(store.get_many(&keys).unwrap().is_empty());
}

#[test]
fn test_get_many_rejects_non_utf8() {
    let tmp = create_raw_snapshot(&[("stable::X::desc", vec![0xff, 0xfe, 0x00])]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");

    let err = store.get_many(&["stable::X::desc"]).unwrap_err();

    assert!(matches!(err, StorageError::Serialization(ref msg) if msg.contains("stable::X::desc")));
}

#[test]
fn test_multi_get_renders_store_keys() {
    let tmp = create_snapshot(&[("taxon::BRCA1::9606", "ENSG001")]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");
    let taxon = kn_mapper_core::Taxon::from(9606);

    let values = store
        .multi_get(&[StoreKey::taxon("brca1", &taxon), StoreKey::unique("brca1")])
        .expect("multi_get");

    assert_eq!(values, vec![Some("ENSG001".into()), None]);
}

// =========================================================================
// End-to-end resolution over a snapshot
// =========================================================================

#[test]
fn test_node_mapper_over_snapshot() {
    println!("=== TEST: NodeMapper over RocksDB snapshot ===");
    let tmp = create_snapshot(&[
        ("taxon::BRCA1::9606", "ENSG001"),
        ("stable::ENSG001::type", "Gene"),
        ("stable::ENSG001::alias", "BRCA1_ALIAS"),
    ]);
    let store = RocksDbStore::open(tmp.path()).expect("open snapshot");
    let mapper = NodeMapper::new(&store);

    let records = mapper
        .resolve(&["BRCA1", "NOPE"], None, None, Some("9606"))
        .expect("resolve");

    println!("AFTER: records={:?}", records);
    assert_eq!(
        records[0].columns(),
        ["BRCA1", "ENSG001", "Gene", "BRCA1_ALIAS", "ENSG001"]
    );
    assert_eq!(records[1].canonical_id, CanonicalId::Unmapped);
    assert_eq!(records[1].metadata.node_type, "None");
    println!("RESULT: PASS");
}
