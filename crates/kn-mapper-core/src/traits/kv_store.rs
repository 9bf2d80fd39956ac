//! Read-only key-value store abstraction.
//!
//! The resolvers only need one capability from the mapping store: fetch many
//! string values by key in one round-trip. Backends live in
//! `kn-mapper-storage` (Redis, RocksDB snapshot); tests use
//! `stubs::InMemoryStore`.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::keys::StoreKey;

/// Bulk-get access to the mapping store.
///
/// # Contract
/// `multi_get` returns exactly one entry per requested key, in request
/// order. `None` means the key is absent, which is a normal outcome.
///
/// # Thread Safety
/// Implementors MUST be `Send + Sync`; the store is shared and never
/// mutated by the resolvers.
pub trait KeyValueStore: Send + Sync {
    /// Fetch values for `keys` in one bulk request.
    ///
    /// # Errors
    /// - `CoreError::Store` on transport failure or malformed reply
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>>;

    /// Short backend name for logs (e.g. "redis", "rocksdb").
    fn backend_name(&self) -> &'static str;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        (**self).multi_get(keys)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        (**self).multi_get(keys)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        (**self).multi_get(keys)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

/// Reject replies whose length differs from the request.
///
/// Backends call this before handing values back so the resolvers can zip
/// replies onto slots positionally.
pub fn check_reply_len(
    backend: &str,
    requested: usize,
    values: Vec<Option<String>>,
) -> CoreResult<Vec<Option<String>>> {
    if values.len() != requested {
        return Err(CoreError::Store(format!(
            "{} returned {} values for {} keys",
            backend,
            values.len(),
            requested
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reply_len_accepts_matching() {
        let values = check_reply_len("test", 2, vec![None, Some("a".into())]).unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_check_reply_len_rejects_mismatch() {
        let err = check_reply_len("test", 3, vec![None]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("1 values for 3 keys"), "got: {}", msg);
    }
}
