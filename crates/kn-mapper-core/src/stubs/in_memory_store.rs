//! In-memory stub implementation of KeyValueStore.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::error::CoreResult;
use crate::keys::StoreKey;
use crate::traits::KeyValueStore;

/// HashMap-backed store with a query log.
///
/// Every `multi_get` call is appended to the log as the list of rendered
/// keys, so tests can assert how many round-trips a resolver issued and
/// which key namespaces it touched.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
    queries: Mutex<Vec<Vec<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(key, value)` pairs.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of `multi_get` calls so far.
    pub fn query_count(&self) -> usize {
        self.queries.lock().len()
    }

    /// Rendered keys of every `multi_get` call, in call order.
    pub fn queries(&self) -> Vec<Vec<String>> {
        self.queries.lock().clone()
    }

    /// All keys ever requested, flattened.
    pub fn queried_keys(&self) -> Vec<String> {
        self.queries.lock().iter().flatten().cloned().collect()
    }

    pub fn clear_queries(&self) {
        self.queries.lock().clear();
    }
}

impl KeyValueStore for InMemoryStore {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        let rendered: Vec<String> = keys.iter().map(StoreKey::render).collect();
        let values = rendered
            .iter()
            .map(|k| self.entries.get(k).cloned())
            .collect();
        self.queries.lock().push(rendered);
        Ok(values)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
