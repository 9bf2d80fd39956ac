//! Core RedisStore struct and bulk-read operations.

use parking_lot::Mutex;
use redis::{Client, Connection};
use std::time::Duration;
use tracing::{debug, info};

use kn_mapper_core::config::RedisSettings;
use kn_mapper_core::{CoreResult, KeyValueStore, StoreKey};

use super::config::{connection_info, endpoint};
use crate::error::{StorageError, StorageResult};

/// Redis-backed mapping store.
///
/// # Thread Safety
/// Holds one synchronous connection behind a mutex; concurrent callers
/// serialize on it. Each bulk read is a single atomic `MGET`.
///
/// # Example
/// ```no_run
/// use kn_mapper_core::config::RedisSettings;
/// use kn_mapper_storage::{RedisStore, StorageError};
///
/// # fn main() -> Result<(), StorageError> {
/// let store = RedisStore::connect(&RedisSettings::default())?;
/// let values = store.mget(&["unique::BRCA1".to_string()])?;
/// assert_eq!(values.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RedisStore {
    conn: Mutex<Connection>,
    endpoint: String,
}

impl RedisStore {
    /// Connect to the store described by `settings`.
    ///
    /// # Returns
    /// * `Ok(RedisStore)` - Connected (and authenticated, if a password is set)
    /// * `Err(StorageError::ConnectionFailed)` - Host unreachable, auth rejected, or timeout
    pub fn connect(settings: &RedisSettings) -> StorageResult<Self> {
        let endpoint = endpoint(settings);
        let connection_failed = |e: redis::RedisError| StorageError::ConnectionFailed {
            endpoint: endpoint.clone(),
            message: e.to_string(),
        };

        let client = Client::open(connection_info(settings)).map_err(connection_failed)?;
        let conn = if settings.connect_timeout_secs > 0 {
            client.get_connection_with_timeout(Duration::from_secs(settings.connect_timeout_secs))
        } else {
            client.get_connection()
        }
        .map_err(connection_failed)?;

        info!(endpoint = %endpoint, "connected to redis mapping store");
        Ok(Self {
            conn: Mutex::new(conn),
            endpoint,
        })
    }

    /// `host:port/db` of the connected store.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch raw string keys with one `MGET`.
    ///
    /// Returns a Vec in the same order as `keys`; `None` for absent keys.
    /// An empty key list returns immediately without a round-trip.
    pub fn mget(&self, keys: &[String]) -> StorageResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn.lock();
        let values: Vec<Option<String>> = redis::cmd("MGET").arg(keys).query(&mut *conn)?;
        debug!(
            endpoint = %self.endpoint,
            requested = keys.len(),
            found = values.iter().filter(|v| v.is_some()).count(),
            "MGET"
        );
        Ok(values)
    }
}

impl KeyValueStore for RedisStore {
    fn multi_get(&self, keys: &[StoreKey]) -> CoreResult<Vec<Option<String>>> {
        let rendered: Vec<String> = keys.iter().map(StoreKey::render).collect();
        Ok(self.mget(&rendered)?)
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_refused_is_connection_failed() {
        // Port 1 on loopback is never a redis server.
        let settings = RedisSettings {
            host: "127.0.0.1".into(),
            port: 1,
            password: None,
            connect_timeout_secs: 1,
            ..RedisSettings::default()
        };

        let err = RedisStore::connect(&settings).unwrap_err();

        println!("AFTER: err={}", err);
        assert!(matches!(
            err,
            StorageError::ConnectionFailed { ref endpoint, .. } if endpoint == "127.0.0.1:1/0"
        ));
    }
}
