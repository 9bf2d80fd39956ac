//! Redis connection parameters.

use kn_mapper_core::config::RedisSettings;
use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

/// Build client connection info from settings.
///
/// An empty password connects without AUTH.
pub fn connection_info(settings: &RedisSettings) -> ConnectionInfo {
    let password = settings
        .password
        .as_ref()
        .filter(|p| !p.is_empty())
        .cloned();

    ConnectionInfo {
        addr: ConnectionAddr::Tcp(settings.host.clone(), settings.port),
        redis: RedisConnectionInfo {
            db: settings.db,
            password,
            ..Default::default()
        },
    }
}

/// `host:port/db` for logs and errors. Never includes the password.
pub fn endpoint(settings: &RedisSettings) -> String {
    format!("{}:{}/{}", settings.host, settings.port, settings.db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_info_defaults() {
        let info = connection_info(&RedisSettings::default());
        match &info.addr {
            ConnectionAddr::Tcp(host, port) => {
                assert_eq!(host, "knowredis.knoweng.org");
                assert_eq!(*port, 6379);
            }
            other => panic!("unexpected addr {:?}", other),
        }
        assert_eq!(info.redis.password.as_deref(), Some("KnowEnG"));
        assert_eq!(info.redis.db, 0);
    }

    #[test]
    fn test_empty_password_means_no_auth() {
        let settings = RedisSettings {
            password: Some(String::new()),
            ..RedisSettings::default()
        };
        assert!(connection_info(&settings).redis.password.is_none());

        let settings = RedisSettings {
            password: None,
            ..RedisSettings::default()
        };
        assert!(connection_info(&settings).redis.password.is_none());
    }

    #[test]
    fn test_endpoint_redacts_password() {
        let settings = RedisSettings {
            host: "localhost".into(),
            port: 6380,
            db: 2,
            password: Some("s3cret".into()),
            ..RedisSettings::default()
        };
        let ep = endpoint(&settings);
        assert_eq!(ep, "localhost:6380/2");
        assert!(!ep.contains("s3cret"));
    }
}
