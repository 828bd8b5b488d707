use std::time::Duration;

pub trait DbConnectConfig: serde::de::DeserializeOwned {
    fn password(&self) -> Option<&str> { None }
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn db(&self) -> u8;
    fn max_conn(&self) -> usize { 16 }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RedisDbConfig {
    #[serde(default = "host_default")]
    pub host: String,
    #[serde(default = "port_default")]
    pub port: u16,
    #[serde(default = "db_default")]
    pub db: u8,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "max_conn_default")]
    pub max_conn: usize,
}

impl Default for RedisDbConfig {
    fn default() -> Self {
        Self {
            host: host_default(),
            port: port_default(),
            db: db_default(),
            password: None,
            max_conn: max_conn_default(),
        }
    }
}

impl DbConnectConfig for RedisDbConfig {
    fn password(&self) -> Option<&str> { self.password.as_deref() }

    fn host(&self) -> &str { &self.host }

    fn port(&self) -> u16 { self.port }

    fn db(&self) -> u8 { self.db }

    fn max_conn(&self) -> usize { self.max_conn }
}

/// In-process backend. Entries expire by their own TTL, the capacity bounds
/// the entry count.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_memory_capacity")]
    pub capacity: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_memory_capacity(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    #[default]
    Redis,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CacheStoreConfig {
    #[serde(default)]
    pub backend: CacheBackendKind,
    /// Upper bound for a single cache round trip, including pool checkout.
    #[serde(default = "default_op_timeout_ms")]
    pub op_timeout_ms: u64,
}

impl Default for CacheStoreConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::default(),
            op_timeout_ms: default_op_timeout_ms(),
        }
    }
}

impl CacheStoreConfig {
    pub fn op_timeout(&self) -> Duration {
        Duration::from_millis(self.op_timeout_ms)
    }
}

fn host_default() -> String { "127.0.0.1".into() }
fn port_default() -> u16 { 6379 }
fn db_default() -> u8 { 0 }
fn max_conn_default() -> usize { 16 }
fn default_memory_capacity() -> u64 { 10_000 }
fn default_op_timeout_ms() -> u64 { 500 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config: CacheStoreConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.backend, CacheBackendKind::Redis);
        assert_eq!(config.op_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_backend_kind_is_lowercase() {
        let config: CacheStoreConfig =
            serde_json::from_str(r#"{"backend": "memory"}"#).unwrap();

        assert_eq!(config.backend, CacheBackendKind::Memory);
    }
}
