use std::time::Duration;

use bytes::Bytes;

/// Failures inside the cache layer. These never cross the public API of
/// [`crate::CacheStore`]; they are logged and folded into a miss or a no-op.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Redis error: {0}")]
    Redis(#[from] deadpool_redis::redis::RedisError),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Raw byte-level operations every backend provides.
#[async_trait::async_trait]
pub trait CacheTrait: Send + Sync {
    /// Get value from cache, returning None if not found
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>>;

    /// Set value with expiration, replacing any previous value
    async fn set_with_ttl(
        &self, key: &str, value: Bytes, ttl: Duration,
    ) -> CacheResult<()>;

    /// Remove key from cache
    async fn remove(&self, key: &str) -> CacheResult<bool>;

    async fn ping(&self) -> CacheResult<()>;
}

/// Extension trait for cache implementations that support key patterns
#[async_trait::async_trait]
pub trait CachePatternTrait: CacheTrait {
    /// Get all keys matching a glob pattern
    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>>;

    /// Remove all keys matching a glob pattern in one batch
    async fn remove_pattern(&self, pattern: &str) -> CacheResult<u64>;
}
