use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    cache::{
        CachePatternTrait, CacheResult, CacheTrait, Memory, RedisCache,
    },
    config::MemoryConfig,
};

/// Represents different cache backend types
#[derive(Clone)]
pub enum CacheBackend {
    /// Redis backend using a deadpool connection pool
    Redis(RedisCache),

    /// In-memory cache backend
    Memory(Memory),
}

impl CacheBackend {
    pub fn redis(pool: deadpool_redis::Pool) -> Self {
        CacheBackend::Redis(RedisCache::new(pool))
    }

    pub fn memory(config: MemoryConfig) -> Self {
        CacheBackend::Memory(Memory::new(config))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CacheBackend::Redis(_) => "redis",
            CacheBackend::Memory(_) => "memory",
        }
    }
}

impl From<deadpool_redis::Pool> for CacheBackend {
    fn from(pool: deadpool_redis::Pool) -> Self { CacheBackend::redis(pool) }
}

impl From<Memory> for CacheBackend {
    fn from(memory: Memory) -> Self { CacheBackend::Memory(memory) }
}

#[async_trait]
impl CacheTrait for CacheBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        match self {
            CacheBackend::Redis(redis) => redis.get(key).await,
            CacheBackend::Memory(memory) => memory.get(key).await,
        }
    }

    async fn set_with_ttl(
        &self, key: &str, value: Bytes, ttl: Duration,
    ) -> CacheResult<()> {
        match self {
            CacheBackend::Redis(redis) => {
                redis.set_with_ttl(key, value, ttl).await
            }
            CacheBackend::Memory(memory) => {
                memory.set_with_ttl(key, value, ttl).await
            }
        }
    }

    async fn remove(&self, key: &str) -> CacheResult<bool> {
        match self {
            CacheBackend::Redis(redis) => redis.remove(key).await,
            CacheBackend::Memory(memory) => memory.remove(key).await,
        }
    }

    async fn ping(&self) -> CacheResult<()> {
        match self {
            CacheBackend::Redis(redis) => redis.ping().await,
            CacheBackend::Memory(memory) => memory.ping().await,
        }
    }
}

#[async_trait]
impl CachePatternTrait for CacheBackend {
    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>> {
        match self {
            CacheBackend::Redis(redis) => redis.keys(pattern).await,
            CacheBackend::Memory(memory) => memory.keys(pattern).await,
        }
    }

    async fn remove_pattern(&self, pattern: &str) -> CacheResult<u64> {
        match self {
            CacheBackend::Redis(redis) => redis.remove_pattern(pattern).await,
            CacheBackend::Memory(memory) => {
                memory.remove_pattern(pattern).await
            }
        }
    }
}
