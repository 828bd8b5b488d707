use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use deadpool_redis::redis::{self, AsyncCommands};

use super::r#trait::{CachePatternTrait, CacheResult, CacheTrait};

/// Redis cache implementation using deadpool Redis pool
#[derive(Clone)]
pub struct RedisCache {
    pool: deadpool_redis::Pool,
}

impl RedisCache {
    pub fn new(pool: deadpool_redis::Pool) -> Self { Self { pool } }

    pub fn pool(&self) -> &deadpool_redis::Pool { &self.pool }
}

#[async_trait]
impl CacheTrait for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        let mut conn = self.pool.get().await?;
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value.map(Bytes::from))
    }

    async fn set_with_ttl(
        &self, key: &str, value: Bytes, ttl: Duration,
    ) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        let _: () = conn.set_ex(key, value.as_ref(), seconds).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.pool.get().await?;
        let count: u32 = conn.del(key).await?;
        Ok(count > 0)
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[async_trait]
impl CachePatternTrait for RedisCache {
    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>> {
        let mut conn = self.pool.get().await?;
        let keys: Vec<String> = conn.keys(pattern).await?;
        Ok(keys)
    }

    async fn remove_pattern(&self, pattern: &str) -> CacheResult<u64> {
        let mut conn = self.pool.get().await?;
        let keys: Vec<String> = conn.keys(pattern).await?;

        if keys.is_empty() {
            return Ok(0);
        }

        let removed: u64 = conn.del(&keys).await?;
        Ok(removed)
    }
}
