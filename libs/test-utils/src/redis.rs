use std::time::Duration;

use deadpool_redis::{Config, Pool, PoolConfig, Runtime, redis};
use redis_connection::{CacheService, CacheStore, config::CacheStoreConfig};
use tracing::debug;

const PING_ATTEMPTS: u64 = 5;

/// A Redis reachable from the test process, `redis://localhost:6380` unless
/// `TEST_REDIS_URL` says otherwise. Tests using it are `#[ignore]`d.
pub struct TestRedisContainer {
    pub pool: Pool,
    pub connection_string: String,
}

impl TestRedisContainer {
    pub async fn new() -> anyhow::Result<Self> {
        let url = std::env::var("TEST_REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6380".to_string());
        Self::new_with_connection_string(&url).await
    }

    pub async fn new_with_connection_string(
        connection_string: &str,
    ) -> anyhow::Result<Self> {
        let mut cfg = Config::from_url(connection_string);
        cfg.pool = Some(PoolConfig::new(10));
        let pool = cfg.create_pool(Some(Runtime::Tokio1))?;

        wait_until_ready(&pool).await?;

        Ok(Self {
            pool,
            connection_string: connection_string.to_string(),
        })
    }

    /// Cache wired to this Redis with default store settings.
    pub fn cache_service(&self) -> CacheService {
        CacheService::new(CacheStore::redis(
            self.pool.clone(),
            &CacheStoreConfig::default(),
        ))
    }

    pub async fn flush_db(&self) -> anyhow::Result<()> {
        let mut conn = self.pool.get().await?;
        redis::cmd("FLUSHDB").query_async::<()>(&mut conn).await?;
        Ok(())
    }
}

async fn ping(pool: &Pool) -> anyhow::Result<()> {
    let mut conn = pool.get().await?;
    redis::cmd("PING").query_async::<()>(&mut conn).await?;
    Ok(())
}

/// Pings with a linear backoff so a freshly started server has time to
/// accept connections.
async fn wait_until_ready(pool: &Pool) -> anyhow::Result<()> {
    for attempt in 1..PING_ATTEMPTS {
        match ping(pool).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!(attempt, error = %e, "test redis not ready yet");
                tokio::time::sleep(Duration::from_millis(200 * attempt)).await;
            }
        }
    }
    ping(pool).await
}
