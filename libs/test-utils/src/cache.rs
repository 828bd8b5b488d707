use std::time::Duration;

use redis_connection::{
    CacheService, CacheStore,
    config::{CacheStoreConfig, MemoryConfig, RedisDbConfig},
    connect_redis_db,
};

/// Fresh in-process cache; nothing is shared between calls.
pub fn memory_cache() -> CacheService {
    CacheService::new(CacheStore::memory(
        MemoryConfig::default(),
        &CacheStoreConfig::default(),
    ))
}

/// A Redis-backed cache pointed at a port nothing listens on. Every call
/// fails fast and degrades.
pub fn unreachable_cache(op_timeout: Duration) -> anyhow::Result<CacheService> {
    let config = RedisDbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..Default::default()
    };
    let pool = connect_redis_db(&config)?;
    let store_config = CacheStoreConfig {
        op_timeout_ms: op_timeout.as_millis() as u64,
        ..Default::default()
    };

    Ok(CacheService::new(CacheStore::redis(pool, &store_config)))
}
