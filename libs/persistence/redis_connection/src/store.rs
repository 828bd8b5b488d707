use std::{future::Future, sync::Arc, time::Duration};

use bytes::Bytes;
use tracing::{debug, instrument, warn};

use crate::{
    cache::{CacheError, CachePatternTrait, CacheResult, CacheTrait},
    config::{CacheStoreConfig, MemoryConfig},
    core::CacheBackend,
};

/// Fault-tolerant adapter over a [`CacheBackend`].
///
/// Every call is bounded by the configured operation timeout. Failures are
/// logged and folded into a safe default: `get` reports a miss, writes and
/// deletes become no-ops. Callers never observe a cache error.
#[derive(Clone)]
pub struct CacheStore {
    backend: Arc<CacheBackend>,
    op_timeout: Duration,
}

impl CacheStore {
    pub fn new(backend: CacheBackend, config: &CacheStoreConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            op_timeout: config.op_timeout(),
        }
    }

    pub fn redis(
        pool: deadpool_redis::Pool, config: &CacheStoreConfig,
    ) -> Self {
        Self::new(CacheBackend::redis(pool), config)
    }

    pub fn memory(
        memory: MemoryConfig, config: &CacheStoreConfig,
    ) -> Self {
        Self::new(CacheBackend::memory(memory), config)
    }

    pub fn backend(&self) -> &CacheBackend { &self.backend }

    pub fn op_timeout(&self) -> Duration { self.op_timeout }

    async fn bounded<T>(
        &self, op: impl Future<Output = CacheResult<T>>,
    ) -> CacheResult<T> {
        match tokio::time::timeout(self.op_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(self.op_timeout)),
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        match self.bounded(self.backend.get(key)).await {
            Ok(value) => value,
            Err(e) => {
                warn!(cache.key = key, error = %e, "cache get failed, treating as miss");
                None
            }
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    pub async fn set(&self, key: &str, value: Bytes, ttl: Duration) {
        if let Err(e) =
            self.bounded(self.backend.set_with_ttl(key, value, ttl)).await
        {
            warn!(cache.key = key, error = %e, "cache set failed");
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn delete(&self, key: &str) {
        if let Err(e) = self.bounded(self.backend.remove(key)).await {
            warn!(cache.key = key, error = %e, "cache delete failed");
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn delete_by_pattern(&self, pattern: &str) {
        match self.bounded(self.backend.remove_pattern(pattern)).await {
            Ok(removed) => {
                debug!(cache.pattern = pattern, removed, "cache pattern deleted");
            }
            Err(e) => {
                warn!(cache.pattern = pattern, error = %e, "cache pattern delete failed");
            }
        }
    }

    pub async fn ping(&self) -> bool {
        match self.bounded(self.backend.ping()).await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, backend = self.backend.name(), "cache ping failed");
                false
            }
        }
    }
}
