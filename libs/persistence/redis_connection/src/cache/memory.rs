use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use moka::{Expiry, future::Cache};

use super::r#trait::{CachePatternTrait, CacheResult, CacheTrait};
use crate::{config::MemoryConfig, pattern::glob_matches};

#[derive(Clone)]
pub struct MemoryEntry {
    bytes: Bytes,
    ttl: Duration,
}

/// Gives every entry the TTL it was written with. A replace restarts the
/// clock, matching `SETEX`.
struct EntryTtl;

impl Expiry<String, MemoryEntry> for EntryTtl {
    fn expire_after_create(
        &self, _key: &String, value: &MemoryEntry, _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self, _key: &String, value: &MemoryEntry, _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process backend built on moka, used for local runs and tests.
#[derive(Clone)]
pub struct Memory {
    memory: Cache<String, MemoryEntry>,
    config: MemoryConfig,
}

impl Memory {
    pub fn new(config: MemoryConfig) -> Self {
        let memory = Cache::builder()
            .max_capacity(config.capacity)
            .expire_after(EntryTtl)
            .build();

        Self { memory, config }
    }

    pub fn config(&self) -> &MemoryConfig { &self.config }
}

impl Default for Memory {
    fn default() -> Self { Self::new(MemoryConfig::default()) }
}

#[async_trait]
impl CacheTrait for Memory {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        Ok(self.memory.get(key).await.map(|entry| entry.bytes))
    }

    async fn set_with_ttl(
        &self, key: &str, value: Bytes, ttl: Duration,
    ) -> CacheResult<()> {
        let entry = MemoryEntry { bytes: value, ttl };
        self.memory.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<bool> {
        Ok(self.memory.remove(key).await.is_some())
    }

    async fn ping(&self) -> CacheResult<()> { Ok(()) }
}

#[async_trait]
impl CachePatternTrait for Memory {
    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>> {
        Ok(self
            .memory
            .iter()
            .filter(|(key, _)| glob_matches(pattern, key))
            .map(|(key, _)| key.as_ref().clone())
            .collect())
    }

    async fn remove_pattern(&self, pattern: &str) -> CacheResult<u64> {
        let keys = self.keys(pattern).await?;
        let mut removed = 0;
        for key in keys {
            if self.memory.remove(&key).await.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get_returns_bytes() {
        let memory = Memory::default();

        memory
            .set_with_ttl(
                "events:detail:1",
                Bytes::from_static(b"{}"),
                Duration::from_secs(60),
            )
            .await
            .unwrap();

        let value = memory.get("events:detail:1").await.unwrap();
        assert_eq!(value, Some(Bytes::from_static(b"{}")));
    }

    #[tokio::test]
    async fn test_entry_expires_after_its_ttl() {
        let memory = Memory::default();

        memory
            .set_with_ttl(
                "events:list:x",
                Bytes::from_static(b"[]"),
                Duration::from_millis(50),
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(memory.get("events:list:x").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_pattern_only_touches_matches() {
        let memory = Memory::default();
        let ttl = Duration::from_secs(60);
        for key in ["events:list:a", "events:detail:b", "clubs:list:c"] {
            memory
                .set_with_ttl(key, Bytes::from_static(b"1"), ttl)
                .await
                .unwrap();
        }

        let removed = memory.remove_pattern("events:*").await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(memory.keys("*").await.unwrap(), vec!["clubs:list:c"]);
    }

    #[tokio::test]
    async fn test_remove_pattern_without_matches_is_noop() {
        let memory = Memory::default();

        assert_eq!(memory.remove_pattern("events:*").await.unwrap(), 0);
    }
}
