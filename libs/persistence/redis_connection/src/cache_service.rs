use std::{fmt::Display, time::Duration};

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    codec::{self, FilterDescriptor},
    core::Json,
    store::CacheStore,
};

/// Cache-aside orchestration on top of a [`CacheStore`].
///
/// Built once at boot and cloned into every handler; clones share the
/// underlying connection pool or memory cache. Callers read before they
/// compute, populate after they compute, and invalidate after each
/// successful mutation. Concurrent misses for one key may both compute and
/// both populate; the last write wins.
#[derive(Clone)]
pub struct CacheService {
    store: CacheStore,
}

impl CacheService {
    pub fn new(store: CacheStore) -> Self { Self { store } }

    pub fn store(&self) -> &CacheStore { &self.store }

    /// Read-through. A miss, an unreachable store and an undecodable payload
    /// all come back as `None`.
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.store.get(key).await?;

        match Json::<T>::from_bytes(&bytes) {
            Ok(json) => {
                debug!(cache.key = key, "cache hit");
                Some(json.inner())
            }
            Err(e) => {
                warn!(cache.key = key, error = %e, "discarding undecodable cache entry");
                None
            }
        }
    }

    /// Populate. The entry is replaced wholesale.
    pub async fn set<T>(&self, key: &str, value: &T, ttl: Duration)
    where
        T: Serialize + ?Sized,
    {
        match Json(value).to_bytes() {
            Ok(bytes) => self.store.set(key, Bytes::from(bytes), ttl).await,
            Err(e) => {
                warn!(cache.key = key, error = %e, "cache value not serializable");
            }
        }
    }

    pub async fn delete(&self, key: &str) { self.store.delete(key).await }

    /// Drops every entry under `resource:*`.
    pub async fn invalidate(&self, resource: impl AsRef<str>) {
        let pattern = codec::namespace_pattern(resource.as_ref());
        debug!(cache.pattern = %pattern, "invalidating namespace");
        self.store.delete_by_pattern(&pattern).await
    }

    pub async fn invalidate_all<I>(&self, resources: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for resource in resources {
            self.invalidate(resource).await;
        }
    }

    pub fn generate_key(
        &self, resource: &str, operation: &str, identifier: impl Display,
    ) -> String {
        codec::build_key(resource, operation, identifier)
    }

    pub fn hash_filters<F>(&self, filters: &F) -> String
    where
        F: FilterDescriptor + ?Sized,
    {
        codec::hash_filters(filters)
    }

    pub async fn ping(&self) -> bool { self.store.ping().await }
}
