use std::{borrow::Cow, marker::PhantomData, time::Duration};

use serde::{Serialize, de::DeserializeOwned};

use super::key::{CacheKey, CacheKeyAutoConstruct};
use crate::CacheService;

/// A cache key resolved against a [`CacheService`], typed by the value the
/// key definition caches.
pub struct Bound<'cache, T> {
    cache: &'cache CacheService,
    key: Cow<'static, str>,
    __phantom: PhantomData<fn() -> T>,
}

impl<'cache, T> Bound<'cache, T> {
    fn new(cache: &'cache CacheService, key: Cow<'static, str>) -> Self {
        Self {
            cache,
            key,
            __phantom: PhantomData,
        }
    }

    pub fn key(&self) -> &str { &self.key }
}

impl<T> Bound<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    pub async fn try_get(&self) -> Option<T> { self.cache.get(&self.key).await }

    pub async fn set_with_expire(&self, value: &T, ttl: Duration) {
        self.cache.set(&self.key, value, ttl).await
    }
}

pub trait CacheTypeBind: CacheKey {
    fn bind_with_args<'cache>(
        &self, cache: &'cache CacheService, args: Self::Args<'_>,
    ) -> Bound<'cache, Self::Value> {
        Bound::new(cache, CacheKey::get_key_with_args(self, args))
    }

    fn bind<'cache>(
        &self, cache: &'cache CacheService,
    ) -> Bound<'cache, Self::Value>
    where
        for<'r> <Self as CacheKey>::Args<'r>: CacheKeyAutoConstruct,
    {
        CacheTypeBind::bind_with_args(
            self,
            cache,
            CacheKeyAutoConstruct::construct(),
        )
    }
}

impl<K: CacheKey> CacheTypeBind for K {}
