use std::sync::Arc;

use chrono::{DateTime, Utc};
use database_traits::GenericDao;
use discovery_cache_keys::{
    DETAIL_TTL, EventDetailCacheKey, EventListCacheKey, LIST_TTL,
};
use discovery_errors::DiscoveryError;
use discovery_queries::{EventListFilters, GetEventQuery};
use events_models::{Event, EventStore};
use redis_connection::{CacheService, core::CacheTypeBind};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct GetEventQueryHandler {
    events: Arc<dyn EventStore>,
    cache: CacheService,
}

impl GetEventQueryHandler {
    pub fn new(events: Arc<dyn EventStore>, cache: CacheService) -> Self {
        Self { events, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<Event, DiscoveryError> {
        let cache =
            EventDetailCacheKey.bind_with_args(&self.cache, (&query.event_id,));

        if let Some(event) = cache.try_get().await {
            debug!("Cache hit for event {}", query.event_id);
            return Ok(event);
        }

        debug!("Cache miss for event {}, fetching from store", query.event_id);

        let event = self.events.find_by_id(query.event_id).await?;

        cache.set_with_expire(&event, DETAIL_TTL).await;

        Ok(event)
    }
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    events: Arc<dyn EventStore>,
    cache: CacheService,
}

impl ListEventsQueryHandler {
    pub fn new(events: Arc<dyn EventStore>, cache: CacheService) -> Self {
        Self { events, cache }
    }

    pub async fn execute(
        &self, filters: EventListFilters,
    ) -> Result<Vec<Event>, DiscoveryError> {
        self.execute_at(filters, Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn execute_at(
        &self, filters: EventListFilters, now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DiscoveryError> {
        let filter_hash = self.cache.hash_filters(&filters);
        let cache =
            EventListCacheKey.bind_with_args(&self.cache, (&filter_hash,));

        if let Some(events) = cache.try_get().await {
            debug!("Cache hit for events list with filter {}", filter_hash);
            return Ok(events);
        }

        debug!(
            "Cache miss for events list with filter {}, fetching from store",
            filter_hash
        );

        let events = self.events.search(&filters.criteria(now)).await?;

        cache.set_with_expire(&events, LIST_TTL).await;

        Ok(events)
    }
}
