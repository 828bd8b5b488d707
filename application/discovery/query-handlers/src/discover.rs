use std::sync::Arc;

use chrono::{DateTime, Utc};
use clubs_models::ClubStore;
use discovery_cache_keys::{DISCOVER_TTL, DiscoverCacheKey};
use discovery_errors::DiscoveryError;
use discovery_queries::{DiscoverFilters, discover::DISCOVER_RESULT_CAP};
use discovery_responses::DiscoverResponse;
use events_models::EventStore;
use redis_connection::{CacheService, core::CacheTypeBind};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DiscoverQueryHandler {
    events: Arc<dyn EventStore>,
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl DiscoverQueryHandler {
    pub fn new(
        events: Arc<dyn EventStore>, clubs: Arc<dyn ClubStore>,
        cache: CacheService,
    ) -> Self {
        Self {
            events,
            clubs,
            cache,
        }
    }

    pub async fn execute(
        &self, filters: DiscoverFilters,
    ) -> Result<DiscoverResponse, DiscoveryError> {
        self.execute_at(filters, Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn execute_at(
        &self, filters: DiscoverFilters, now: DateTime<Utc>,
    ) -> Result<DiscoverResponse, DiscoveryError> {
        let filter_hash = self.cache.hash_filters(&filters);
        let cache =
            DiscoverCacheKey.bind_with_args(&self.cache, (&filter_hash,));

        if let Some(found) = cache.try_get().await {
            debug!("Cache hit for discover search {}", filter_hash);
            return Ok(found);
        }

        debug!(
            "Cache miss for discover search {}, querying store",
            filter_hash
        );

        let cap = DISCOVER_RESULT_CAP as usize;
        let entity_type = filters.entity_type();

        let mut events = if entity_type.includes_events() {
            self.events.search(&filters.event_criteria(now)).await?
        }
        else {
            Vec::new()
        };
        events.sort_by_key(|e| e.start_time);
        events.truncate(cap);

        let mut clubs = if entity_type.includes_clubs() {
            self.clubs.search(&filters.club_criteria()).await?
        }
        else {
            Vec::new()
        };
        clubs.sort_by(|a, b| b.member_count.cmp(&a.member_count));
        clubs.truncate(cap);

        let found = DiscoverResponse { events, clubs };
        cache.set_with_expire(&found, DISCOVER_TTL).await;

        Ok(found)
    }
}
