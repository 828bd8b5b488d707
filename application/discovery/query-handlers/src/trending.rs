use std::sync::Arc;

use chrono::{DateTime, Utc};
use clubs_models::{ClubCriteria, ClubStore};
use discovery_cache_keys::{TRENDING_TTL, TrendingCacheKey};
use discovery_errors::DiscoveryError;
use discovery_queries::TrendingQuery;
use discovery_responses::{TrendingClub, TrendingEvent, TrendingResponse};
use engagement::{rank_by_score, score_club, score_event};
use events_models::{EventCriteria, EventStore};
use redis_connection::{CacheService, core::CacheTypeBind};
use tracing::{debug, instrument};

/// Entries kept per list in the trending feed.
pub const TRENDING_LIMIT: usize = 20;

#[derive(Clone)]
pub struct TrendingQueryHandler {
    events: Arc<dyn EventStore>,
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl TrendingQueryHandler {
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
        &self, query: TrendingQuery,
    ) -> Result<TrendingResponse, DiscoveryError> {
        self.execute_at(query, Utc::now()).await
    }

    /// Ranks every upcoming public event and every verified club as of
    /// `now`. The feed is global, so one key serves every caller.
    #[instrument(skip(self))]
    pub async fn execute_at(
        &self, _query: TrendingQuery, now: DateTime<Utc>,
    ) -> Result<TrendingResponse, DiscoveryError> {
        let cache = TrendingCacheKey.bind(&self.cache);

        if let Some(feed) = cache.try_get().await {
            debug!("Cache hit for trending feed");
            return Ok(feed);
        }

        debug!("Cache miss for trending feed, ranking from store");

        let events = self
            .events
            .search(&EventCriteria {
                starts_from: Some(now),
                public_only: true,
                ..Default::default()
            })
            .await?;
        let clubs = self
            .clubs
            .search(&ClubCriteria {
                verified: Some(true),
                ..Default::default()
            })
            .await?;

        let feed = TrendingResponse {
            events: rank_by_score(events, TRENDING_LIMIT, |e| score_event(e, now))
                .into_iter()
                .map(TrendingEvent::from)
                .collect(),
            clubs: rank_by_score(clubs, TRENDING_LIMIT, |c| score_club(c, now))
                .into_iter()
                .map(TrendingClub::from)
                .collect(),
        };

        cache.set_with_expire(&feed, TRENDING_TTL).await;

        Ok(feed)
    }
}
