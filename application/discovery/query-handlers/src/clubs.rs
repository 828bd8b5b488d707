use std::sync::Arc;

use clubs_models::{Club, ClubStore};
use database_traits::GenericDao;
use discovery_cache_keys::{
    ClubDetailCacheKey, ClubListCacheKey, DETAIL_TTL, LIST_TTL,
};
use discovery_errors::DiscoveryError;
use discovery_queries::{ClubListFilters, GetClubQuery};
use redis_connection::{CacheService, core::CacheTypeBind};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct GetClubQueryHandler {
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl GetClubQueryHandler {
    pub fn new(clubs: Arc<dyn ClubStore>, cache: CacheService) -> Self {
        Self { clubs, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetClubQuery,
    ) -> Result<Club, DiscoveryError> {
        let cache =
            ClubDetailCacheKey.bind_with_args(&self.cache, (&query.club_id,));

        if let Some(club) = cache.try_get().await {
            debug!("Cache hit for club {}", query.club_id);
            return Ok(club);
        }

        debug!("Cache miss for club {}, fetching from store", query.club_id);

        let club = self.clubs.find_by_id(query.club_id).await?;

        cache.set_with_expire(&club, DETAIL_TTL).await;

        Ok(club)
    }
}

#[derive(Clone)]
pub struct ListClubsQueryHandler {
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl ListClubsQueryHandler {
    pub fn new(clubs: Arc<dyn ClubStore>, cache: CacheService) -> Self {
        Self { clubs, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, filters: ClubListFilters,
    ) -> Result<Vec<Club>, DiscoveryError> {
        let filter_hash = self.cache.hash_filters(&filters);
        let cache =
            ClubListCacheKey.bind_with_args(&self.cache, (&filter_hash,));

        if let Some(clubs) = cache.try_get().await {
            debug!("Cache hit for clubs list with filter {}", filter_hash);
            return Ok(clubs);
        }

        debug!(
            "Cache miss for clubs list with filter {}, fetching from store",
            filter_hash
        );

        let clubs = self.clubs.search(&filters.criteria()).await?;

        cache.set_with_expire(&clubs, LIST_TTL).await;

        Ok(clubs)
    }
}
