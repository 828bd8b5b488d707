use std::sync::Arc;

use clubs_models::{Club, ClubStore};
use database_traits::GenericDao;
use discovery_cache_keys::ResourceType;
use discovery_commands::{
    CreateClubCommand, DeleteClubCommand, UpdateClubCommand,
};
use discovery_errors::DiscoveryError;
use redis_connection::CacheService;
use tracing::instrument;

use crate::invalidate_for;

#[derive(Clone)]
pub struct CreateClubHandler {
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl CreateClubHandler {
    pub fn new(clubs: Arc<dyn ClubStore>, cache: CacheService) -> Self {
        Self { clubs, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateClubCommand,
    ) -> Result<Club, DiscoveryError> {
        let club = self.clubs.create(command.club).await?;

        invalidate_for(&self.cache, ResourceType::Clubs).await;

        Ok(club)
    }
}

#[derive(Clone)]
pub struct UpdateClubHandler {
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl UpdateClubHandler {
    pub fn new(clubs: Arc<dyn ClubStore>, cache: CacheService) -> Self {
        Self { clubs, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateClubCommand,
    ) -> Result<Club, DiscoveryError> {
        let club = self
            .clubs
            .update(command.club_id, command.changes)
            .await?;

        invalidate_for(&self.cache, ResourceType::Clubs).await;

        Ok(club)
    }
}

#[derive(Clone)]
pub struct DeleteClubHandler {
    clubs: Arc<dyn ClubStore>,
    cache: CacheService,
}

impl DeleteClubHandler {
    pub fn new(clubs: Arc<dyn ClubStore>, cache: CacheService) -> Self {
        Self { clubs, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteClubCommand,
    ) -> Result<(), DiscoveryError> {
        self.clubs.delete(command.club_id).await?;

        invalidate_for(&self.cache, ResourceType::Clubs).await;

        Ok(())
    }
}
