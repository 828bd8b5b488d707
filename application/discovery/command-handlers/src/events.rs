use std::sync::Arc;

use database_traits::GenericDao;
use discovery_cache_keys::ResourceType;
use discovery_commands::{
    CreateEventCommand, DeleteEventCommand, UpdateEventCommand,
};
use discovery_errors::DiscoveryError;
use events_models::{Event, EventStore};
use redis_connection::CacheService;
use tracing::instrument;

use crate::invalidate_for;

#[derive(Clone)]
pub struct CreateEventHandler {
    events: Arc<dyn EventStore>,
    cache: CacheService,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventStore>, cache: CacheService) -> Self {
        Self { events, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<Event, DiscoveryError> {
        let event = self.events.create(command.event).await?;

        invalidate_for(&self.cache, ResourceType::Events).await;

        Ok(event)
    }
}

#[derive(Clone)]
pub struct UpdateEventHandler {
    events: Arc<dyn EventStore>,
    cache: CacheService,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventStore>, cache: CacheService) -> Self {
        Self { events, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateEventCommand,
    ) -> Result<Event, DiscoveryError> {
        let event = self
            .events
            .update(command.event_id, command.changes)
            .await?;

        invalidate_for(&self.cache, ResourceType::Events).await;

        Ok(event)
    }
}

#[derive(Clone)]
pub struct DeleteEventHandler {
    events: Arc<dyn EventStore>,
    cache: CacheService,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventStore>, cache: CacheService) -> Self {
        Self { events, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEventCommand,
    ) -> Result<(), DiscoveryError> {
        self.events.delete(command.event_id).await?;

        invalidate_for(&self.cache, ResourceType::Events).await;

        Ok(())
    }
}
