use async_trait::async_trait;
use database_traits::{GenericDao, StoreError};
use uuid::Uuid;

use crate::{Event, EventChanges, EventCriteria, NewEvent};

#[async_trait]
pub trait EventStore:
    GenericDao<
        Model = Event,
        ID = Uuid,
        CreateRequest = NewEvent,
        UpdateRequest = EventChanges,
    >
{
    async fn search(
        &self, criteria: &EventCriteria,
    ) -> Result<Vec<Event>, StoreError>;
}
