use async_trait::async_trait;
use database_traits::{GenericDao, StoreError};
use uuid::Uuid;

use crate::{Club, ClubChanges, ClubCriteria, NewClub};

#[async_trait]
pub trait ClubStore:
    GenericDao<
        Model = Club,
        ID = Uuid,
        CreateRequest = NewClub,
        UpdateRequest = ClubChanges,
    >
{
    async fn search(
        &self, criteria: &ClubCriteria,
    ) -> Result<Vec<Club>, StoreError>;
}
