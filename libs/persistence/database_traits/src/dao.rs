use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::StoreError;

#[async_trait]
pub trait GenericDao: Send + Sync {
    type Model: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type UpdateRequest: Send + Sync + 'static;
    type ID: Serialize + DeserializeOwned + Send + Sync + 'static;

    async fn find_by_id(&self, id: Self::ID) -> Result<Self::Model, StoreError>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, StoreError>;

    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Model, StoreError>;

    async fn delete(&self, id: Self::ID) -> Result<(), StoreError>;
}
