use common_errors::AppError;
use database_traits::StoreError;
use thiserror::Error;

/// Failures of the discovery read paths and mutation handlers. Cache
/// failures never show up here.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DiscoveryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Store(other),
        }
    }
}

impl From<DiscoveryError> for AppError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::NotFound { entity, id } => {
                AppError::not_found(
                    &format!("{}_NOT_FOUND", entity.to_uppercase()),
                    &format!("{entity} with ID {id} not found"),
                )
            }
            DiscoveryError::Store(StoreError::Connection(msg)) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {msg}"
                ))
            }
            DiscoveryError::Store(store_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {store_err}"
                ))
            }
        }
    }
}
