use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use common_errors::AppError;
use discovery_commands::MediaUploadedCommand;
use tracing::instrument;

use crate::{DiscoveryServices, invalid_body};

/// Called by the object-storage collaborator after an upload has been
/// stored and linked. Only evicts cached reads of the owning resource.
#[utoipa::path(
    post,
    path = "/api/media/uploaded",
    request_body = MediaUploadedCommand,
    responses(
        (status = 204, description = "Caches of the owning resource invalidated"),
        (status = 422, description = "Invalid request body", body = common_errors::ApiErrorResponse)
    ),
    tag = "media"
)]
#[instrument(skip_all)]
pub async fn media_uploaded(
    State(services): State<DiscoveryServices>,
    body: Result<Json<MediaUploadedCommand>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(command) = body.map_err(invalid_body)?;

    services.media_uploaded.execute(command).await;

    Ok(StatusCode::NO_CONTENT)
}
