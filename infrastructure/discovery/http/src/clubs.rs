use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use clubs_models::{Club, ClubChanges, NewClub};
use common_errors::{ApiResponse, AppError};
use discovery_commands::{
    CreateClubCommand, DeleteClubCommand, UpdateClubCommand,
};
use discovery_queries::{ClubListFilters, GetClubQuery};
use tracing::instrument;
use uuid::Uuid;

use crate::{DiscoveryServices, invalid_body, invalid_id, invalid_query};

#[utoipa::path(
    get,
    path = "/api/clubs",
    params(ClubListFilters),
    responses(
        (status = 200, description = "Page of clubs by member count", body = ApiResponse<Vec<Club>>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "clubs"
)]
#[instrument(skip_all)]
pub async fn list_clubs(
    State(services): State<DiscoveryServices>,
    filters: Result<Query<ClubListFilters>, QueryRejection>,
) -> Result<ApiResponse<Vec<Club>>, AppError> {
    let Query(filters) = filters.map_err(invalid_query)?;

    let clubs = services.list_clubs.execute(filters).await?;

    Ok(ApiResponse::ok(clubs))
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club found", body = ApiResponse<Club>),
        (status = 400, description = "Malformed club ID", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Club not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "clubs"
)]
#[instrument(skip_all)]
pub async fn get_club(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<Club>, AppError> {
    let Path(club_id) = id.map_err(invalid_id)?;

    let club = services
        .get_club
        .execute(GetClubQuery { club_id })
        .await?;

    Ok(ApiResponse::ok(club))
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = NewClub,
    responses(
        (status = 201, description = "Club created", body = ApiResponse<Club>),
        (status = 422, description = "Invalid request body", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "clubs"
)]
#[instrument(skip_all)]
pub async fn create_club(
    State(services): State<DiscoveryServices>,
    body: Result<Json<NewClub>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<Club>), AppError> {
    let Json(club) = body.map_err(invalid_body)?;

    let club = services
        .create_club
        .execute(CreateClubCommand { club })
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(club)))
}

#[utoipa::path(
    put,
    path = "/api/clubs/{id}",
    request_body = ClubChanges,
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club updated", body = ApiResponse<Club>),
        (status = 404, description = "Club not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Invalid request body", body = common_errors::ApiErrorResponse)
    ),
    tag = "clubs"
)]
#[instrument(skip_all)]
pub async fn update_club(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ClubChanges>, JsonRejection>,
) -> Result<ApiResponse<Club>, AppError> {
    let Path(club_id) = id.map_err(invalid_id)?;
    let Json(changes) = body.map_err(invalid_body)?;

    let club = services
        .update_club
        .execute(UpdateClubCommand { club_id, changes })
        .await?;

    Ok(ApiResponse::ok(club))
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 404, description = "Club not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "clubs"
)]
#[instrument(skip_all)]
pub async fn delete_club(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(club_id) = id.map_err(invalid_id)?;

    services
        .delete_club
        .execute(DeleteClubCommand { club_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
