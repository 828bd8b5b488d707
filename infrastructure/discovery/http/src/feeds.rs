use axum::extract::{Query, State, rejection::QueryRejection};
use common_errors::{ApiResponse, AppError};
use discovery_queries::{DiscoverFilters, TrendingQuery};
use discovery_responses::{DiscoverResponse, TrendingResponse};
use tracing::instrument;

use crate::{DiscoveryServices, invalid_query};

#[utoipa::path(
    get,
    path = "/api/discover",
    params(DiscoverFilters),
    responses(
        (status = 200, description = "Matching events and clubs, at most 50 of each", body = ApiResponse<DiscoverResponse>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "discovery"
)]
#[instrument(skip_all)]
pub async fn discover(
    State(services): State<DiscoveryServices>,
    filters: Result<Query<DiscoverFilters>, QueryRejection>,
) -> Result<ApiResponse<DiscoverResponse>, AppError> {
    let Query(filters) = filters.map_err(invalid_query)?;

    let found = services.discover.execute(filters).await?;

    Ok(ApiResponse::ok(found))
}

#[utoipa::path(
    get,
    path = "/api/trending",
    responses(
        (status = 200, description = "Top upcoming events and verified clubs by engagement", body = ApiResponse<TrendingResponse>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "discovery"
)]
#[instrument(skip_all)]
pub async fn trending(
    State(services): State<DiscoveryServices>,
) -> Result<ApiResponse<TrendingResponse>, AppError> {
    let feed = services.trending.execute(TrendingQuery).await?;

    Ok(ApiResponse::ok(feed))
}
