use axum::extract::State;
use common_errors::ApiResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::DiscoveryServices;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub cache_backend: &'static str,
    /// Whether the cache answered a ping. The API keeps serving either way.
    pub cache_reachable: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports cache reachability", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(services): State<DiscoveryServices>,
) -> ApiResponse<HealthStatus> {
    let cache_reachable = services.cache.ping().await;

    ApiResponse::ok(HealthStatus {
        status: "ok",
        cache_backend: services.cache.store().backend().name(),
        cache_reachable,
    })
}
