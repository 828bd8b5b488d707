use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use common_errors::{ApiResponse, AppError};
use discovery_commands::{
    CreateEventCommand, DeleteEventCommand, UpdateEventCommand,
};
use discovery_queries::{EventListFilters, GetEventQuery};
use events_models::{Event, EventChanges, NewEvent};
use tracing::instrument;
use uuid::Uuid;

use crate::{DiscoveryServices, invalid_body, invalid_id, invalid_query};

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventListFilters),
    responses(
        (status = 200, description = "Page of public events", body = ApiResponse<Vec<Event>>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<DiscoveryServices>,
    filters: Result<Query<EventListFilters>, QueryRejection>,
) -> Result<ApiResponse<Vec<Event>>, AppError> {
    let Query(filters) = filters.map_err(invalid_query)?;

    let events = services.list_events.execute(filters).await?;

    Ok(ApiResponse::ok(events))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<Event>),
        (status = 400, description = "Malformed event ID", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_event(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<Event>, AppError> {
    let Path(event_id) = id.map_err(invalid_id)?;

    let event = services
        .get_event
        .execute(GetEventQuery { event_id })
        .await?;

    Ok(ApiResponse::ok(event))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = NewEvent,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<Event>),
        (status = 422, description = "Invalid request body", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<DiscoveryServices>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<Event>), AppError> {
    let Json(event) = body.map_err(invalid_body)?;

    let event = services
        .create_event
        .execute(CreateEventCommand { event })
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(event)))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    request_body = EventChanges,
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event updated", body = ApiResponse<Event>),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Invalid request body", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn update_event(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<EventChanges>, JsonRejection>,
) -> Result<ApiResponse<Event>, AppError> {
    let Path(event_id) = id.map_err(invalid_id)?;
    let Json(changes) = body.map_err(invalid_body)?;

    let event = services
        .update_event
        .execute(UpdateEventCommand { event_id, changes })
        .await?;

    Ok(ApiResponse::ok(event))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn delete_event(
    State(services): State<DiscoveryServices>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(event_id) = id.map_err(invalid_id)?;

    services
        .delete_event
        .execute(DeleteEventCommand { event_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
