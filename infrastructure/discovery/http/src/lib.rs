pub mod clubs;
pub mod events;
pub mod feeds;
pub mod health;
pub mod media;

use std::sync::Arc;

use axum::{
    Router,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    routing::{get, post},
};
use clubs_models::ClubStore;
use common_errors::AppError;
use discovery_command_handlers::{
    CreateClubHandler, CreateEventHandler, DeleteClubHandler,
    DeleteEventHandler, MediaUploadedHandler, UpdateClubHandler,
    UpdateEventHandler,
};
use discovery_query_handlers::{
    DiscoverQueryHandler, GetClubQueryHandler, GetEventQueryHandler,
    ListClubsQueryHandler, ListEventsQueryHandler, TrendingQueryHandler,
};
use events_models::EventStore;
use redis_connection::CacheService;

#[derive(Clone)]
pub struct DiscoveryServices {
    pub discover: DiscoverQueryHandler,
    pub trending: TrendingQueryHandler,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
    pub create_event: CreateEventHandler,
    pub update_event: UpdateEventHandler,
    pub delete_event: DeleteEventHandler,

    pub get_club: GetClubQueryHandler,
    pub list_clubs: ListClubsQueryHandler,
    pub create_club: CreateClubHandler,
    pub update_club: UpdateClubHandler,
    pub delete_club: DeleteClubHandler,

    pub media_uploaded: MediaUploadedHandler,
    pub cache: CacheService,
}

impl DiscoveryServices {
    pub fn new(
        events: Arc<dyn EventStore>, clubs: Arc<dyn ClubStore>,
        cache: CacheService,
    ) -> Self {
        Self {
            discover: DiscoverQueryHandler::new(
                events.clone(),
                clubs.clone(),
                cache.clone(),
            ),
            trending: TrendingQueryHandler::new(
                events.clone(),
                clubs.clone(),
                cache.clone(),
            ),
            get_event: GetEventQueryHandler::new(events.clone(), cache.clone()),
            list_events: ListEventsQueryHandler::new(
                events.clone(),
                cache.clone(),
            ),
            create_event: CreateEventHandler::new(events.clone(), cache.clone()),
            update_event: UpdateEventHandler::new(events.clone(), cache.clone()),
            delete_event: DeleteEventHandler::new(events, cache.clone()),
            get_club: GetClubQueryHandler::new(clubs.clone(), cache.clone()),
            list_clubs: ListClubsQueryHandler::new(clubs.clone(), cache.clone()),
            create_club: CreateClubHandler::new(clubs.clone(), cache.clone()),
            update_club: UpdateClubHandler::new(clubs.clone(), cache.clone()),
            delete_club: DeleteClubHandler::new(clubs, cache.clone()),
            media_uploaded: MediaUploadedHandler::new(cache.clone()),
            cache,
        }
    }
}

pub struct DiscoveryHandlers;

impl DiscoveryHandlers {
    pub fn routes() -> Router<DiscoveryServices> {
        Router::new()
            .route("/health", get(health::health_check))
            .route("/api/discover", get(feeds::discover))
            .route("/api/trending", get(feeds::trending))
            .route(
                "/api/events",
                get(events::list_events).post(events::create_event),
            )
            .route(
                "/api/events/{id}",
                get(events::get_event)
                    .put(events::update_event)
                    .delete(events::delete_event),
            )
            .route("/api/clubs", get(clubs::list_clubs).post(clubs::create_club))
            .route(
                "/api/clubs/{id}",
                get(clubs::get_club)
                    .put(clubs::update_club)
                    .delete(clubs::delete_club),
            )
            .route("/api/media/uploaded", post(media::media_uploaded))
    }
}

pub(crate) fn invalid_query(rejection: QueryRejection) -> AppError {
    AppError::bad_request_with_details(
        "INVALID_QUERY_PARAMS",
        "Invalid query parameters provided",
        &rejection.body_text(),
    )
}

pub(crate) fn invalid_id(rejection: PathRejection) -> AppError {
    AppError::bad_request_with_details(
        "INVALID_UUID",
        "Invalid UUID format provided",
        &rejection.body_text(),
    )
}

pub(crate) fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::unprocessable_entity("INVALID_BODY", &rejection.body_text())
}
