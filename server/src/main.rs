mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use discovery_dao::{PgClubStore, PgEventStore, ensure_schema};
use discovery_http::{DiscoveryHandlers, DiscoveryServices};
use redis_connection::{
    CacheService, CacheStore, config::CacheBackendKind, connect_redis_db,
};
use sql_connection::{SqlConnect, connect_postgres_db};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    info!("Initializing connection pools...");

    let pool = connect_postgres_db(&config.database).await?;
    let db = match &config.read_replica {
        Some(replica) => {
            let read_pool = connect_postgres_db(replica).await?;
            SqlConnect::new_with_read_replica(pool, read_pool)
        }
        None => SqlConnect::new(pool),
    };
    ensure_schema(&db).await?;
    info!(
        read_replica = db.has_read_replica(),
        "PostgreSQL connection pool initialized"
    );

    let store = match config.cache.backend {
        CacheBackendKind::Redis => {
            let redis_pool = connect_redis_db(&config.redis)?;
            CacheStore::redis(redis_pool, &config.cache)
        }
        CacheBackendKind::Memory => {
            CacheStore::memory(config.memory.clone(), &config.cache)
        }
    };
    let cache = CacheService::new(store);

    if cache.ping().await {
        info!(backend = cache.store().backend().name(), "Cache backend ready");
    }
    else {
        warn!(
            backend = cache.store().backend().name(),
            "Cache backend unreachable, serving straight from the store"
        );
    }

    let services = DiscoveryServices::new(
        Arc::new(PgEventStore::new(db.clone())),
        Arc::new(PgClubStore::new(db)),
        cache,
    );

    let app = Router::new()
        .merge(DiscoveryHandlers::routes().with_state(services))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Pulse server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        discovery_http::health::health_check,
        discovery_http::feeds::discover,
        discovery_http::feeds::trending,
        discovery_http::events::list_events,
        discovery_http::events::get_event,
        discovery_http::events::create_event,
        discovery_http::events::update_event,
        discovery_http::events::delete_event,
        discovery_http::clubs::list_clubs,
        discovery_http::clubs::get_club,
        discovery_http::clubs::create_club,
        discovery_http::clubs::update_club,
        discovery_http::clubs::delete_club,
        discovery_http::media::media_uploaded
    ),
    components(
        schemas(
            events_models::Event,
            events_models::NewEvent,
            events_models::EventChanges,
            clubs_models::Club,
            clubs_models::NewClub,
            clubs_models::ClubChanges,
            discovery_queries::DateRange,
            discovery_queries::EntityType,
            discovery_responses::TrendingEvent,
            discovery_responses::TrendingClub,
            discovery_responses::TrendingResponse,
            discovery_responses::DiscoverResponse,
            discovery_commands::MediaOwner,
            discovery_commands::MediaUploadedCommand,
            discovery_http::health::HealthStatus,
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
        )
    ),
    tags(
        (name = "health", description = "Liveness and cache reachability"),
        (name = "discovery", description = "Discover search and trending feed"),
        (name = "events", description = "Event listing, detail and management"),
        (name = "clubs", description = "Club listing, detail and management"),
        (name = "media", description = "Object-storage upload hook")
    ),
    info(
        title = "Pulse API",
        description = "Cached read paths for campus events and clubs",
        version = "1.0.0"
    )
)]
struct ApiDoc;
