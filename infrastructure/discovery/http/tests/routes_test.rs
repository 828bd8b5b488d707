use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::Router,
};
use chrono::{Duration, Utc};
use discovery_http::{DiscoveryHandlers, DiscoveryServices};
use serde_json::{Value, json};
use test_utils::*;
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    router: Router,
    events: Arc<InMemoryEventStore>,
    clubs: Arc<InMemoryClubStore>,
}

fn setup_test_app(
    events: InMemoryEventStore, clubs: InMemoryClubStore,
) -> TestApp {
    init_tracing();

    let events = Arc::new(events);
    let clubs = Arc::new(clubs);
    let services =
        DiscoveryServices::new(events.clone(), clubs.clone(), memory_cache());

    TestApp {
        router: DiscoveryHandlers::routes().with_state(services),
        events,
        clubs,
    }
}

fn empty_app() -> TestApp {
    setup_test_app(InMemoryEventStore::new(), InMemoryClubStore::new())
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    }
    else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_memory_cache() {
    let app = empty_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["cacheBackend"], "memory");
    assert_eq!(body["data"]["cacheReachable"], true);
}

#[tokio::test]
async fn test_discover_caps_and_caches() {
    let from = Utc::now();
    let app = setup_test_app(
        InMemoryEventStore::with_events(events_hours_apart("Hackathon", 60, from)),
        InMemoryClubStore::new(),
    );

    let (status, body) =
        send(&app, get("/api/discover?q=hackathon&type=events")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["events"].as_array().unwrap().len(), 50);
    assert_eq!(body["data"]["clubs"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["events"][0]["title"], "Hackathon #0");

    let reads = app.events.read_calls();
    let (status, again) =
        send(&app, get("/api/discover?type=events&q=hackathon")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.events.read_calls(), reads);
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_discover_rejects_unknown_type() {
    let app = empty_app();

    let (status, body) = send(&app, get("/api/discover?type=people")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_QUERY_PARAMS");
}

#[tokio::test]
async fn test_trending_scores_and_filters() {
    let now = Utc::now();
    let app = setup_test_app(
        InMemoryEventStore::with_events(vec![
            event_with_engagement("Quiet", now + Duration::days(3), 1, 2),
            event_with_engagement("Packed", now + Duration::days(3), 80, 400),
            event_with_engagement("Over", now - Duration::days(1), 500, 900),
        ]),
        InMemoryClubStore::with_clubs(vec![
            club("Robotics", 120, true),
            club("Unverified", 900, false),
        ]),
    );

    let (status, body) = send(&app, get("/api/trending")).await;

    assert_eq!(status, StatusCode::OK);

    let events = body["data"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "Packed");
    assert!(events[0]["trendingScore"].as_f64().unwrap() > 0.0);

    let clubs = body["data"]["clubs"].as_array().unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0]["name"], "Robotics");
}

#[tokio::test]
async fn test_event_detail_errors() {
    let app = empty_app();

    let (status, body) = send(&app, get("/api/events/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_UUID");

    let missing = format!("/api/events/{}", Uuid::now_v7());
    let (status, body) = send(&app, get(&missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "EVENT_NOT_FOUND");
}

#[tokio::test]
async fn test_create_event_invalidates_list() {
    let app = empty_app();

    let (_, before) = send(&app, get("/api/events")).await;
    assert_eq!(before["data"].as_array().unwrap().len(), 0);

    let start = (Utc::now() + Duration::days(2)).to_rfc3339();
    let (status, created) = send(
        &app,
        with_json(
            Method::POST,
            "/api/events",
            json!({
                "title": "Open Mic",
                "category": "music",
                "startTime": start,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["title"], "Open Mic");
    assert_eq!(created["data"]["isPublic"], true);

    let (_, after) = send(&app, get("/api/events")).await;
    let listed = after["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn test_create_event_rejects_bad_body() {
    let app = empty_app();

    let (status, body) = send(
        &app,
        with_json(Method::POST, "/api/events", json!({ "title": "No date" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_BODY");
    assert_eq!(app.events.write_calls(), 0);
}

#[tokio::test]
async fn test_update_and_delete_event() {
    let event = event_starting_at("Chess Night", Utc::now() + Duration::days(1));
    let uri = format!("/api/events/{}", event.id);
    let app = setup_test_app(
        InMemoryEventStore::with_events(vec![event]),
        InMemoryClubStore::new(),
    );

    let (_, cached) = send(&app, get(&uri)).await;
    assert_eq!(cached["data"]["title"], "Chess Night");

    let (status, updated) = send(
        &app,
        with_json(Method::PUT, &uri, json!({ "title": "Chess Marathon" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["title"], "Chess Marathon");

    let (_, fresh) = send(&app, get(&uri)).await;
    assert_eq!(fresh["data"]["title"], "Chess Marathon");

    let (status, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.events.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_club_routes() {
    let app = setup_test_app(
        InMemoryEventStore::new(),
        InMemoryClubStore::with_clubs(vec![
            club("Chess", 40, true),
            club("Film", 90, false),
        ]),
    );

    let (status, body) = send(&app, get("/api/clubs?verified=true")).await;
    assert_eq!(status, StatusCode::OK);
    let clubs = body["data"].as_array().unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0]["name"], "Chess");

    let (status, created) = send(
        &app,
        with_json(
            Method::POST,
            "/api/clubs",
            json!({ "name": "Climbing", "category": "sports" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["isVerified"], false);

    let (_, all) = send(&app, get("/api/clubs")).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);
    assert_eq!(all["data"][0]["name"], "Film");

    let missing = format!("/api/clubs/{}", Uuid::now_v7());
    let (status, body) = send(&app, delete(&missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CLUB_NOT_FOUND");
    assert_eq!(app.clubs.write_calls(), 2);
}

#[tokio::test]
async fn test_media_upload_evicts_owner_reads() {
    let event = event_starting_at("Gallery Walk", Utc::now() + Duration::days(4));
    let app = setup_test_app(
        InMemoryEventStore::with_events(vec![event.clone()]),
        InMemoryClubStore::new(),
    );

    send(&app, get("/api/events")).await;
    send(&app, get("/api/events")).await;
    let reads = app.events.read_calls();

    let (status, _) = send(
        &app,
        with_json(
            Method::POST,
            "/api/media/uploaded",
            json!({ "owner": "event", "ownerId": event.id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    send(&app, get("/api/events")).await;
    assert_eq!(app.events.read_calls(), reads + 1);
}
