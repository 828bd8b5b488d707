use std::{sync::Arc, time::Duration as StdDuration};

use chrono::{Duration, TimeZone, Utc};
use discovery_errors::DiscoveryError;
use discovery_queries::{
    ClubListFilters, DateRange, DiscoverFilters, EntityType, EventListFilters,
    GetClubQuery, GetEventQuery, TrendingQuery,
};
use discovery_query_handlers::{
    DiscoverQueryHandler, GetClubQueryHandler, GetEventQueryHandler,
    ListClubsQueryHandler, ListEventsQueryHandler, TRENDING_LIMIT,
    TrendingQueryHandler,
};
use redis_connection::CacheService;
use test_utils::*;
use uuid::Uuid;

fn discover_handler(
    events: &InMemoryEventStore, clubs: &InMemoryClubStore,
    cache: CacheService,
) -> DiscoverQueryHandler {
    DiscoverQueryHandler::new(
        Arc::new(events.clone()),
        Arc::new(clubs.clone()),
        cache,
    )
}

fn search(query: &str) -> DiscoverFilters {
    DiscoverFilters {
        query: Some(query.into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_discover_caps_events_in_start_order() -> anyhow::Result<()> {
    let now = reference_now();
    let events =
        InMemoryEventStore::with_events(events_hours_apart("Jazz", 60, now));
    let clubs = InMemoryClubStore::new();
    let handler = discover_handler(&events, &clubs, memory_cache());

    let found = handler.execute_at(search("jazz"), now).await?;

    assert_eq!(found.events.len(), 50);
    assert!(
        found
            .events
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time)
    );
    assert_eq!(found.events[0].title, "Jazz #0");
    Ok(())
}

#[tokio::test]
async fn test_discover_sorts_clubs_by_members() -> anyhow::Result<()> {
    let clubs = InMemoryClubStore::with_clubs(vec![
        club("Chess Club", 12, false),
        club("Chess Masters", 80, true),
        club("Chess Juniors", 40, false),
        club("Debate Society", 200, true),
    ]);
    let handler =
        discover_handler(&InMemoryEventStore::new(), &clubs, memory_cache());

    let found = handler.execute_at(search("CHESS"), reference_now()).await?;
    let names: Vec<_> = found.clubs.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, ["Chess Masters", "Chess Juniors", "Chess Club"]);
    Ok(())
}

#[tokio::test]
async fn test_search_for_all_matches_text_only() -> anyhow::Result<()> {
    let now = reference_now();
    let events = InMemoryEventStore::with_events(vec![
        event_starting_at("Ballroom dance", now + Duration::hours(1)),
        event_starting_at("Chess night", now + Duration::hours(2)),
    ]);
    let clubs = InMemoryClubStore::with_clubs(vec![
        club("Football Club", 30, true),
        club("Chess Club", 12, false),
    ]);
    let handler = discover_handler(&events, &clubs, memory_cache());

    let found = handler.execute_at(search("ALL"), now).await?;
    let titles: Vec<_> = found.events.iter().map(|e| e.title.as_str()).collect();
    let names: Vec<_> = found.clubs.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(titles, ["Ballroom dance"]);
    assert_eq!(names, ["Football Club"]);
    Ok(())
}

#[tokio::test]
async fn test_second_discover_request_is_served_from_cache()
-> anyhow::Result<()> {
    let now = reference_now();
    let events =
        InMemoryEventStore::with_events(events_hours_apart("Robotics", 3, now));
    let clubs =
        InMemoryClubStore::with_clubs(vec![club("Robotics Society", 5, true)]);
    let handler = discover_handler(&events, &clubs, memory_cache());

    let first = handler.execute_at(search("robotics"), now).await?;
    let reads_after_first = (events.read_calls(), clubs.read_calls());
    let second = handler.execute_at(search("robotics"), now).await?;

    assert_eq!(first, second);
    assert_eq!(reads_after_first, (1, 1));
    assert_eq!((events.read_calls(), clubs.read_calls()), reads_after_first);
    Ok(())
}

#[tokio::test]
async fn test_equivalent_filters_share_a_cache_entry() -> anyhow::Result<()> {
    let events = InMemoryEventStore::new();
    let clubs = InMemoryClubStore::new();
    let handler = discover_handler(&events, &clubs, memory_cache());

    handler.execute_at(search("film"), reference_now()).await?;
    let explicit = DiscoverFilters {
        query: Some("film".into()),
        entity_type: Some(EntityType::All),
        category: Some("all".into()),
        date_range: Some(DateRange::Upcoming),
    };
    handler.execute_at(explicit, reference_now()).await?;

    assert_eq!(events.read_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_today_window_boundaries() -> anyhow::Result<()> {
    let now = reference_now();
    let far_future = Utc.with_ymd_and_hms(2099, 6, 1, 18, 0, 0).unwrap();
    let store = InMemoryEventStore::with_events(vec![
        event_starting_at("Open mic soon", now + Duration::seconds(1)),
        event_starting_at("Open mic far", far_future),
        event_starting_at("Open mic past", now - Duration::minutes(5)),
    ]);

    let mut titles_by_range = Vec::new();
    for range in [DateRange::Today, DateRange::Week, DateRange::Month, DateRange::Upcoming] {
        let handler =
            discover_handler(&store, &InMemoryClubStore::new(), memory_cache());
        let filters = DiscoverFilters {
            query: Some("open mic".into()),
            date_range: Some(range),
            ..Default::default()
        };
        let found = handler.execute_at(filters, now).await?;
        let titles: Vec<String> =
            found.events.into_iter().map(|e| e.title).collect();
        titles_by_range.push((range, titles));
    }

    for (range, titles) in titles_by_range {
        assert!(titles.contains(&"Open mic soon".to_string()), "{range}");
        assert!(!titles.contains(&"Open mic past".to_string()), "{range}");
        assert_eq!(
            titles.contains(&"Open mic far".to_string()),
            range == DateRange::Upcoming,
            "{range}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_discover_excludes_private_events_and_respects_type()
-> anyhow::Result<()> {
    let now = reference_now();
    let mut private = event_starting_at("Quiz night", now + Duration::hours(2));
    private.is_public = false;
    let events = InMemoryEventStore::with_events(vec![
        private,
        event_starting_at("Quiz finals", now + Duration::hours(3)),
    ]);
    let clubs = InMemoryClubStore::with_clubs(vec![club("Quiz Club", 9, true)]);
    let handler = discover_handler(&events, &clubs, memory_cache());

    let only_events = DiscoverFilters {
        query: Some("quiz".into()),
        entity_type: Some(EntityType::Events),
        ..Default::default()
    };
    let found = handler.execute_at(only_events, now).await?;

    assert_eq!(found.events.len(), 1);
    assert_eq!(found.events[0].title, "Quiz finals");
    assert!(found.clubs.is_empty());
    assert_eq!(clubs.read_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_trending_caps_and_orders_by_score() -> anyhow::Result<()> {
    let now = reference_now();
    let mut eligible: Vec<_> = (0..25)
        .map(|i| {
            event_with_engagement(
                &format!("Event {i}"),
                now + Duration::days(i % 10 + 1),
                i * 3,
                i * 7,
            )
        })
        .collect();
    let mut private = event_with_engagement(
        "Private gala",
        now + Duration::days(1),
        10_000,
        0,
    );
    private.is_public = false;
    eligible.push(private);
    eligible.push(event_with_engagement(
        "Last week",
        now - Duration::days(7),
        10_000,
        0,
    ));

    let mut clubs: Vec<_> = (0..25)
        .map(|i| club(&format!("Club {i}"), i * 2, true))
        .collect();
    clubs.push(club("Unverified giant", 100_000, false));

    let handler = TrendingQueryHandler::new(
        Arc::new(InMemoryEventStore::with_events(eligible)),
        Arc::new(InMemoryClubStore::with_clubs(clubs)),
        memory_cache(),
    );

    let feed = handler.execute_at(TrendingQuery, now).await?;

    assert!(feed.events.len() <= TRENDING_LIMIT);
    assert_eq!(feed.events.len(), 20);
    assert!(
        feed.events
            .windows(2)
            .all(|w| w[0].trending_score >= w[1].trending_score)
    );
    assert!(
        feed.events
            .iter()
            .all(|e| e.event.title != "Private gala" && e.event.title != "Last week")
    );
    assert_eq!(feed.clubs.len(), 20);
    assert_eq!(feed.clubs[0].club.name, "Club 24");
    assert!(feed.clubs.iter().all(|c| c.club.is_verified));
    Ok(())
}

#[tokio::test]
async fn test_trending_is_cached_globally() -> anyhow::Result<()> {
    let now = reference_now();
    let events = InMemoryEventStore::with_events(events_hours_apart("Gig", 2, now));
    let clubs = InMemoryClubStore::new();
    let handler = TrendingQueryHandler::new(
        Arc::new(events.clone()),
        Arc::new(clubs.clone()),
        memory_cache(),
    );

    let first = handler.execute_at(TrendingQuery, now).await?;
    let second = handler.execute_at(TrendingQuery, now).await?;

    assert_eq!(first, second);
    assert_eq!(events.read_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_event_detail_caches_hits_but_not_misses() -> anyhow::Result<()> {
    let now = reference_now();
    let event = event_starting_at("Poetry slam", now + Duration::days(2));
    let store = InMemoryEventStore::with_events(vec![event.clone()]);
    let handler = GetEventQueryHandler::new(Arc::new(store.clone()), memory_cache());

    let fetched = handler
        .execute(GetEventQuery { event_id: event.id })
        .await?;
    let again = handler
        .execute(GetEventQuery { event_id: event.id })
        .await?;

    assert_eq!(fetched, event);
    assert_eq!(again, event);
    assert_eq!(store.read_calls(), 1);

    let missing = Uuid::now_v7();
    for _ in 0..2 {
        let err = handler
            .execute(GetEventQuery { event_id: missing })
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound { .. }));
    }
    assert_eq!(store.read_calls(), 3);
    Ok(())
}

#[tokio::test]
async fn test_event_list_pages_and_caches() -> anyhow::Result<()> {
    let now = reference_now();
    let store =
        InMemoryEventStore::with_events(events_hours_apart("Lecture", 30, now));
    let handler = ListEventsQueryHandler::new(Arc::new(store.clone()), memory_cache());
    let second_page = EventListFilters {
        limit: Some(10),
        offset: Some(10),
        ..Default::default()
    };

    let page = handler.execute_at(second_page.clone(), now).await?;
    handler.execute_at(second_page, now).await?;
    let default_page = handler
        .execute_at(EventListFilters::default(), now)
        .await?;

    assert_eq!(page.len(), 10);
    assert_eq!(page[0].title, "Lecture #10");
    assert_eq!(default_page.len(), 20);
    assert_eq!(store.read_calls(), 2);
    Ok(())
}

#[tokio::test]
async fn test_club_list_and_detail() -> anyhow::Result<()> {
    let verified = club("Astronomy", 30, true);
    let store = InMemoryClubStore::with_clubs(vec![
        verified.clone(),
        club("Origami", 8, false),
    ]);
    let cache = memory_cache();
    let list = ListClubsQueryHandler::new(Arc::new(store.clone()), cache.clone());
    let detail = GetClubQueryHandler::new(Arc::new(store.clone()), cache);

    let only_verified = list
        .execute(ClubListFilters {
            verified: Some(true),
            ..Default::default()
        })
        .await?;
    let all = list.execute(ClubListFilters::default()).await?;
    let fetched = detail
        .execute(GetClubQuery {
            club_id: verified.id,
        })
        .await?;

    assert_eq!(only_verified, vec![verified.clone()]);
    assert_eq!(all.len(), 2);
    assert_eq!(fetched, verified);
    Ok(())
}

#[tokio::test]
async fn test_store_failure_propagates_and_is_not_cached() -> anyhow::Result<()> {
    let store = InMemoryEventStore::with_events(events_hours_apart(
        "Hackathon",
        2,
        reference_now(),
    ));
    let handler = discover_handler(&store, &InMemoryClubStore::new(), memory_cache());

    store.set_failing(true);
    let err = handler
        .execute_at(search("hackathon"), reference_now())
        .await
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::Store(_)));

    store.set_failing(false);
    let found = handler
        .execute_at(search("hackathon"), reference_now())
        .await?;
    assert_eq!(found.events.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_cache_falls_back_to_store() -> anyhow::Result<()> {
    let now = reference_now();
    let events =
        InMemoryEventStore::with_events(events_hours_apart("Climbing", 4, now));
    let clubs = InMemoryClubStore::with_clubs(vec![club("Climbing Crew", 3, true)]);
    let cache = unreachable_cache(StdDuration::from_millis(200))?;
    let handler = discover_handler(&events, &clubs, cache.clone());
    let trending = TrendingQueryHandler::new(
        Arc::new(events.clone()),
        Arc::new(clubs.clone()),
        cache,
    );

    let started = std::time::Instant::now();
    let first = handler.execute_at(search("climbing"), now).await?;
    let second = handler.execute_at(search("climbing"), now).await?;
    let feed = trending.execute_at(TrendingQuery, now).await?;

    assert_eq!(first, second);
    assert_eq!(first.events.len(), 4);
    assert_eq!(events.read_calls(), 3);
    assert_eq!(feed.clubs.len(), 1);
    assert!(started.elapsed() < StdDuration::from_secs(10));
    Ok(())
}
