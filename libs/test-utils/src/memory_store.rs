//! In-memory document stores with call counters, standing in for the
//! PostgreSQL store in handler and route tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use clubs_models::{Club, ClubChanges, ClubCriteria, ClubStore, NewClub};
use database_traits::{GenericDao, StoreError};
use events_models::{Event, EventChanges, EventCriteria, EventStore, NewEvent};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Spy {
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail: AtomicBool,
}

impl Spy {
    fn read(&self) -> Result<(), StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    fn write(&self) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("store offline".into()));
        }
        Ok(())
    }
}

fn page<T>(items: Vec<T>, offset: i64, limit: Option<i64>) -> Vec<T> {
    let skipped = items.into_iter().skip(offset.max(0) as usize);
    match limit {
        Some(limit) => skipped.take(limit.max(0) as usize).collect(),
        None => skipped.collect(),
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
    spy: Arc<Spy>,
}

impl InMemoryEventStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
            spy: Arc::default(),
        }
    }

    /// Number of `find_by_id` and `search` calls so far.
    pub fn read_calls(&self) -> usize { self.spy.reads.load(Ordering::SeqCst) }

    pub fn write_calls(&self) -> usize {
        self.spy.writes.load(Ordering::SeqCst)
    }

    /// Every subsequent call fails with a connection error until reset.
    pub fn set_failing(&self, failing: bool) {
        self.spy.fail.store(failing, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Vec<Event> { self.events.read().await.clone() }
}

#[async_trait]
impl GenericDao for InMemoryEventStore {
    type CreateRequest = NewEvent;
    type ID = Uuid;
    type Model = Event;
    type UpdateRequest = EventChanges;

    async fn find_by_id(&self, id: Uuid) -> Result<Event, StoreError> {
        self.spy.read()?;
        self.events
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Event", id))
    }

    async fn create(&self, req: NewEvent) -> Result<Event, StoreError> {
        self.spy.write()?;
        let event = Event::from_new(req, Utc::now());
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn update(
        &self, id: Uuid, req: EventChanges,
    ) -> Result<Event, StoreError> {
        self.spy.write()?;
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("Event", id))?;
        event.apply(req, Utc::now());
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.spy.write()?;
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(StoreError::not_found("Event", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn search(
        &self, criteria: &EventCriteria,
    ) -> Result<Vec<Event>, StoreError> {
        self.spy.read()?;
        let mut matches: Vec<Event> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| criteria.matches(e))
            .cloned()
            .collect();
        matches.sort_by_key(|e| e.start_time);
        Ok(page(matches, criteria.offset, criteria.limit))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryClubStore {
    clubs: Arc<RwLock<Vec<Club>>>,
    spy: Arc<Spy>,
}

impl InMemoryClubStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_clubs(clubs: Vec<Club>) -> Self {
        Self {
            clubs: Arc::new(RwLock::new(clubs)),
            spy: Arc::default(),
        }
    }

    pub fn read_calls(&self) -> usize { self.spy.reads.load(Ordering::SeqCst) }

    pub fn write_calls(&self) -> usize {
        self.spy.writes.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.spy.fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl GenericDao for InMemoryClubStore {
    type CreateRequest = NewClub;
    type ID = Uuid;
    type Model = Club;
    type UpdateRequest = ClubChanges;

    async fn find_by_id(&self, id: Uuid) -> Result<Club, StoreError> {
        self.spy.read()?;
        self.clubs
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Club", id))
    }

    async fn create(&self, req: NewClub) -> Result<Club, StoreError> {
        self.spy.write()?;
        let club = Club::from_new(req, Utc::now());
        self.clubs.write().await.push(club.clone());
        Ok(club)
    }

    async fn update(
        &self, id: Uuid, req: ClubChanges,
    ) -> Result<Club, StoreError> {
        self.spy.write()?;
        let mut clubs = self.clubs.write().await;
        let club = clubs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Club", id))?;
        club.apply(req, Utc::now());
        Ok(club.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.spy.write()?;
        let mut clubs = self.clubs.write().await;
        let before = clubs.len();
        clubs.retain(|c| c.id != id);
        if clubs.len() == before {
            return Err(StoreError::not_found("Club", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ClubStore for InMemoryClubStore {
    async fn search(
        &self, criteria: &ClubCriteria,
    ) -> Result<Vec<Club>, StoreError> {
        self.spy.read()?;
        let mut matches: Vec<Club> = self
            .clubs
            .read()
            .await
            .iter()
            .filter(|c| criteria.matches(c))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.member_count.cmp(&a.member_count));
        Ok(page(matches, criteria.offset, criteria.limit))
    }
}
