use async_trait::async_trait;
use chrono::Utc;
use dao_utils::FilterQuery;
use database_traits::{GenericDao, StoreError};
use events_models::{Event, EventChanges, EventCriteria, EventStore, NewEvent};
use sql_connection::SqlConnect;
use tokio_postgres::Row;
use tracing::instrument;
use uuid::Uuid;

use crate::text_predicate;

const COLUMNS: &str = "id, title, description, category, location, \
                       start_time, end_time, is_public, club_id, \
                       attendee_count, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PgEventStore {
    db: SqlConnect,
}

impl PgEventStore {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &Row) -> Result<Event, StoreError> {
        Ok(Event {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            location: row.try_get("location")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            is_public: row.try_get("is_public")?,
            club_id: row.try_get("club_id")?,
            attendee_count: row.try_get("attendee_count")?,
            view_count: row.try_get("view_count")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl GenericDao for PgEventStore {
    type CreateRequest = NewEvent;
    type ID = Uuid;
    type Model = Event;
    type UpdateRequest = EventChanges;

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Event, StoreError> {
        let client = self.db.get_read_client().await?;
        let stmt = client
            .prepare_cached(&format!(
                "SELECT {COLUMNS} FROM events WHERE id = $1"
            ))
            .await?;

        let row = client
            .query_opt(&stmt, &[&id])
            .await?
            .ok_or_else(|| StoreError::not_found("Event", id))?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn create(&self, req: NewEvent) -> Result<Event, StoreError> {
        let event = Event::from_new(req, Utc::now());
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare_cached(&format!(
                "INSERT INTO events ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, \
                 $6, $7, $8, $9, $10, $11, $12, $13) RETURNING {COLUMNS}"
            ))
            .await?;

        let row = client
            .query_one(&stmt, &[
                &event.id,
                &event.title,
                &event.description,
                &event.category,
                &event.location,
                &event.start_time,
                &event.end_time,
                &event.is_public,
                &event.club_id,
                &event.attendee_count,
                &event.view_count,
                &event.created_at,
                &event.updated_at,
            ])
            .await?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn update(
        &self, id: Uuid, req: EventChanges,
    ) -> Result<Event, StoreError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare_cached(&format!(
                "UPDATE events SET title = COALESCE($2, title), description \
                 = COALESCE($3, description), category = COALESCE($4, \
                 category), location = COALESCE($5, location), start_time = \
                 COALESCE($6, start_time), end_time = COALESCE($7, \
                 end_time), is_public = COALESCE($8, is_public), updated_at \
                 = now() WHERE id = $1 RETURNING {COLUMNS}"
            ))
            .await?;

        let row = client
            .query_opt(&stmt, &[
                &id,
                &req.title,
                &req.description,
                &req.category,
                &req.location,
                &req.start_time,
                &req.end_time,
                &req.is_public,
            ])
            .await?
            .ok_or_else(|| StoreError::not_found("Event", id))?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let client = self.db.get_client().await?;
        let affected = client
            .execute("DELETE FROM events WHERE id = $1", &[&id])
            .await?;

        if affected == 0 {
            return Err(StoreError::not_found("Event", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    #[instrument(skip(self))]
    async fn search(
        &self, criteria: &EventCriteria,
    ) -> Result<Vec<Event>, StoreError> {
        let mut query = FilterQuery::new();

        if criteria.public_only {
            query.raw("is_public");
        }
        if let Some(category) = &criteria.category {
            query.bind("category = {}", category.clone());
        }
        if let Some(from) = criteria.starts_from {
            query.bind("start_time >= {}", from);
        }
        if let Some(until) = criteria.starts_until {
            query.bind("start_time <= {}", until);
        }
        if let Some(text) = criteria.text.as_deref().filter(|t| !t.is_empty()) {
            query.bind(
                &text_predicate(&["title", "description"]),
                text.to_lowercase(),
            );
        }

        let filter = query.where_clause();
        let page = query.page(criteria.limit, criteria.offset);
        let sql = format!(
            "SELECT {COLUMNS} FROM events{filter} ORDER BY start_time ASC, \
             id ASC{page}"
        );

        let client = self.db.get_read_client().await?;
        let rows = client.query(sql.as_str(), &query.param_refs()).await?;

        rows.iter().map(Self::map_row).collect()
    }
}
