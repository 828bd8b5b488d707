use async_trait::async_trait;
use chrono::Utc;
use clubs_models::{Club, ClubChanges, ClubCriteria, ClubStore, NewClub};
use dao_utils::FilterQuery;
use database_traits::{GenericDao, StoreError};
use sql_connection::SqlConnect;
use tokio_postgres::Row;
use tracing::instrument;
use uuid::Uuid;

use crate::text_predicate;

const COLUMNS: &str = "id, name, description, category, is_verified, \
                       member_count, event_count, created_at, updated_at";

#[derive(Clone)]
pub struct PgClubStore {
    db: SqlConnect,
}

impl PgClubStore {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &Row) -> Result<Club, StoreError> {
        Ok(Club {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            is_verified: row.try_get("is_verified")?,
            member_count: row.try_get("member_count")?,
            event_count: row.try_get("event_count")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl GenericDao for PgClubStore {
    type CreateRequest = NewClub;
    type ID = Uuid;
    type Model = Club;
    type UpdateRequest = ClubChanges;

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Club, StoreError> {
        let client = self.db.get_read_client().await?;
        let stmt = client
            .prepare_cached(&format!("SELECT {COLUMNS} FROM clubs WHERE id = $1"))
            .await?;

        let row = client
            .query_opt(&stmt, &[&id])
            .await?
            .ok_or_else(|| StoreError::not_found("Club", id))?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn create(&self, req: NewClub) -> Result<Club, StoreError> {
        let club = Club::from_new(req, Utc::now());
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare_cached(&format!(
                "INSERT INTO clubs ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, \
                 $6, $7, $8, $9) RETURNING {COLUMNS}"
            ))
            .await?;

        let row = client
            .query_one(&stmt, &[
                &club.id,
                &club.name,
                &club.description,
                &club.category,
                &club.is_verified,
                &club.member_count,
                &club.event_count,
                &club.created_at,
                &club.updated_at,
            ])
            .await?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn update(
        &self, id: Uuid, req: ClubChanges,
    ) -> Result<Club, StoreError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare_cached(&format!(
                "UPDATE clubs SET name = COALESCE($2, name), description = \
                 COALESCE($3, description), category = COALESCE($4, \
                 category), is_verified = COALESCE($5, is_verified), \
                 updated_at = now() WHERE id = $1 RETURNING {COLUMNS}"
            ))
            .await?;

        let row = client
            .query_opt(&stmt, &[
                &id,
                &req.name,
                &req.description,
                &req.category,
                &req.is_verified,
            ])
            .await?
            .ok_or_else(|| StoreError::not_found("Club", id))?;

        Self::map_row(&row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let client = self.db.get_client().await?;
        let affected = client
            .execute("DELETE FROM clubs WHERE id = $1", &[&id])
            .await?;

        if affected == 0 {
            return Err(StoreError::not_found("Club", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ClubStore for PgClubStore {
    #[instrument(skip(self))]
    async fn search(
        &self, criteria: &ClubCriteria,
    ) -> Result<Vec<Club>, StoreError> {
        let mut query = FilterQuery::new();

        if let Some(verified) = criteria.verified {
            query.bind("is_verified = {}", verified);
        }
        if let Some(category) = &criteria.category {
            query.bind("category = {}", category.clone());
        }
        if let Some(text) = criteria.text.as_deref().filter(|t| !t.is_empty()) {
            query.bind(
                &text_predicate(&["name", "description"]),
                text.to_lowercase(),
            );
        }

        let filter = query.where_clause();
        let page = query.page(criteria.limit, criteria.offset);
        let sql = format!(
            "SELECT {COLUMNS} FROM clubs{filter} ORDER BY member_count DESC, \
             id ASC{page}"
        );

        let client = self.db.get_read_client().await?;
        let rows = client.query(sql.as_str(), &query.param_refs()).await?;

        rows.iter().map(Self::map_row).collect()
    }
}
