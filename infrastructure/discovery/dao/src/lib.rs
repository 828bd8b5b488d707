mod clubs;
mod events;

pub use clubs::PgClubStore;
use database_traits::StoreError;
pub use events::PgEventStore;
use sql_connection::SqlConnect;
use tracing::instrument;

const SCHEMA: &str = include_str!("schema.sql");

/// Creates the `events` and `clubs` tables and their indexes if missing.
#[instrument(skip_all)]
pub async fn ensure_schema(db: &SqlConnect) -> Result<(), StoreError> {
    let client = db.get_client().await?;
    client.batch_execute(SCHEMA).await?;
    Ok(())
}

/// Case-insensitive substring predicate over `columns`, matching the
/// in-process behaviour of the criteria types.
pub(crate) fn text_predicate(columns: &[&str]) -> String {
    let checks: Vec<String> = columns
        .iter()
        .map(|column| format!("strpos(lower({column}), {{}}) > 0"))
        .collect();
    format!("({})", checks.join(" OR "))
}
