pub use config::{DbConnectConfig, DbOptionsConfig, PostgresDbConfig};
pub use connect::SqlConnect;
pub use deadpool_postgres::PoolError;
pub use tokio_postgres::Error as PgError;

pub mod config;
mod connect;
mod pool;

pub use pool::connect_postgres_db;
