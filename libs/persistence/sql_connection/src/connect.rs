use deadpool_postgres::{Object, Pool, PoolError};

/// Handle to the primary pool and an optional read replica. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SqlConnect {
    pool: Pool,
    read_pool: Option<Pool>,
}

impl SqlConnect {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
            read_pool: None,
        }
    }

    pub fn new_with_read_replica(pool: Pool, read_pool: Pool) -> Self {
        Self {
            pool,
            read_pool: Some(read_pool),
        }
    }

    /// Get connection for write operations (always uses primary database)
    pub async fn get_client(&self) -> Result<Object, PoolError> {
        self.pool.get().await
    }

    /// Get connection for read operations (uses read replica if available)
    pub async fn get_read_client(&self) -> Result<Object, PoolError> {
        match &self.read_pool {
            Some(read_pool) => read_pool.get().await,
            None => self.pool.get().await,
        }
    }

    pub fn has_read_replica(&self) -> bool { self.read_pool.is_some() }
}
