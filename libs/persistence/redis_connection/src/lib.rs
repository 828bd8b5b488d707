use deadpool_redis::{Config, CreatePoolError, Pool, PoolConfig, Runtime};
pub use deadpool_redis::{PoolError, redis::RedisError};
use tracing::{info, instrument};
use url::Url;

pub mod cache;
pub mod cache_service;
pub mod codec;
pub mod config;
pub mod core;
pub mod macros;
pub mod pattern;
pub mod store;

pub use cache_service::CacheService;
pub use codec::{FilterDescriptor, NormalizedDescriptor};
pub use store::CacheStore;

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid Redis url: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid Redis port: {0}")]
    Port(u16),
    #[error("Redis url cannot carry credentials")]
    Credentials,
    #[error("Failed to create Redis pool: {0}")]
    Pool(#[from] CreatePoolError),
}

pub fn redis_url<C>(config: &C) -> Result<Url, ConnectError>
where
    C: config::DbConnectConfig,
{
    let mut url = Url::parse("redis://localhost")?;

    url.set_host(Some(config.host()))?;
    url.set_port(Some(config.port()))
        .map_err(|_| ConnectError::Port(config.port()))?;
    if let Some(password) = config.password() {
        url.set_password(Some(password))
            .map_err(|_| ConnectError::Credentials)?;
    }
    url.set_path(&config.db().to_string());

    Ok(url)
}

/// Builds the pool lazily. No connection is opened until the first checkout.
#[instrument(skip_all, name = "connect-redis")]
pub fn connect_redis_db<C>(config: &C) -> Result<Pool, ConnectError>
where
    C: config::DbConnectConfig,
{
    let url = redis_url(config)?;

    info!(
        redis.host = config.host(),
        redis.port = config.port(),
        redis.db = config.db(),
        redis.connect = true
    );

    let cfg = Config {
        url: Some(url.to_string()),
        pool: Some(PoolConfig::new(config.max_conn())),
        connection: None,
    };

    let pool = cfg.create_pool(Some(Runtime::Tokio1))?;
    Ok(pool)
}
