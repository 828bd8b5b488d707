pub mod cache;
pub mod fixtures;
pub mod memory_store;
pub mod redis;

pub use cache::{memory_cache, unreachable_cache};
pub use fixtures::*;
pub use memory_store::{InMemoryClubStore, InMemoryEventStore};
pub use redis::TestRedisContainer;

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}
