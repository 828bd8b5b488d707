//! Mutation handlers. Each delegates persistence to the store and, only
//! once the store call has succeeded, drops every cache namespace the
//! mutation can have made stale.

pub mod clubs;
pub mod events;
pub mod media;

use discovery_cache_keys::ResourceType;
use redis_connection::CacheService;
use tracing::debug;

pub use clubs::{CreateClubHandler, DeleteClubHandler, UpdateClubHandler};
pub use events::{CreateEventHandler, DeleteEventHandler, UpdateEventHandler};
pub use media::MediaUploadedHandler;

pub(crate) async fn invalidate_for(cache: &CacheService, resource: ResourceType) {
    let namespaces = resource.affected_namespaces();
    debug!(resource = %resource, ?namespaces, "invalidating after mutation");
    cache.invalidate_all(namespaces).await;
}
