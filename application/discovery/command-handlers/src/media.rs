use discovery_cache_keys::ResourceType;
use discovery_commands::{MediaOwner, MediaUploadedCommand};
use redis_connection::CacheService;
use tracing::instrument;

use crate::invalidate_for;

fn owner_resource(owner: MediaOwner) -> ResourceType {
    match owner {
        MediaOwner::Event => ResourceType::Events,
        MediaOwner::Club => ResourceType::Clubs,
        MediaOwner::User => ResourceType::Users,
    }
}

/// Invalidation hook for the object-storage collaborator. Persisting the
/// upload itself happens before this runs.
#[derive(Clone)]
pub struct MediaUploadedHandler {
    cache: CacheService,
}

impl MediaUploadedHandler {
    pub fn new(cache: CacheService) -> Self { Self { cache } }

    #[instrument(skip(self))]
    pub async fn execute(&self, command: MediaUploadedCommand) {
        invalidate_for(&self.cache, owner_resource(command.owner)).await;
    }
}
