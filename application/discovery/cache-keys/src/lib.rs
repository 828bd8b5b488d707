use std::{fmt, time::Duration};

use clubs_models::Club;
use discovery_responses::{DiscoverResponse, TrendingResponse};
use events_models::Event;
use redis_connection::cache_key;
use serde::Deserialize;
use uuid::Uuid;

pub const LIST_TTL: Duration = Duration::from_secs(300);
pub const DETAIL_TTL: Duration = Duration::from_secs(600);
pub const DISCOVER_TTL: Duration = Duration::from_secs(300);
pub const TRENDING_TTL: Duration = Duration::from_secs(600);

/// Top-level cache namespaces. Every key starts with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Events,
    Clubs,
    Users,
    Discover,
    Trending,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Clubs => "clubs",
            Self::Users => "users",
            Self::Discover => "discover",
            Self::Trending => "trending",
        }
    }

    /// Namespaces that can hold data derived from this resource. Events and
    /// clubs feed the discover and trending views; users feed nothing else.
    pub fn affected_namespaces(&self) -> &'static [ResourceType] {
        match self {
            Self::Events => &[Self::Events, Self::Discover, Self::Trending],
            Self::Clubs => &[Self::Clubs, Self::Discover, Self::Trending],
            Self::Users => &[Self::Users],
            Self::Discover => &[Self::Discover],
            Self::Trending => &[Self::Trending],
        }
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

cache_key!(EventDetailCacheKey::<Event> => "events":"detail"[id: Uuid]);
cache_key!(EventListCacheKey::<Vec<Event>> => "events":"list"[filter_hash: String]);
cache_key!(ClubDetailCacheKey::<Club> => "clubs":"detail"[id: Uuid]);
cache_key!(ClubListCacheKey::<Vec<Club>> => "clubs":"list"[filter_hash: String]);
cache_key!(DiscoverCacheKey::<DiscoverResponse> => "discover":"search"[filter_hash: String]);
cache_key!(TrendingCacheKey::<TrendingResponse> => "trending":"feed":"global");

#[cfg(test)]
mod tests {
    use redis_connection::core::CacheKey;

    use super::*;

    #[test]
    fn test_key_shapes() {
        let id = Uuid::nil();
        let hash = "3f2a".to_string();

        assert_eq!(
            EventDetailCacheKey.get_key_with_args((&id,)),
            format!("events:detail:{id}")
        );
        assert_eq!(
            ClubListCacheKey.get_key_with_args((&hash,)),
            "clubs:list:3f2a"
        );
        assert_eq!(
            DiscoverCacheKey.get_key_with_args((&hash,)),
            "discover:search:3f2a"
        );
        assert_eq!(TrendingCacheKey.get_key(), "trending:feed:global");
    }

    #[test]
    fn test_keys_live_in_their_namespace() {
        assert_eq!(EventDetailCacheKey::RESOURCE, ResourceType::Events.as_str());
        assert_eq!(EventListCacheKey::RESOURCE, ResourceType::Events.as_str());
        assert_eq!(ClubDetailCacheKey::RESOURCE, ResourceType::Clubs.as_str());
        assert_eq!(ClubListCacheKey::RESOURCE, ResourceType::Clubs.as_str());
        assert_eq!(DiscoverCacheKey::RESOURCE, ResourceType::Discover.as_str());
        assert_eq!(TrendingCacheKey::RESOURCE, ResourceType::Trending.as_str());
    }

    #[test]
    fn test_event_mutations_reach_derived_views() {
        let affected = ResourceType::Events.affected_namespaces();

        assert!(affected.contains(&ResourceType::Discover));
        assert!(affected.contains(&ResourceType::Trending));
        assert!(!affected.contains(&ResourceType::Clubs));
        assert_eq!(ResourceType::Users.affected_namespaces(), &[
            ResourceType::Users
        ]);
    }
}
