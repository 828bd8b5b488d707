pub mod date_range;
pub mod discover;
pub mod lists;

use serde::Deserialize;
use uuid::Uuid;

pub use date_range::DateRange;
pub use discover::{DiscoverFilters, EntityType};
pub use lists::{ClubListFilters, EventListFilters};

/// Sentinel meaning "no restriction" for string filters.
pub const ANY: &str = "all";

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct TrendingQuery;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetEventQuery {
    pub event_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GetClubQuery {
    pub club_id: Uuid,
}

/// Treats a missing, empty or `"all"` value as no restriction.
pub(crate) fn restriction(value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        None | Some("") => None,
        Some(v) if v.eq_ignore_ascii_case(ANY) => None,
        Some(v) => Some(v.to_string()),
    }
}

/// Free text has no sentinel: only blank input means no restriction.
pub(crate) fn text_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
