use std::fmt;

use chrono::{DateTime, Utc};
use clubs_models::ClubCriteria;
use events_models::EventCriteria;
use redis_connection::{FilterDescriptor, NormalizedDescriptor};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{ANY, DateRange, restriction, text_filter};

/// Upper bound on each result list of a discover search.
pub const DISCOVER_RESULT_CAP: i64 = 50;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Events,
    Clubs,
    #[default]
    All,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Clubs => "clubs",
            Self::All => ANY,
        }
    }

    pub fn includes_events(&self) -> bool { !matches!(self, Self::Clubs) }

    pub fn includes_clubs(&self) -> bool { !matches!(self, Self::Events) }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text discovery over events and clubs.
///
/// Every field is optional; absent fields normalize to
/// `query=""`, `type="all"`, `category="all"` and `dateRange="upcoming"`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DiscoverFilters {
    #[serde(default, rename = "q")]
    pub query: Option<String>,
    #[serde(default, rename = "type")]
    pub entity_type: Option<EntityType>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl DiscoverFilters {
    pub fn entity_type(&self) -> EntityType {
        self.entity_type.unwrap_or_default()
    }

    pub fn date_range(&self) -> DateRange { self.date_range.unwrap_or_default() }

    /// Public events whose start time falls inside the date range.
    pub fn event_criteria(&self, now: DateTime<Utc>) -> EventCriteria {
        let (from, until) = self.date_range().bounds(now);
        EventCriteria {
            text: text_filter(self.query.as_deref()),
            category: restriction(self.category.as_deref()),
            starts_from: Some(from),
            starts_until: until,
            public_only: true,
            limit: Some(DISCOVER_RESULT_CAP),
            offset: 0,
        }
    }

    /// Date ranges do not apply to clubs.
    pub fn club_criteria(&self) -> ClubCriteria {
        ClubCriteria {
            text: text_filter(self.query.as_deref()),
            category: restriction(self.category.as_deref()),
            verified: None,
            limit: Some(DISCOVER_RESULT_CAP),
            offset: 0,
        }
    }
}

impl FilterDescriptor for DiscoverFilters {
    fn normalize(&self) -> NormalizedDescriptor {
        NormalizedDescriptor::new()
            .field("query", text_filter(self.query.as_deref()), "")
            .field("type", self.entity_type, EntityType::All.as_str())
            .field("category", restriction(self.category.as_deref()), ANY)
            .field("dateRange", self.date_range, DateRange::Upcoming.as_str())
    }
}
