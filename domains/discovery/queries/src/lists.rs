use chrono::{DateTime, Utc};
use clubs_models::ClubCriteria;
use events_models::EventCriteria;
use redis_connection::{FilterDescriptor, NormalizedDescriptor};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{ANY, restriction};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

fn page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

fn page_offset(offset: Option<i64>) -> i64 { offset.unwrap_or(0).max(0) }

/// Paged listing of public events. Defaults: `category="all"`, `limit=20`,
/// `offset=0`, `upcoming=true`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventListFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    /// Only events that have not started yet.
    #[serde(default)]
    pub upcoming: Option<bool>,
}

impl EventListFilters {
    pub fn upcoming(&self) -> bool { self.upcoming.unwrap_or(true) }

    pub fn criteria(&self, now: DateTime<Utc>) -> EventCriteria {
        EventCriteria {
            text: None,
            category: restriction(self.category.as_deref()),
            starts_from: self.upcoming().then_some(now),
            starts_until: None,
            public_only: true,
            limit: Some(page_size(self.limit)),
            offset: page_offset(self.offset),
        }
    }
}

impl FilterDescriptor for EventListFilters {
    fn normalize(&self) -> NormalizedDescriptor {
        NormalizedDescriptor::new()
            .field("category", restriction(self.category.as_deref()), ANY)
            .field("limit", Some(page_size(self.limit)), "")
            .field("offset", Some(page_offset(self.offset)), "")
            .field("upcoming", Some(self.upcoming()), "")
    }
}

/// Paged listing of clubs. Defaults: `category="all"`, `verified="all"`,
/// `limit=20`, `offset=0`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClubListFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ClubListFilters {
    pub fn criteria(&self) -> ClubCriteria {
        ClubCriteria {
            text: None,
            category: restriction(self.category.as_deref()),
            verified: self.verified,
            limit: Some(page_size(self.limit)),
            offset: page_offset(self.offset),
        }
    }
}

impl FilterDescriptor for ClubListFilters {
    fn normalize(&self) -> NormalizedDescriptor {
        NormalizedDescriptor::new()
            .field("category", restriction(self.category.as_deref()), ANY)
            .field("verified", self.verified, ANY)
            .field("limit", Some(page_size(self.limit)), "")
            .field("offset", Some(page_offset(self.offset)), "")
    }
}
