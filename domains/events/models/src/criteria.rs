use chrono::{DateTime, Utc};

use crate::Event;

/// Search predicates understood by an [`EventStore`](crate::EventStore).
///
/// `text` is a case-insensitive substring over title and description,
/// `category` is an exact match, and the start-time bounds are inclusive.
/// Matches are ordered by start time ascending before `offset` and `limit`
/// apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCriteria {
    pub text: Option<String>,
    pub category: Option<String>,
    pub starts_from: Option<DateTime<Utc>>,
    pub starts_until: Option<DateTime<Utc>>,
    pub public_only: bool,
    pub limit: Option<i64>,
    pub offset: i64,
}

impl EventCriteria {
    pub fn matches(&self, event: &Event) -> bool {
        if self.public_only && !event.is_public {
            return false;
        }
        if let Some(category) = &self.category {
            if &event.category != category {
                return false;
            }
        }
        if let Some(from) = self.starts_from {
            if event.start_time < from {
                return false;
            }
        }
        if let Some(until) = self.starts_until {
            if event.start_time > until {
                return false;
            }
        }
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                event.title.to_lowercase().contains(&needle)
                    || event.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}
