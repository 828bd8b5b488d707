use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

/// A campus event together with its engagement counters.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[builder(default = Uuid::now_v7())]
    pub id: Uuid,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(setter(into))]
    pub category: String,
    #[builder(default, setter(strip_option, into))]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    #[builder(default, setter(strip_option))]
    pub end_time: Option<DateTime<Utc>>,
    #[builder(default = true)]
    pub is_public: bool,
    #[builder(default, setter(strip_option))]
    pub club_id: Option<Uuid>,
    #[builder(default)]
    pub attendee_count: i64,
    #[builder(default)]
    pub view_count: i64,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, TypedBuilder, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[builder(setter(into))]
    pub title: String,
    #[serde(default)]
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(setter(into))]
    pub category: String,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default = "public_default")]
    #[builder(default = true)]
    pub is_public: bool,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub club_id: Option<Uuid>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_public: Option<bool>,
}

fn public_default() -> bool { true }

impl Event {
    /// Materializes a stored record from a creation request.
    pub fn from_new(req: NewEvent, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: req.title,
            description: req.description,
            category: req.category,
            location: req.location,
            start_time: req.start_time,
            end_time: req.end_time,
            is_public: req.is_public,
            club_id: req.club_id,
            attendee_count: 0,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: EventChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
        if let Some(start_time) = changes.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = changes.end_time {
            self.end_time = Some(end_time);
        }
        if let Some(is_public) = changes.is_public {
            self.is_public = is_public;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let event = Event::builder()
            .title("Robotics night")
            .category("tech")
            .start_time(Utc::now())
            .attendee_count(3)
            .build();

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["attendeeCount"], 3);
        assert_eq!(json["isPublic"], true);
        assert!(json.get("startTime").is_some());
        assert!(json.get("start_time").is_none());
    }

    #[test]
    fn test_apply_changes_only_given_fields() {
        let start = Utc::now();
        let mut event = Event::builder()
            .title("Chess")
            .description("weekly")
            .category("games")
            .start_time(start)
            .build();
        let later = start + Duration::hours(1);

        event.apply(
            EventChanges {
                title: Some("Blitz chess".into()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(event.title, "Blitz chess");
        assert_eq!(event.description, "weekly");
        assert_eq!(event.start_time, start);
        assert_eq!(event.updated_at, later);
    }

    #[test]
    fn test_new_event_defaults_to_public() {
        let req: NewEvent = serde_json::from_str(
            r#"{"title":"Jam","category":"music","startTime":"2030-01-01T10:00:00Z"}"#,
        )
        .unwrap();

        let event = Event::from_new(req, Utc::now());

        assert!(event.is_public);
        assert_eq!(event.attendee_count, 0);
    }
}
