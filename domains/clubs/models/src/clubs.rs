use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

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
pub struct Club {
    #[builder(default = Uuid::now_v7())]
    pub id: Uuid,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(setter(into))]
    pub category: String,
    #[builder(default)]
    pub is_verified: bool,
    #[builder(default)]
    pub member_count: i64,
    #[builder(default)]
    pub event_count: i64,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    /// Last activity on the club; drives the activity bonus when ranking.
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, TypedBuilder, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    #[builder(setter(into))]
    pub name: String,
    #[serde(default)]
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(setter(into))]
    pub category: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_verified: Option<bool>,
}

impl Club {
    pub fn from_new(req: NewClub, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: req.name,
            description: req.description,
            category: req.category,
            is_verified: false,
            member_count: 0,
            event_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: ClubChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(is_verified) = changes.is_verified {
            self.is_verified = is_verified;
        }
        self.updated_at = now;
    }
}
