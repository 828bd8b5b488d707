use clubs_models::{ClubChanges, NewClub};
use events_models::{EventChanges, NewEvent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub event: NewEvent,
}

#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: Uuid,
    pub changes: EventChanges,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteEventCommand {
    pub event_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateClubCommand {
    pub club: NewClub,
}

#[derive(Debug, Clone)]
pub struct UpdateClubCommand {
    pub club_id: Uuid,
    pub changes: ClubChanges,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteClubCommand {
    pub club_id: Uuid,
}

/// Kind of record a stored media object belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaOwner {
    Event,
    Club,
    User,
}

/// Raised by the object-storage collaborator once an upload has been
/// stored and linked to its owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadedCommand {
    pub owner: MediaOwner,
    pub owner_id: Uuid,
}
