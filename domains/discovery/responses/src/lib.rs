use clubs_models::Club;
use engagement::Ranked;
use events_models::Event;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendingEvent {
    #[serde(flatten)]
    pub event: Event,
    pub trending_score: f64,
}

impl From<Ranked<Event>> for TrendingEvent {
    fn from(ranked: Ranked<Event>) -> Self {
        Self {
            event: ranked.item,
            trending_score: ranked.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendingClub {
    #[serde(flatten)]
    pub club: Club,
    pub trending_score: f64,
}

impl From<Ranked<Club>> for TrendingClub {
    fn from(ranked: Ranked<Club>) -> Self {
        Self {
            club: ranked.item,
            trending_score: ranked.score,
        }
    }
}

/// Highest-scoring upcoming public events and verified clubs, best first.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema,
)]
pub struct TrendingResponse {
    pub events: Vec<TrendingEvent>,
    pub clubs: Vec<TrendingClub>,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
pub struct DiscoverResponse {
    pub events: Vec<Event>,
    pub clubs: Vec<Club>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_trending_entry_is_flat() {
        let event = Event::builder()
            .title("Hack night")
            .category("tech")
            .start_time(Utc::now())
            .build();
        let entry = TrendingEvent::from(Ranked {
            item: event.clone(),
            score: 42.5,
        });

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["trendingScore"], 42.5);
        assert_eq!(json["title"], "Hack night");
        assert_eq!(json["id"], event.id.to_string());

        let back: TrendingEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
