//! Engagement scoring for trending feeds.
//!
//! Scores are pure functions of an entity's counters and the current time.
//! Elapsed time is measured in whole milliseconds and converted to
//! fractional days, independent of any calendar or timezone.

use chrono::{DateTime, Utc};
use clubs_models::Club;
use events_models::Event;

pub mod rank;

pub use rank::{Ranked, rank_by_score};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const EVENT_ATTENDEE_WEIGHT: f64 = 2.0;
const EVENT_VIEW_WEIGHT: f64 = 0.5;
const EVENT_RECENCY_PEAK: f64 = 50.0;

const CLUB_MEMBER_WEIGHT: f64 = 3.0;
const CLUB_EVENT_WEIGHT: f64 = 1.5;
const CLUB_ACTIVITY_PEAK: f64 = 30.0;

/// Bonus granted over the second window (days 7 to 30).
const TAIL_PEAK: f64 = 10.0;
const NEAR_WINDOW_DAYS: f64 = 7.0;
const FAR_WINDOW_DAYS: f64 = 30.0;

pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Two-tier decaying bonus. Boundaries belong to the inner window and
/// anything outside `[0, 30]` days earns nothing.
fn window_bonus(days: f64, peak: f64) -> f64 {
    if (0.0..=NEAR_WINDOW_DAYS).contains(&days) {
        peak * (1.0 - days / NEAR_WINDOW_DAYS)
    }
    else if days > NEAR_WINDOW_DAYS && days <= FAR_WINDOW_DAYS {
        TAIL_PEAK
            * (1.0
                - (days - NEAR_WINDOW_DAYS)
                    / (FAR_WINDOW_DAYS - NEAR_WINDOW_DAYS))
    }
    else {
        0.0
    }
}

pub fn event_score(
    attendee_count: i64, view_count: i64, start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let base = attendee_count as f64 * EVENT_ATTENDEE_WEIGHT
        + view_count as f64 * EVENT_VIEW_WEIGHT;
    let days_until_start = days_between(now, start_time);

    base + window_bonus(days_until_start, EVENT_RECENCY_PEAK)
}

pub fn club_score(
    member_count: i64, event_count: i64, updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let base = member_count as f64 * CLUB_MEMBER_WEIGHT
        + event_count as f64 * CLUB_EVENT_WEIGHT;
    let days_since_update = days_between(updated_at, now);

    base + window_bonus(days_since_update, CLUB_ACTIVITY_PEAK)
}

pub fn score_event(event: &Event, now: DateTime<Utc>) -> f64 {
    event_score(event.attendee_count, event.view_count, event.start_time, now)
}

pub fn score_club(club: &Club, now: DateTime<Utc>) -> f64 {
    club_score(club.member_count, club.event_count, club.updated_at, now)
}
