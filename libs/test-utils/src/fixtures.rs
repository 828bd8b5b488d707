use chrono::{DateTime, Duration, TimeZone, Utc};
use clubs_models::Club;
use events_models::Event;

/// A fixed reference instant so date-window tests do not straddle midnight.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 12, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn event_starting_at(title: &str, start_time: DateTime<Utc>) -> Event {
    Event::builder()
        .title(title)
        .description(format!("{title} on campus"))
        .category("general")
        .start_time(start_time)
        .build()
}

pub fn event_with_engagement(
    title: &str, start_time: DateTime<Utc>, attendees: i64, views: i64,
) -> Event {
    Event::builder()
        .title(title)
        .description(format!("{title} on campus"))
        .category("general")
        .start_time(start_time)
        .attendee_count(attendees)
        .view_count(views)
        .build()
}

/// `count` public events matching `title`, one hour apart, in reverse start
/// order.
pub fn events_hours_apart(
    title: &str, count: usize, from: DateTime<Utc>,
) -> Vec<Event> {
    (0..count)
        .rev()
        .map(|i| {
            event_starting_at(
                &format!("{title} #{i}"),
                from + Duration::hours(i as i64 + 1),
            )
        })
        .collect()
}

pub fn club(name: &str, members: i64, verified: bool) -> Club {
    Club::builder()
        .name(name)
        .description(format!("The {name}"))
        .category("general")
        .member_count(members)
        .is_verified(verified)
        .build()
}
