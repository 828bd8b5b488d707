use std::fmt;

use chrono::{DateTime, Days, Duration, Months, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Start-time window for discover searches, anchored at the request time.
/// Both ends are inclusive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// Until the end of the current UTC calendar day.
    Today,
    Week,
    /// Until the same instant one calendar month later.
    Month,
    #[default]
    Upcoming,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Upcoming => "upcoming",
        }
    }

    /// `(from, until)`; `until` is `None` for an open-ended window.
    pub fn bounds(
        &self, now: DateTime<Utc>,
    ) -> (DateTime<Utc>, Option<DateTime<Utc>>) {
        let until = match self {
            Self::Today => {
                now.date_naive()
                    .checked_add_days(Days::new(1))
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|midnight| {
                        midnight.and_utc() - Duration::milliseconds(1)
                    })
            }
            Self::Week => now.checked_add_signed(Duration::days(7)),
            Self::Month => now.checked_add_months(Months::new(1)),
            Self::Upcoming => None,
        };
        (now, until)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
