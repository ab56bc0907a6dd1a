//! Calendar month window used for vote deduplication

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Half-open interval `[start, end)` covering one calendar month in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Window for the month containing `instant`
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let (year, month) = (instant.year(), instant.month());
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        Self {
            start: first_of_month(year, month),
            end: first_of_month(next_year, next_month),
        }
    }

    /// Check whether `instant` falls inside the window
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn first_of_month(year: i32, month: u32) -> DateTime<Utc> {
    // Day 1 at midnight exists for every month chrono can represent
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
