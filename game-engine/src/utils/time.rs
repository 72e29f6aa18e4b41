use chrono::{DateTime, Utc};

/// True when both instants fall on the same UTC calendar day.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True when `earlier` falls on exactly the calendar day before `now`.
pub fn is_previous_calendar_day(earlier: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match now.date_naive().pred_opt() {
        Some(yesterday) => earlier.date_naive() == yesterday,
        None => false,
    }
}
