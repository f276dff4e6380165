//! Inclusive interval arithmetic for activity scheduling.
//!
//! The single overlap rule used everywhere (listing filters and the
//! availability engine): two intervals intersect when
//! `a.start <= b.end AND a.end >= b.start`, endpoints included. An
//! activity spanning several days therefore shows up in every day it
//! touches.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Inclusive overlap between an activity interval and a query interval.
///
/// An open-ended activity (`a_end` is `None`) is treated as occupying
/// its start instant only, matching `COALESCE(ends_at, starts_at)` in
/// the SQL filters.
pub fn overlaps(
    a_start: Timestamp,
    a_end: Option<Timestamp>,
    b_start: Timestamp,
    b_end: Timestamp,
) -> bool {
    a_start <= b_end && a_end.unwrap_or(a_start) >= b_start
}

/// Full-day UTC bounds for a civil date: `[00:00:00, 23:59:59]`.
///
/// The availability engine queries overlap against these bounds, so an
/// activity touching any second of the day marks its resources busy.
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let end = Utc.from_utc_datetime(
        &date.and_time(NaiveTime::from_hms_opt(23, 59, 59).expect("valid time")),
    );
    (start, end)
}
