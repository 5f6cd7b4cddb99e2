//! Whole years of service, anchored to the calendar anniversary.

use chrono::{Datelike, NaiveDate};

/// Full years between `joined` and `now`.
///
/// The year only counts once the month/day anniversary has been reached.
/// Join dates after `now` yield 0.
pub fn years_worked(joined: NaiveDate, now: NaiveDate) -> u32 {
    let mut years = now.year() - joined.year();

    if (now.month(), now.day()) < (joined.month(), joined.day()) {
        years -= 1;
    }

    years.max(0) as u32
}
