// src/transform/date.rs

use chrono::{Month, NaiveDate};
use tracing::trace;

/// Build a date from a day-of-month cell, a month-name cell and a fixed year.
///
/// `month` accepts full English names, three-letter abbreviations and `sept`,
/// in any case. Returns `None` for anything that does not resolve to a real
/// calendar date (unknown month, day 0, Feb 30, ...).
pub fn contact_date(day: Option<&str>, month: Option<&str>, year: i32) -> Option<NaiveDate> {
    let day: u32 = day?.trim().parse().ok()?;
    let month = month?.trim();
    let month: Month = if month.eq_ignore_ascii_case("sept") {
        Month::September
    } else {
        month.parse().ok()?
    };
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

/// `contact_date` rendered as `YYYY-MM-DD`.
pub fn last_contact_date(day: Option<&str>, month: Option<&str>, year: i32) -> Option<String> {
    let date = contact_date(day, month, year);
    if date.is_none() {
        trace!(?day, ?month, year, "no calendar date for day/month");
    }
    date.map(|d| d.format("%Y-%m-%d").to_string())
}
