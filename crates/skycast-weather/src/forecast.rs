//! Reduce the 3-hour forecast to one entry per calendar day.

use std::collections::HashSet;

use chrono::{Local, TimeZone};

use crate::types::ForecastEntry;

/// Number of days shown
pub const FORECAST_DAYS: usize = 5;

/// Pick the first entry of each calendar date, in order of first appearance,
/// and keep at most [`FORECAST_DAYS`] of them.
///
/// Dates are taken in `tz`. Later entries for an already-seen date are
/// dropped even when they are not adjacent to the first one.
pub fn daily_forecast<Tz: TimeZone>(entries: &[ForecastEntry], tz: &Tz) -> Vec<ForecastEntry> {
    let mut seen = HashSet::new();
    let mut days = Vec::with_capacity(FORECAST_DAYS);

    for entry in entries {
        if days.len() == FORECAST_DAYS {
            break;
        }
        let date = entry.timestamp.with_timezone(tz).date_naive();
        if seen.insert(date) {
            days.push(entry.clone());
        }
    }

    days
}

/// [`daily_forecast`] in the host's local time zone
pub fn daily_forecast_local(entries: &[ForecastEntry]) -> Vec<ForecastEntry> {
    daily_forecast(entries, &Local)
}
