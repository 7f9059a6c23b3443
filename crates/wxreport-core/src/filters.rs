//! Time-window filters applied to the hourly forecast and the alert list.

use chrono::{DateTime, Datelike, Utc};

use crate::types::{Alert, ForecastPeriod};

/// How a forecast period is matched against "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayMatch {
    /// Compare full calendar dates in the period's own UTC offset.
    #[default]
    CalendarDate,
    /// Compare only the day-of-month numbers. Near a month boundary this
    /// keeps periods from the next month (e.g. the 1st when today is the
    /// 31st).
    DayOfMonth,
}

impl std::fmt::Display for DayMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayMatch::CalendarDate => write!(f, "calendar-date"),
            DayMatch::DayOfMonth => write!(f, "day-of-month"),
        }
    }
}

/// Keeps the forecast periods that fall on or before today, in input order.
///
/// "Today" is `now` seen in each period's own UTC offset, so a forecast for
/// a distant location is cut at that location's midnight. Periods earlier in
/// the day are kept; only later days are dropped. Each period is judged on
/// its own, so an out-of-order sequence is filtered rather than truncated.
#[must_use]
pub fn filter_today(
    periods: Vec<ForecastPeriod>,
    now: DateTime<Utc>,
    day_match: DayMatch,
) -> Vec<ForecastPeriod> {
    periods
        .into_iter()
        .filter(|period| {
            let local_now = now.with_timezone(period.start_time.offset());
            match day_match {
                DayMatch::CalendarDate => {
                    period.start_time.date_naive() <= local_now.date_naive()
                }
                DayMatch::DayOfMonth => period.start_time.day() <= local_now.day(),
            }
        })
        .collect()
}

/// Drops alerts whose expiry is already in the past, preserving input order.
///
/// An alert expiring exactly at `now` is kept. The effective time is not
/// checked, so an alert that has not started yet is still returned.
#[must_use]
pub fn filter_active(alerts: Vec<Alert>, now: DateTime<Utc>) -> Vec<Alert> {
    alerts
        .into_iter()
        .filter(|alert| {
            if alert.effective_time > alert.expire_time {
                tracing::warn!(
                    event = %alert.event,
                    effective = %alert.effective_time,
                    expires = %alert.expire_time,
                    "alert expires before it takes effect"
                );
            }
            alert.expire_time.with_timezone(&Utc) >= now
        })
        .collect()
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
