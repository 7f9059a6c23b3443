use chrono::{DateTime, FixedOffset, Utc};

use super::*;

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid RFC 3339 timestamp")
}

fn utc(s: &str) -> DateTime<Utc> {
    ts(s).with_timezone(&Utc)
}

fn period(start: &str) -> ForecastPeriod {
    ForecastPeriod {
        start_time: ts(start),
        temperature_f: 70,
        precipitation_pct: 10,
        humidity_pct: 50,
        description: "Sunny".to_owned(),
    }
}

fn alert(event: &str, effective: &str, expires: &str) -> Alert {
    Alert {
        event: event.to_owned(),
        sender: "NWS Austin/San Antonio TX".to_owned(),
        severity: "Moderate".to_owned(),
        effective_time: ts(effective),
        expire_time: ts(expires),
        headline: None,
        description: String::new(),
        instruction: String::new(),
    }
}

fn starts(periods: &[ForecastPeriod]) -> Vec<String> {
    periods.iter().map(|p| p.start_time.to_rfc3339()).collect()
}

// ---------------------------------------------------------------------------
// filter_today
// ---------------------------------------------------------------------------

#[test]
fn keeps_earlier_day_and_drops_later_day() {
    let now = utc("2024-03-15T12:00:00Z");
    for day_match in [DayMatch::CalendarDate, DayMatch::DayOfMonth] {
        let kept = filter_today(
            vec![period("2024-03-14T23:00:00Z"), period("2024-03-16T00:00:00Z")],
            now,
            day_match,
        );
        assert_eq!(
            starts(&kept),
            vec!["2024-03-14T23:00:00+00:00"],
            "policy {day_match}"
        );
    }
}

#[test]
fn keeps_past_hours_of_today() {
    let now = utc("2024-03-15T18:00:00Z");
    let kept = filter_today(
        vec![
            period("2024-03-15T06:00:00Z"),
            period("2024-03-15T19:00:00Z"),
        ],
        now,
        DayMatch::CalendarDate,
    );
    assert_eq!(kept.len(), 2);
}

#[test]
fn monotonic_sequence_is_cut_at_first_later_day() {
    let now = utc("2024-03-15T20:00:00Z");
    let kept = filter_today(
        vec![
            period("2024-03-15T20:00:00Z"),
            period("2024-03-15T21:00:00Z"),
            period("2024-03-16T00:00:00Z"),
            period("2024-03-16T01:00:00Z"),
        ],
        now,
        DayMatch::CalendarDate,
    );
    assert_eq!(
        starts(&kept),
        vec!["2024-03-15T20:00:00+00:00", "2024-03-15T21:00:00+00:00"]
    );
}

#[test]
fn out_of_order_sequence_is_filtered_not_truncated() {
    let now = utc("2024-03-15T12:00:00Z");
    let kept = filter_today(
        vec![
            period("2024-03-16T00:00:00Z"),
            period("2024-03-15T13:00:00Z"),
        ],
        now,
        DayMatch::DayOfMonth,
    );
    assert_eq!(starts(&kept), vec!["2024-03-15T13:00:00+00:00"]);
}

#[test]
fn uses_period_offset_for_today() {
    // 03:00Z on the 16th is still the 15th in UTC-5.
    let now = utc("2024-03-16T03:00:00Z");
    let kept = filter_today(
        vec![
            period("2024-03-15T22:00:00-05:00"),
            period("2024-03-16T00:00:00-05:00"),
        ],
        now,
        DayMatch::CalendarDate,
    );
    assert_eq!(starts(&kept), vec!["2024-03-15T22:00:00-05:00"]);
}

#[test]
fn calendar_date_drops_next_month() {
    let now = utc("2024-01-31T20:00:00Z");
    let kept = filter_today(
        vec![period("2024-01-31T21:00:00Z"), period("2024-02-01T00:00:00Z")],
        now,
        DayMatch::CalendarDate,
    );
    assert_eq!(kept.len(), 1);
}

#[test]
fn day_of_month_keeps_next_month() {
    let now = utc("2024-01-31T20:00:00Z");
    let kept = filter_today(
        vec![period("2024-01-31T21:00:00Z"), period("2024-02-01T00:00:00Z")],
        now,
        DayMatch::DayOfMonth,
    );
    assert_eq!(kept.len(), 2, "day 1 <= day 31 under day-of-month matching");
}

#[test]
fn empty_forecast_stays_empty() {
    let kept = filter_today(Vec::new(), Utc::now(), DayMatch::default());
    assert!(kept.is_empty());
}

#[test]
fn day_match_defaults_to_calendar_date() {
    assert_eq!(DayMatch::default(), DayMatch::CalendarDate);
    assert_eq!(DayMatch::DayOfMonth.to_string(), "day-of-month");
}

// ---------------------------------------------------------------------------
// filter_active
// ---------------------------------------------------------------------------

#[test]
fn drops_expired_and_keeps_future_expiry() {
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![
            alert("Expired", "2024-01-01T00:00:00Z", "2024-01-01T23:59:59Z"),
            alert("Active", "2024-01-01T00:00:00Z", "2024-01-02T00:00:01Z"),
        ],
        now,
    );
    let events: Vec<&str> = kept.iter().map(|a| a.event.as_str()).collect();
    assert_eq!(events, vec!["Active"]);
}

#[test]
fn expiry_exactly_now_is_kept() {
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![alert("Edge", "2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z")],
        now,
    );
    assert_eq!(kept.len(), 1);
}

#[test]
fn preserves_input_order() {
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![
            alert("Wind Advisory", "2024-01-01T00:00:00Z", "2024-01-05T00:00:00Z"),
            alert("Old", "2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"),
            alert("Flood Watch", "2024-01-01T00:00:00Z", "2024-01-03T00:00:00Z"),
            alert("Freeze Warning", "2024-01-01T00:00:00Z", "2024-01-04T00:00:00Z"),
        ],
        now,
    );
    let events: Vec<&str> = kept.iter().map(|a| a.event.as_str()).collect();
    assert_eq!(events, vec!["Wind Advisory", "Flood Watch", "Freeze Warning"]);
}

#[test]
fn not_yet_effective_alert_is_kept() {
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![alert("Upcoming", "2024-01-03T00:00:00Z", "2024-01-04T00:00:00Z")],
        now,
    );
    assert_eq!(kept.len(), 1);
}

#[test]
fn compares_instants_across_offsets() {
    // 18:30-06:00 is 00:30Z on the 2nd, after now.
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![alert("Offset", "2024-01-01T00:00:00-06:00", "2024-01-01T18:30:00-06:00")],
        now,
    );
    assert_eq!(kept.len(), 1);
}

#[test]
fn inverted_alert_window_is_kept_when_unexpired() {
    let now = utc("2024-01-02T00:00:00Z");
    let kept = filter_active(
        vec![alert("Inverted", "2024-01-06T00:00:00Z", "2024-01-05T00:00:00Z")],
        now,
    );
    assert_eq!(kept.len(), 1);
}
