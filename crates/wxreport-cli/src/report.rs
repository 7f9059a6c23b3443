//! Plain-text rendering of a [`WeatherReport`].
//!
//! Every function here is pure: it takes report data and returns a `String`,
//! so the layout can be tested without capturing stdout.

use chrono::{DateTime, FixedOffset};
use wxreport_core::{Alert, CurrentConditions, ForecastPeriod, GridInfo, WeatherReport, Wind};

const ALERT_TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";
const FORECAST_TIME_FORMAT: &str = "%H:%M";
const MISSING: &str = "--";

/// The blocks of the report, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Alerts,
    Conditions,
    Forecast,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Header,
        Section::Alerts,
        Section::Conditions,
        Section::Forecast,
    ];

    fn title(self) -> Option<&'static str> {
        match self {
            Section::Header => None,
            Section::Alerts => Some("ACTIVE ALERTS"),
            Section::Conditions => Some("CURRENT CONDITIONS"),
            Section::Forecast => Some("HOURLY FORECAST"),
        }
    }
}

/// Renders the whole report, sections separated by a blank line.
#[must_use]
pub fn render_report(report: &WeatherReport) -> String {
    Section::ALL
        .iter()
        .filter_map(|&section| render_section(section, report))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one section, or `None` when it has nothing to show.
///
/// Only [`Section::Alerts`] can be empty; it is omitted when no alert
/// survived filtering.
#[must_use]
pub fn render_section(section: Section, report: &WeatherReport) -> Option<String> {
    let body = match section {
        Section::Header => render_header(&report.grid),
        Section::Alerts if report.alerts.is_empty() => return None,
        Section::Alerts => render_alerts(&report.alerts),
        Section::Conditions => render_conditions(&report.conditions),
        Section::Forecast => render_forecast(&report.hourly),
    };

    Some(match section.title() {
        Some(title) => format!("{title}\n{body}"),
        None => body,
    })
}

fn render_header(grid: &GridInfo) -> String {
    format!("{}, {}\n", grid.city, grid.state)
}

fn render_alerts(alerts: &[Alert]) -> String {
    let mut out = String::new();
    for alert in alerts {
        out.push_str(&format!("{} ({})\n", alert.event, alert.sender));
        out.push_str(&format!(
            "Start: {}    End: {}\n",
            format_alert_time(&alert.effective_time),
            format_alert_time(&alert.expire_time),
        ));
    }
    out
}

fn format_alert_time(time: &DateTime<FixedOffset>) -> String {
    time.format(ALERT_TIME_FORMAT).to_string()
}

fn render_conditions(cc: &CurrentConditions) -> String {
    let temperature = cc
        .temperature_f
        .map_or_else(|| MISSING.to_owned(), |t| format!("{t:.0}°F"));
    let humidity = cc
        .humidity_pct
        .map_or_else(|| MISSING.to_owned(), |h| format!("{h:.1}%"));
    let wind = cc.wind.as_ref().map_or_else(|| MISSING.to_owned(), format_wind);

    format!(
        "{:<14}{:<12}{:<14}Description\n{:<14}{:<12}{:<14}{}\n{} ({})\n",
        "Temperature",
        "Humidity",
        "Wind",
        temperature,
        humidity,
        wind,
        cc.description,
        cc.station.id,
        cc.station.name,
    )
}

fn format_wind(wind: &Wind) -> String {
    match wind.direction {
        Some(direction) => format!("{direction} {:.1} mph", wind.speed_mph),
        None => format!("{:.1} mph", wind.speed_mph),
    }
}

fn render_forecast(periods: &[ForecastPeriod]) -> String {
    let mut out = format!(
        "{:<7}{:<13}{:<10}{:<12}Description\n",
        "Time", "Temperature", "Precip %", "Humidity %"
    );
    for period in periods {
        out.push_str(&format!(
            "{:<7}{:<13}{:<10}{:<12}{}\n",
            period.start_time.format(FORECAST_TIME_FORMAT).to_string(),
            format!("{}°F", period.temperature_f),
            period.precipitation_pct,
            period.humidity_pct,
            period.description,
        ));
    }
    out
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
