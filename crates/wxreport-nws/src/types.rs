//! Wire types for the NWS API and the geo-IP service.
//!
//! The NWS wraps every resource in a GeoJSON `Feature` or
//! `FeatureCollection`; only the fields the report needs are modelled.
//! Measurement values arrive as `{ "value": …, "unitCode": "wmoUnit:…" }`
//! objects whose `value` may be `null`.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use wxreport_core::{Alert, ForecastPeriod, Observation, Station};

// ---------------------------------------------------------------------------
// ip-api.com
// ---------------------------------------------------------------------------

/// Response from the geo-IP lookup. `status` is `"success"` or `"fail"`;
/// on failure `message` says why and the coordinates are absent.
#[derive(Debug, Deserialize)]
pub struct GeoIpResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

// ---------------------------------------------------------------------------
// /points/{lat},{lon}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    #[serde(default)]
    pub grid_id: Option<String>,
    #[serde(default)]
    pub grid_x: Option<i32>,
    #[serde(default)]
    pub grid_y: Option<i32>,
    /// Zone reference URL, e.g. `https://api.weather.gov/zones/forecast/TXZ213`.
    pub forecast_zone: String,
    pub forecast_hourly: String,
    pub observation_stations: String,
    pub relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: String,
    pub state: String,
}

// ---------------------------------------------------------------------------
// observation stations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    #[serde(default)]
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct StationFeature {
    pub properties: StationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    pub station_identifier: String,
    pub name: String,
}

impl From<StationFeature> for Station {
    fn from(feature: StationFeature) -> Self {
        Self {
            id: feature.properties.station_identifier,
            name: feature.properties.name,
        }
    }
}

// ---------------------------------------------------------------------------
// /stations/{id}/observations/latest
// ---------------------------------------------------------------------------

/// A measurement with its WMO unit code, e.g. `wmoUnit:degC`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_code: Option<String>,
}

impl QuantitativeValue {
    fn unit_is(&self, suffix: &str) -> bool {
        self.unit_code
            .as_deref()
            .is_some_and(|code| code.ends_with(suffix))
    }

    /// Value in °C; converts when the unit is `degF`.
    fn celsius(&self) -> Option<f64> {
        let value = self.value?;
        if self.unit_is("degF") {
            Some((value - 32.0) * 5.0 / 9.0)
        } else {
            Some(value)
        }
    }

    /// Value in km/h; converts when the unit is `m_s-1`.
    fn kph(&self) -> Option<f64> {
        let value = self.value?;
        if self.unit_is("m_s-1") {
            Some(value * 3.6)
        } else {
            Some(value)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ObservationResponse {
    pub properties: ObservationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationProperties {
    #[serde(default)]
    pub text_description: Option<String>,
    #[serde(default)]
    pub temperature: QuantitativeValue,
    #[serde(default)]
    pub relative_humidity: QuantitativeValue,
    #[serde(default)]
    pub wind_speed: QuantitativeValue,
    #[serde(default)]
    pub wind_direction: QuantitativeValue,
}

impl From<ObservationProperties> for Observation {
    fn from(props: ObservationProperties) -> Self {
        Self {
            description: props.text_description.unwrap_or_default(),
            temperature_c: props.temperature.celsius(),
            humidity_pct: props.relative_humidity.value,
            wind_speed_kph: props.wind_speed.kph(),
            wind_direction_deg: props.wind_direction.value.map_or(0, round_to_i32),
        }
    }
}

// ---------------------------------------------------------------------------
// hourly forecast
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct HourlyForecastResponse {
    pub properties: HourlyForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct HourlyForecastProperties {
    #[serde(default)]
    pub periods: Vec<PeriodWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWire {
    pub start_time: DateTime<FixedOffset>,
    pub temperature: f64,
    /// `"F"` or `"C"`.
    #[serde(default)]
    pub temperature_unit: Option<String>,
    #[serde(default)]
    pub probability_of_precipitation: QuantitativeValue,
    #[serde(default)]
    pub relative_humidity: QuantitativeValue,
    #[serde(default)]
    pub short_forecast: String,
}

impl From<PeriodWire> for ForecastPeriod {
    fn from(period: PeriodWire) -> Self {
        let fahrenheit = if period.temperature_unit.as_deref() == Some("C") {
            wxreport_core::celsius_to_fahrenheit(period.temperature)
        } else {
            period.temperature
        };
        Self {
            start_time: period.start_time,
            temperature_f: round_to_i32(fahrenheit),
            precipitation_pct: period
                .probability_of_precipitation
                .value
                .map_or(0, round_to_i32),
            humidity_pct: period.relative_humidity.value.map_or(0, round_to_i32),
            description: period.short_forecast,
        }
    }
}

// ---------------------------------------------------------------------------
// /alerts/active/zone/{zone}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub event: String,
    pub sender_name: String,
    #[serde(default)]
    pub severity: Option<String>,
    pub effective: DateTime<FixedOffset>,
    pub expires: DateTime<FixedOffset>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

impl From<AlertFeature> for Alert {
    fn from(feature: AlertFeature) -> Self {
        let props = feature.properties;
        Self {
            event: props.event,
            sender: props.sender_name,
            severity: props.severity.unwrap_or_else(|| "Unknown".to_owned()),
            effective_time: props.effective,
            expire_time: props.expires,
            headline: props.headline,
            description: props.description.unwrap_or_default(),
            instruction: props.instruction.unwrap_or_default(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}
