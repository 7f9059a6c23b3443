//! Domain entities produced by the resolver stages.
//!
//! Each value is built once by the stage that owns it and handed on
//! unchanged; none of these types expose mutating methods.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::compass::{degrees_to_compass, Compass};
use crate::units::{celsius_to_fahrenheit, kph_to_mph};
use crate::CoreError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds coordinates after checking both values are on the globe.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Forecast grid identity for a coordinate, as returned by the NWS
/// `/points` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridInfo {
    pub city: String,
    pub state: String,
    /// Forecast zone code used for alert queries, e.g. `"TXZ213"`.
    pub forecast_zone_id: String,
    pub station_list_url: String,
    pub hourly_forecast_url: String,
}

/// An observation station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier, e.g. `"KAUS"`.
    pub id: String,
    pub name: String,
}

/// Latest observation reported by a station.
///
/// Missing sensor readings are `None`. A missing wind direction is stored as
/// `0`, the calm / no-direction value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub description: String,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_speed_kph: Option<f64>,
    /// Degrees in `0..=360`; `0` means calm or no direction.
    pub wind_direction_deg: i32,
}

/// One hourly slice of the forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Start of the period, in the forecast location's UTC offset.
    pub start_time: DateTime<FixedOffset>,
    pub temperature_f: i32,
    pub precipitation_pct: i32,
    pub humidity_pct: i32,
    pub description: String,
}

/// An active weather advisory for a forecast zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub event: String,
    pub sender: String,
    /// NWS severity, e.g. `"Severe"`, `"Moderate"`, `"Unknown"`.
    pub severity: String,
    pub effective_time: DateTime<FixedOffset>,
    pub expire_time: DateTime<FixedOffset>,
    pub headline: Option<String>,
    pub description: String,
    pub instruction: String,
}

/// Wind speed and direction, present only when the air is not calm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// `None` when the station reports no direction.
    pub direction: Option<Compass>,
    pub speed_mph: f64,
}

/// Current conditions converted to report units.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_f: Option<f64>,
    pub humidity_pct: Option<f64>,
    /// `None` when the wind speed is zero or unreported.
    pub wind: Option<Wind>,
    pub description: String,
    pub station: Station,
}

impl CurrentConditions {
    /// Converts a raw station observation into report units.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAngle`] if the observation's wind
    /// direction is outside `0..=360`.
    pub fn from_observation(observation: Observation, station: Station) -> Result<Self, CoreError> {
        let direction = degrees_to_compass(observation.wind_direction_deg)?;
        let wind = observation
            .wind_speed_kph
            .map(kph_to_mph)
            .filter(|mph| mph.abs() > 0.0)
            .map(|speed_mph| Wind {
                direction,
                speed_mph,
            });

        Ok(Self {
            temperature_f: observation.temperature_c.map(celsius_to_fahrenheit),
            humidity_pct: observation.humidity_pct,
            wind,
            description: observation.description,
            station,
        })
    }
}

/// Everything the console report renders, already filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub grid: GridInfo,
    pub conditions: CurrentConditions,
    /// Remaining periods of the current day, in chronological order.
    pub hourly: Vec<ForecastPeriod>,
    /// Alerts that have not yet expired, in source order.
    pub alerts: Vec<Alert>,
}
