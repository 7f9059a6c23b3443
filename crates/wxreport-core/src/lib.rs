//! Domain types and pure logic for the `wxreport` console weather tool.
//!
//! Nothing in this crate performs I/O beyond reading environment variables;
//! the HTTP side lives in `wxreport-nws`.

pub mod app_config;
pub mod compass;
pub mod config;
pub mod filters;
pub mod types;
pub mod units;

use thiserror::Error;

pub use app_config::AppConfig;
pub use compass::{degrees_to_compass, Compass};
pub use config::{load_app_config, load_app_config_from_env, parse_day_match};
pub use filters::{filter_active, filter_today, DayMatch};
pub use types::{
    Alert, Coordinates, CurrentConditions, ForecastPeriod, GridInfo, Observation, Station,
    WeatherReport, Wind,
};
pub use units::{celsius_to_fahrenheit, kph_to_mph};

/// Errors raised by the pure domain logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A wind direction outside `[0, 360]` degrees.
    #[error("invalid angle: {0} (expected 0..=360 degrees)")]
    InvalidAngle(i32),

    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
