//! Runs the resolver stages in order and assembles a [`WeatherReport`].

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use wxreport_core::{
    filter_active, filter_today, Coordinates, CoreError, CurrentConditions, DayMatch,
    WeatherReport,
};

use crate::alerts::fetch_active_alerts;
use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::forecast::fetch_hourly_forecast;
use crate::grid::resolve_grid;
use crate::location::resolve_location;
use crate::station::{fetch_observation, resolve_station};

/// The pipeline step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Location,
    Grid,
    Station,
    Observation,
    Conditions,
    Forecast,
    Alerts,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Location => "location lookup",
            Stage::Grid => "grid lookup",
            Stage::Station => "station lookup",
            Stage::Observation => "observation fetch",
            Stage::Conditions => "current conditions",
            Stage::Forecast => "hourly forecast fetch",
            Stage::Alerts => "alert fetch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StageFailure {
    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A stage failure tagged with the stage it came from.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: StageFailure,
}

impl PipelineError {
    fn at(stage: Stage) -> impl FnOnce(WeatherError) -> Self {
        move |e| Self {
            stage,
            source: e.into(),
        }
    }
}

/// Where the report's coordinates come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationSource {
    /// Geolocate the caller's public IP.
    Detect,
    /// Use these coordinates and skip the IP lookup.
    Fixed(Coordinates),
}

/// Builds the full report for one run.
///
/// Stages run strictly in sequence; the first failure aborts the run and no
/// partial report is produced. `now` drives both time filters so callers
/// (and tests) control what "today" and "active" mean.
///
/// # Errors
///
/// Returns [`PipelineError`] naming the failing [`Stage`] and wrapping its
/// [`WeatherError`] or [`CoreError`].
pub async fn build_report(
    client: &NwsClient,
    source: LocationSource,
    now: DateTime<Utc>,
    day_match: DayMatch,
) -> Result<WeatherReport, PipelineError> {
    let coords = match source {
        LocationSource::Detect => resolve_location(client)
            .await
            .map_err(PipelineError::at(Stage::Location))?,
        LocationSource::Fixed(coords) => {
            tracing::debug!("using configured coordinates; skipping IP lookup");
            coords
        }
    };
    tracing::info!(
        latitude = coords.latitude,
        longitude = coords.longitude,
        "resolved location"
    );

    let grid = resolve_grid(client, coords)
        .await
        .map_err(PipelineError::at(Stage::Grid))?;
    tracing::info!(
        city = %grid.city,
        state = %grid.state,
        zone = %grid.forecast_zone_id,
        "resolved forecast grid"
    );

    let station = resolve_station(client, &grid.station_list_url)
        .await
        .map_err(PipelineError::at(Stage::Station))?;

    let observation = fetch_observation(client, &station.id)
        .await
        .map_err(PipelineError::at(Stage::Observation))?;

    let conditions =
        CurrentConditions::from_observation(observation, station).map_err(|e| PipelineError {
            stage: Stage::Conditions,
            source: e.into(),
        })?;

    let periods = fetch_hourly_forecast(client, &grid.hourly_forecast_url)
        .await
        .map_err(PipelineError::at(Stage::Forecast))?;
    let total_periods = periods.len();
    let hourly = filter_today(periods, now, day_match);

    let alerts = fetch_active_alerts(client, &grid.forecast_zone_id)
        .await
        .map_err(PipelineError::at(Stage::Alerts))?;
    let total_alerts = alerts.len();
    let alerts = filter_active(alerts, now);

    tracing::info!(
        periods = hourly.len(),
        dropped_periods = total_periods - hourly.len(),
        alerts = alerts.len(),
        expired_alerts = total_alerts - alerts.len(),
        %day_match,
        "report assembled"
    );

    Ok(WeatherReport {
        grid,
        conditions,
        hourly,
        alerts,
    })
}
