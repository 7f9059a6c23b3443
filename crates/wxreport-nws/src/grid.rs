//! Coordinates → forecast grid identity.

use reqwest::Url;
use wxreport_core::{Coordinates, GridInfo};

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::types::PointsResponse;

/// Looks up the NWS grid metadata for `coords`.
///
/// Coordinates are sent with four decimal places; the NWS redirects or
/// rejects anything more precise.
///
/// # Errors
///
/// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
/// - [`WeatherError::MalformedResponse`] if the body is not a points document
///   or the zone reference is not a URL.
/// - [`WeatherError::EmptyZonePath`] if the zone URL has no path segment.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn resolve_grid(client: &NwsClient, coords: Coordinates) -> Result<GridInfo, WeatherError> {
    let point = format!("{:.4},{:.4}", coords.latitude, coords.longitude);
    let url = client.nws_url(&["points", &point]);
    let points: PointsResponse = client
        .get_geo_json(url.as_str(), &format!("points({point})"))
        .await?;

    let props = points.properties;
    tracing::debug!(
        grid_id = props.grid_id.as_deref().unwrap_or("?"),
        grid_x = props.grid_x,
        grid_y = props.grid_y,
        "resolved forecast grid"
    );

    let forecast_zone_id = extract_zone_id(&props.forecast_zone)?;
    Ok(GridInfo {
        city: props.relative_location.properties.city,
        state: props.relative_location.properties.state,
        forecast_zone_id,
        station_list_url: props.observation_stations,
        hourly_forecast_url: props.forecast_hourly,
    })
}

/// Returns the last `/`-delimited path segment of a zone reference URL.
///
/// A trailing slash is ignored, so `.../forecast/TXZ213/` also yields
/// `"TXZ213"`.
///
/// # Errors
///
/// - [`WeatherError::MalformedResponse`] if `zone_url` is not a URL.
/// - [`WeatherError::EmptyZonePath`] if the path has no non-empty segment.
pub fn extract_zone_id(zone_url: &str) -> Result<String, WeatherError> {
    let url = Url::parse(zone_url).map_err(|e| WeatherError::MalformedResponse {
        context: format!("forecast zone URL \"{zone_url}\""),
        source: serde::de::Error::custom(e),
    })?;

    url.path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .map(str::to_owned)
        .ok_or_else(|| WeatherError::EmptyZonePath {
            url: zone_url.to_owned(),
        })
}
