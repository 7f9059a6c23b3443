//! Station discovery and the latest observation.

use wxreport_core::{Observation, Station};

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::types::{ObservationResponse, StationsResponse};

/// Picks the first station from the grid's station list.
///
/// The NWS orders the list by distance from the grid point, so the first
/// entry is the nearest station.
///
/// # Errors
///
/// - [`WeatherError::EmptyStationList`] if the collection has no features.
/// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
/// - [`WeatherError::MalformedResponse`] if the body is not a station list.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn resolve_station(
    client: &NwsClient,
    station_list_url: &str,
) -> Result<Station, WeatherError> {
    let stations: StationsResponse = client
        .get_geo_json(station_list_url, "observation stations")
        .await?;

    let count = stations.features.len();
    let station: Station = stations
        .features
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::EmptyStationList {
            url: station_list_url.to_owned(),
        })?
        .into();

    tracing::debug!(station = %station.id, candidates = count, "selected observation station");
    Ok(station)
}

/// Fetches the most recent observation for `station_id`.
///
/// # Errors
///
/// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
/// - [`WeatherError::MalformedResponse`] if the body is not an observation.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn fetch_observation(
    client: &NwsClient,
    station_id: &str,
) -> Result<Observation, WeatherError> {
    let url = client.nws_url(&["stations", station_id, "observations", "latest"]);
    let response: ObservationResponse = client
        .get_geo_json(url.as_str(), &format!("latest observation({station_id})"))
        .await?;
    Ok(response.properties.into())
}
