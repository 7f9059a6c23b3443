//! Public IP → coordinates.

use wxreport_core::Coordinates;

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::types::GeoIpResponse;

/// Resolves the caller's location from their public IP address.
///
/// Asks the IP-echo service for the public address, then looks that address
/// up with the geo-IP service.
///
/// # Errors
///
/// - [`WeatherError::UpstreamUnavailable`] if either service answers non-2xx.
/// - [`WeatherError::MalformedResponse`] if the geo-IP body is not JSON.
/// - [`WeatherError::GeolocationFailed`] if the echo is empty, the lookup
///   reports `"status": "fail"`, or no coordinates come back.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn resolve_location(client: &NwsClient) -> Result<Coordinates, WeatherError> {
    let raw_ip = client.get_text(client.ip_echo_url().as_str()).await?;
    let ip = raw_ip.trim();
    if ip.is_empty() {
        return Err(WeatherError::GeolocationFailed {
            message: "IP echo service returned an empty body".to_owned(),
        });
    }
    tracing::debug!(ip, "resolved public IP");

    let url = client.geoip_url(ip);
    let response: GeoIpResponse = client
        .get_json(url.as_str(), &format!("geoip({ip})"))
        .await?;

    coordinates_from(response)
}

fn coordinates_from(response: GeoIpResponse) -> Result<Coordinates, WeatherError> {
    if response.status.as_deref() == Some("fail") {
        return Err(WeatherError::GeolocationFailed {
            message: response
                .message
                .unwrap_or_else(|| "unknown error".to_owned()),
        });
    }

    match (response.lat, response.lon) {
        (Some(latitude), Some(longitude)) => {
            Coordinates::new(latitude, longitude).map_err(|e| WeatherError::GeolocationFailed {
                message: e.to_string(),
            })
        }
        _ => Err(WeatherError::GeolocationFailed {
            message: "response did not include coordinates".to_owned(),
        }),
    }
}
