use wxreport_core::Alert;

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::types::AlertsResponse;

/// Fetches the active alerts for a forecast zone, e.g. `"TXZ213"`.
///
/// No time filtering happens here; see [`wxreport_core::filter_active`].
///
/// # Errors
///
/// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
/// - [`WeatherError::MalformedResponse`] if the body is not an alert collection.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn fetch_active_alerts(
    client: &NwsClient,
    zone_id: &str,
) -> Result<Vec<Alert>, WeatherError> {
    let url = client.nws_url(&["alerts", "active", "zone", zone_id]);
    let response: AlertsResponse = client
        .get_geo_json(url.as_str(), &format!("active alerts({zone_id})"))
        .await?;

    let alerts: Vec<Alert> = response.features.into_iter().map(Alert::from).collect();
    tracing::debug!(zone = zone_id, count = alerts.len(), "fetched active alerts");
    Ok(alerts)
}
