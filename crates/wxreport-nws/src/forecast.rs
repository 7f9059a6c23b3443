use wxreport_core::ForecastPeriod;

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::types::HourlyForecastResponse;

/// Fetches the hourly forecast from the grid's `forecastHourly` URL.
///
/// Periods are returned in the order the NWS lists them (chronological).
///
/// # Errors
///
/// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
/// - [`WeatherError::MalformedResponse`] if the body is not an hourly forecast.
/// - [`WeatherError::Http`] on network failure or timeout.
pub async fn fetch_hourly_forecast(
    client: &NwsClient,
    hourly_forecast_url: &str,
) -> Result<Vec<ForecastPeriod>, WeatherError> {
    let response: HourlyForecastResponse = client
        .get_geo_json(hourly_forecast_url, "hourly forecast")
        .await?;

    let periods: Vec<ForecastPeriod> = response
        .properties
        .periods
        .into_iter()
        .map(ForecastPeriod::from)
        .collect();
    tracing::debug!(count = periods.len(), "fetched hourly forecast");
    Ok(periods)
}
