use thiserror::Error;

/// Errors returned by the weather data client and its resolver stages.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream service answered with a non-2xx status.
    #[error("upstream unavailable: HTTP {status} from {url}")]
    UpstreamUnavailable { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("malformed response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("station list at {url} is empty")]
    EmptyStationList { url: String },

    #[error("forecast zone URL \"{url}\" has no path segment")]
    EmptyZonePath { url: String },

    /// The geo-IP service answered but could not place the address.
    #[error("geolocation failed: {message}")]
    GeolocationFailed { message: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
