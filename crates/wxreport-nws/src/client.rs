//! HTTP client shared by every resolver stage.
//!
//! Wraps `reqwest` with the NWS-required `User-Agent`, a per-request timeout,
//! and uniform status handling: any non-2xx answer becomes
//! [`WeatherError::UpstreamUnavailable`] and any body that does not decode
//! becomes [`WeatherError::MalformedResponse`].

use std::time::Duration;

use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;
use wxreport_core::AppConfig;

use crate::error::WeatherError;

const GEO_JSON: &str = "application/geo+json";
const JSON: &str = "application/json";
const PLAIN_TEXT: &str = "text/plain";

/// Client for the NWS API and the two IP-location services.
///
/// Use [`NwsClient::from_config`] for production or [`NwsClient::new`] to
/// point every endpoint at a mock server in tests.
pub struct NwsClient {
    client: Client,
    nws_base_url: Url,
    ip_echo_url: Url,
    geoip_base_url: Url,
}

impl NwsClient {
    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying `reqwest::Client`
    /// cannot be built, or [`WeatherError::InvalidUrl`] if a configured
    /// URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, WeatherError> {
        Self::new(
            config.http_timeout_secs,
            &config.user_agent,
            &config.nws_base_url,
            &config.ip_echo_url,
            &config.geoip_base_url,
        )
    }

    /// Creates a client with explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying `reqwest::Client`
    /// cannot be built, or [`WeatherError::InvalidUrl`] if any URL does not
    /// parse or cannot carry path segments.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        nws_base_url: &str,
        ip_echo_url: &str,
        geoip_base_url: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            nws_base_url: parse_base(nws_base_url)?,
            ip_echo_url: parse_url(ip_echo_url)?,
            geoip_base_url: parse_base(geoip_base_url)?,
        })
    }

    pub(crate) fn ip_echo_url(&self) -> &Url {
        &self.ip_echo_url
    }

    /// Appends `segments` to the NWS base URL, e.g. `["points", "30.2672,-97.7431"]`.
    pub(crate) fn nws_url(&self, segments: &[&str]) -> Url {
        append_segments(&self.nws_base_url, segments)
    }

    /// Geo-IP lookup URL for `ip`: `{geoip_base}/{ip}`.
    pub(crate) fn geoip_url(&self, ip: &str) -> Url {
        append_segments(&self.geoip_base_url, &[ip])
    }

    /// Fetches a GeoJSON document from the NWS and decodes it into `T`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Http`] on network failure or timeout.
    /// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
    /// - [`WeatherError::MalformedResponse`] if the body does not match `T`.
    pub(crate) async fn get_geo_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, WeatherError> {
        let body = self.get_body(url, GEO_JSON).await?;
        decode(&body, context)
    }

    /// Fetches a plain JSON document and decodes it into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`NwsClient::get_geo_json`].
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, WeatherError> {
        let body = self.get_body(url, JSON).await?;
        decode(&body, context)
    }

    /// Fetches a plain-text body.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Http`] on network failure or timeout.
    /// - [`WeatherError::UpstreamUnavailable`] on a non-2xx status.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String, WeatherError> {
        self.get_body(url, PLAIN_TEXT).await
    }

    async fn get_body(&self, url: &str, accept: &str) -> Result<String, WeatherError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success response");
            return Err(WeatherError::UpstreamUnavailable {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, WeatherError> {
    serde_json::from_str(body).map_err(|e| WeatherError::MalformedResponse {
        context: context.to_owned(),
        source: e,
    })
}

fn parse_url(raw: &str) -> Result<Url, WeatherError> {
    Url::parse(raw).map_err(|e| WeatherError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

/// Parses a base URL that path segments will later be appended to.
fn parse_base(raw: &str) -> Result<Url, WeatherError> {
    let url = parse_url(raw)?;
    if url.cannot_be_a_base() {
        return Err(WeatherError::InvalidUrl {
            url: raw.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(url)
}

fn append_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Bases are checked in parse_base, so this never fails.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
