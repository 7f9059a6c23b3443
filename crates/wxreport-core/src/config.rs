use crate::app_config::AppConfig;
use crate::filters::DayMatch;
use crate::types::Coordinates;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or only one coordinate is set.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or only one coordinate is set.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset ones fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    };

    let log_level = or_default("WXREPORT_LOG_LEVEL", &defaults.log_level);
    let http_timeout_secs = parse_u64("WXREPORT_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "WXREPORT_HTTP_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("WXREPORT_USER_AGENT", &defaults.user_agent);
    let nws_base_url = or_default("WXREPORT_NWS_BASE_URL", &defaults.nws_base_url);
    let ip_echo_url = or_default("WXREPORT_IP_ECHO_URL", &defaults.ip_echo_url);
    let geoip_base_url = or_default("WXREPORT_GEOIP_BASE_URL", &defaults.geoip_base_url);

    let coordinates = match (
        parse_f64("WXREPORT_LATITUDE")?,
        parse_f64("WXREPORT_LONGITUDE")?,
    ) {
        (Some(latitude), Some(longitude)) => Some(
            Coordinates::new(latitude, longitude).map_err(|e| ConfigError::InvalidEnvVar {
                var: "WXREPORT_LATITUDE".to_string(),
                reason: e.to_string(),
            })?,
        ),
        (Some(_), None) => {
            return Err(ConfigError::MissingEnvVar("WXREPORT_LONGITUDE".to_string()))
        }
        (None, Some(_)) => {
            return Err(ConfigError::MissingEnvVar("WXREPORT_LATITUDE".to_string()))
        }
        (None, None) => None,
    };

    let forecast_day_match = match lookup("WXREPORT_FORECAST_DAY_MATCH") {
        Ok(raw) => parse_day_match(&raw)?,
        Err(_) => defaults.forecast_day_match,
    };

    Ok(AppConfig {
        log_level,
        http_timeout_secs,
        user_agent,
        nws_base_url,
        ip_echo_url,
        geoip_base_url,
        coordinates,
        forecast_day_match,
    })
}

/// Parse a string into a `DayMatch` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `calendar-date` or `day-of-month`.
pub fn parse_day_match(s: &str) -> Result<DayMatch, ConfigError> {
    match s.trim() {
        "calendar-date" => Ok(DayMatch::CalendarDate),
        "day-of-month" => Ok(DayMatch::DayOfMonth),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WXREPORT_FORECAST_DAY_MATCH".to_string(),
            reason: format!("expected 'calendar-date' or 'day-of-month', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
