use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_day_match_calendar_date() {
    assert_eq!(
        parse_day_match("calendar-date").unwrap(),
        DayMatch::CalendarDate
    );
}

#[test]
fn parse_day_match_day_of_month() {
    assert_eq!(
        parse_day_match("day-of-month").unwrap(),
        DayMatch::DayOfMonth
    );
}

#[test]
fn parse_day_match_unknown_fails() {
    let err = parse_day_match("weekly").unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "WXREPORT_FORECAST_DAY_MATCH")
    );
}

#[test]
fn build_app_config_with_empty_env_uses_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "wxreport/0.1 (console-weather)");
    assert_eq!(cfg.nws_base_url, "https://api.weather.gov");
    assert_eq!(cfg.ip_echo_url, "https://ipinfo.io/ip");
    assert_eq!(cfg.geoip_base_url, "http://ip-api.com/json");
    assert!(cfg.coordinates.is_none());
    assert_eq!(cfg.forecast_day_match, DayMatch::CalendarDate);
}

#[test]
fn build_app_config_overrides_urls() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_NWS_BASE_URL", "http://127.0.0.1:9000");
    map.insert("WXREPORT_IP_ECHO_URL", "http://127.0.0.1:9001/ip");
    map.insert("WXREPORT_GEOIP_BASE_URL", "http://127.0.0.1:9002/json");
    map.insert("WXREPORT_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.nws_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.ip_echo_url, "http://127.0.0.1:9001/ip");
    assert_eq!(cfg.geoip_base_url, "http://127.0.0.1:9002/json");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn http_timeout_override() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_HTTP_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.http_timeout_secs, 5);
}

#[test]
fn http_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_HTTP_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WXREPORT_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(WXREPORT_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn http_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_HTTP_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn coordinate_override_parses_both_values() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LATITUDE", "30.2672");
    map.insert("WXREPORT_LONGITUDE", " -97.7431 ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let coords = cfg.coordinates.expect("coordinates should be set");
    assert!((coords.latitude - 30.2672).abs() < 1e-9);
    assert!((coords.longitude - -97.7431).abs() < 1e-9);
}

#[test]
fn latitude_without_longitude_fails() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LATITUDE", "30.2672");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "WXREPORT_LONGITUDE"),
        "expected MissingEnvVar(WXREPORT_LONGITUDE), got: {result:?}"
    );
}

#[test]
fn longitude_without_latitude_fails() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LONGITUDE", "-97.7431");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "WXREPORT_LATITUDE"),
        "expected MissingEnvVar(WXREPORT_LATITUDE), got: {result:?}"
    );
}

#[test]
fn unparseable_latitude_fails() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LATITUDE", "north");
    map.insert("WXREPORT_LONGITUDE", "-97.7431");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WXREPORT_LATITUDE")
    );
}

#[test]
fn out_of_range_coordinates_fail() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LATITUDE", "120.0");
    map.insert("WXREPORT_LONGITUDE", "0.0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn forecast_day_match_override() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_FORECAST_DAY_MATCH", "day-of-month");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.forecast_day_match, DayMatch::DayOfMonth);
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("WXREPORT_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
