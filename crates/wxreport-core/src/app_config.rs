use crate::filters::DayMatch;
use crate::types::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub nws_base_url: String,
    pub ip_echo_url: String,
    pub geoip_base_url: String,
    /// Fixed location; when set, the public-IP lookup is skipped.
    pub coordinates: Option<Coordinates>,
    pub forecast_day_match: DayMatch,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            http_timeout_secs: 30,
            user_agent: "wxreport/0.1 (console-weather)".to_owned(),
            nws_base_url: "https://api.weather.gov".to_owned(),
            ip_echo_url: "https://ipinfo.io/ip".to_owned(),
            geoip_base_url: "http://ip-api.com/json".to_owned(),
            coordinates: None,
            forecast_day_match: DayMatch::CalendarDate,
        }
    }
}
