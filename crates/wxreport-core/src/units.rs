//! Unit conversions for observation values.
//!
//! NWS station observations report temperature in °C and wind speed in km/h;
//! the console report shows °F and mph.

/// Kilometres per mile, as used for the wind-speed conversion.
pub const KM_PER_MILE: f64 = 1.609;

/// Converts degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts kilometres per hour to miles per hour.
#[must_use]
pub fn kph_to_mph(kph: f64) -> f64 {
    kph / KM_PER_MILE
}
