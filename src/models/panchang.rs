use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Observer location for solar-time calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// Longitude of the standard time meridian
    pub standard_meridian: f64,
    /// Civil time zone, used to resolve "today"
    pub timezone: Tz,
}

impl GeoLocation {
    /// New Delhi on Indian Standard Time
    pub const NEW_DELHI: GeoLocation = GeoLocation {
        latitude: 28.61,
        longitude: 77.2,
        standard_meridian: 82.5,
        timezone: chrono_tz::Asia::Kolkata,
    };
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::NEW_DELHI
    }
}

/// Solar times for one calendar date, in minutes from local midnight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SolarTimes {
    pub sunrise_minutes: f64,
    pub sunset_minutes: f64,
    pub solar_noon_minutes: f64,
    pub day_duration_minutes: f64,
}

/// Daily Panchang
#[derive(Debug, Clone, PartialEq, Serialize, schemars::JsonSchema)]
pub struct PanchangData {
    /// Date in YYYY-MM-DD format
    pub date: String,
    pub weekday: String,
    pub tithi: String,
    pub nakshatra: String,
    pub yoga: String,
    pub sunrise: String,
    pub sunset: String,
    pub rahu_kaal: String,
    pub abhijit_muhurat: String,
    /// Decimal hours (0-24)
    pub rahu_start: f64,
    pub rahu_end: f64,
    /// Decimal hours (0-24); 0.0 when there is no Abhijit window
    pub abhijit_start: f64,
    pub abhijit_end: f64,
    pub has_abhijit: bool,
}
