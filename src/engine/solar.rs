//! Sunrise, sunset and solar noon from an equation-of-time approximation

use chrono::{Datelike, NaiveDate};

use crate::models::{GeoLocation, SolarTimes};

/// Length of the Abhijit window in minutes
pub const ABHIJIT_SPAN_MINUTES: f64 = 48.0;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Equation of time in minutes for a day of the year
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = ((360.0 / 365.0) * (day_of_year as f64 - 81.0)).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Solar declination in degrees for a day of the year
pub fn solar_declination(day_of_year: u32) -> f64 {
    23.45 * ((360.0 / 365.0) * (day_of_year as f64 - 81.0)).to_radians().sin()
}

/// Compute solar times for a calendar date at a location.
///
/// The date is read as a local calendar day; times are minutes from local
/// midnight on the location's standard meridian.
pub fn compute_solar_times(date: NaiveDate, location: &GeoLocation) -> SolarTimes {
    let day_of_year = date.ordinal();

    let eot = equation_of_time(day_of_year);
    let declination = solar_declination(day_of_year);

    let longitude_correction = (location.standard_meridian - location.longitude) * 4.0;
    let solar_noon = 720.0 + longitude_correction - eot;

    // Clamped so polar day and night saturate instead of producing NaN
    let cos_w = (-location.latitude.to_radians().tan() * declination.to_radians().tan())
        .clamp(-1.0, 1.0);
    let hour_angle = cos_w.acos().to_degrees();
    let half_day = hour_angle * 4.0;

    let sunrise = solar_noon - half_day;
    let sunset = solar_noon + half_day;

    SolarTimes {
        sunrise_minutes: sunrise,
        sunset_minutes: sunset,
        solar_noon_minutes: solar_noon,
        day_duration_minutes: sunset - sunrise,
    }
}

impl SolarTimes {
    /// True when the sun does not properly rise and set, or daylight is
    /// shorter than the Abhijit window.
    pub fn is_degenerate(&self) -> bool {
        self.day_duration_minutes <= ABHIJIT_SPAN_MINUTES
            || self.day_duration_minutes >= MINUTES_PER_DAY - 1e-6
    }
}

/// Format minutes from midnight as `H:MM AM/PM`
pub fn format_time_from_minutes(minutes_from_midnight: f64) -> String {
    let hours = (minutes_from_midnight / 60.0).floor() as i64;
    let minutes = (minutes_from_midnight % 60.0).trunc() as i64;
    let ampm = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, minutes, ampm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi(y: i32, m: u32, d: u32) -> SolarTimes {
        compute_solar_times(NaiveDate::from_ymd_opt(y, m, d).unwrap(), &GeoLocation::NEW_DELHI)
    }

    #[test]
    fn test_format_time_from_minutes() {
        assert_eq!(format_time_from_minutes(0.0), "12:00 AM");
        assert_eq!(format_time_from_minutes(720.0), "12:00 PM");
        assert_eq!(format_time_from_minutes(1439.0), "11:59 PM");
        assert_eq!(format_time_from_minutes(334.66), "5:34 AM");
        assert_eq!(format_time_from_minutes(779.99), "12:59 PM");
    }

    #[test]
    fn test_delhi_mid_may() {
        let sun = delhi(2025, 5, 15);
        assert!((sun.sunrise_minutes - 334.6597).abs() < 0.01);
        assert!((sun.solar_noon_minutes - 737.4438).abs() < 0.01);
        assert!((sun.sunset_minutes - 1140.2279).abs() < 0.01);
        assert_eq!(format_time_from_minutes(sun.sunrise_minutes), "5:34 AM");
        assert_eq!(format_time_from_minutes(sun.sunset_minutes), "7:00 PM");
    }

    #[test]
    fn test_winter_days_are_shorter() {
        let winter = delhi(2024, 12, 21);
        let summer = delhi(2025, 6, 21);
        assert!(winter.day_duration_minutes < summer.day_duration_minutes);
        assert_eq!(format_time_from_minutes(winter.sunrise_minutes), "7:15 AM");
        assert_eq!(format_time_from_minutes(summer.sunset_minutes), "7:17 PM");
    }

    #[test]
    fn test_ordering_holds_for_every_day_of_a_leap_year() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            let sun = compute_solar_times(date, &GeoLocation::NEW_DELHI);
            assert!(sun.sunrise_minutes < sun.solar_noon_minutes, "{date}");
            assert!(sun.solar_noon_minutes < sun.sunset_minutes, "{date}");
            assert!(sun.day_duration_minutes > 0.0, "{date}");
            assert!(!sun.is_degenerate(), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_polar_night_saturates_without_nan() {
        let arctic = GeoLocation {
            latitude: 89.0,
            longitude: 19.0,
            standard_meridian: 15.0,
            timezone: chrono_tz::Europe::Oslo,
        };
        let sun = compute_solar_times(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(), &arctic);
        assert!(sun.day_duration_minutes.is_finite());
        assert_eq!(sun.day_duration_minutes, 0.0);
        assert!(sun.is_degenerate());

        let midsummer = compute_solar_times(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), &arctic);
        assert!((midsummer.day_duration_minutes - 1440.0).abs() < 1e-9);
        assert!(midsummer.is_degenerate());
    }
}
