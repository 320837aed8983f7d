//! Daily Panchang: Rahu Kaal, Abhijit Muhurat and calendar labels

use chrono::{Datelike, NaiveDate};

use super::solar::{compute_solar_times, format_time_from_minutes, ABHIJIT_SPAN_MINUTES};
use crate::models::{GeoLocation, PanchangData, SolarTimes};

/// 1-based daylight segment holding Rahu Kaal, indexed from Sunday
pub const RAHU_SEGMENTS: [u32; 7] = [8, 2, 7, 5, 6, 4, 3];

// Cyclic placeholder labels; not derived from the lunar phase.
const TITHIS: [&str; 6] = [
    "Shukla Paksha Dashami",
    "Krishna Paksha Ekadashi",
    "Shukla Paksha Tritiya",
    "Amavasya",
    "Purnima",
    "Shukla Paksha Saptami",
];
const NAKSHATRAS: [&str; 7] = [
    "Rohini",
    "Ashwini",
    "Bharani",
    "Krittika",
    "Mrigashirsha",
    "Ardra",
    "Punarvasu",
];
const YOGAS: [&str; 6] = ["Siddha", "Shubha", "Indra", "Brahma", "Vaidhrti", "Vishkumbha"];

/// Start and end of a window, in minutes from midnight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn format(&self) -> String {
        format!(
            "{} - {}",
            format_time_from_minutes(self.start),
            format_time_from_minutes(self.end)
        )
    }
}

/// Rahu Kaal for a weekday (0 = Sunday)
pub fn rahu_kaal(sun: &SolarTimes, days_from_sunday: u32) -> Interval {
    let segment = RAHU_SEGMENTS[(days_from_sunday % 7) as usize];
    let segment_duration = sun.day_duration_minutes / 8.0;
    let start = sun.sunrise_minutes + (segment - 1) as f64 * segment_duration;
    Interval {
        start,
        end: start + segment_duration,
    }
}

/// Abhijit Muhurat centred on solar noon, or `None` on a degenerate day
pub fn abhijit_muhurat(sun: &SolarTimes) -> Option<Interval> {
    if sun.is_degenerate() {
        return None;
    }
    let half = ABHIJIT_SPAN_MINUTES / 2.0;
    Some(Interval {
        start: sun.solar_noon_minutes - half,
        end: sun.solar_noon_minutes + half,
    })
}

/// Tithi, nakshatra and yoga labels for a date, rotated by day and month
pub fn calendar_labels(date: NaiveDate) -> (&'static str, &'static str, &'static str) {
    // Zero-based month, January = 0
    let seed = (date.day() + date.month0()) as usize;
    (
        TITHIS[seed % TITHIS.len()],
        NAKSHATRAS[seed % NAKSHATRAS.len()],
        YOGAS[seed % YOGAS.len()],
    )
}

/// Panchang for a date at New Delhi
pub fn compute_panchang(date: NaiveDate) -> PanchangData {
    compute_panchang_at(date, &GeoLocation::NEW_DELHI)
}

/// Panchang for a date at an explicit location
pub fn compute_panchang_at(date: NaiveDate, location: &GeoLocation) -> PanchangData {
    let sun = compute_solar_times(date, location);
    let rahu = rahu_kaal(&sun, date.weekday().num_days_from_sunday());
    let (tithi, nakshatra, yoga) = calendar_labels(date);

    let abhijit = abhijit_muhurat(&sun);
    if abhijit.is_none() {
        tracing::warn!(
            %date,
            day_duration = sun.day_duration_minutes,
            "No Abhijit Muhurat: day length outside the approximation's range"
        );
    }

    let (abhijit_muhurat, abhijit_start, abhijit_end) = match abhijit {
        Some(window) => (window.format(), window.start / 60.0, window.end / 60.0),
        None => ("Not available".to_string(), 0.0, 0.0),
    };

    PanchangData {
        date: date.format("%Y-%m-%d").to_string(),
        weekday: date.format("%A").to_string(),
        tithi: tithi.to_string(),
        nakshatra: nakshatra.to_string(),
        yoga: yoga.to_string(),
        sunrise: format_time_from_minutes(sun.sunrise_minutes),
        sunset: format_time_from_minutes(sun.sunset_minutes),
        rahu_kaal: rahu.format(),
        abhijit_muhurat,
        rahu_start: rahu.start / 60.0,
        rahu_end: rahu.end / 60.0,
        abhijit_start,
        abhijit_end,
        has_abhijit: abhijit_start > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_panchang_for_thursday() {
        let p = compute_panchang(date(2025, 5, 15));
        assert_eq!(p.weekday, "Thursday");
        assert_eq!(p.tithi, "Krishna Paksha Ekadashi");
        assert_eq!(p.nakshatra, "Ardra");
        assert_eq!(p.yoga, "Shubha");
        assert_eq!(p.sunrise, "5:34 AM");
        assert_eq!(p.sunset, "7:00 PM");
        assert_eq!(p.rahu_kaal, "1:58 PM - 3:38 PM");
        assert_eq!(p.abhijit_muhurat, "11:53 AM - 12:41 PM");
        assert!((p.rahu_start - 13.969).abs() < 0.001);
        assert!(p.has_abhijit);
        assert!(p.rahu_start < p.rahu_end);
        assert!(p.abhijit_start < p.abhijit_end);
    }

    #[test]
    fn test_panchang_is_deterministic() {
        let d = date(2025, 1, 1);
        assert_eq!(compute_panchang(d), compute_panchang(d));
    }

    #[test]
    fn test_rahu_segment_follows_weekday_table() {
        // 2025-05-11 is a Sunday
        let expected = [8, 2, 7, 5, 6, 4, 3];
        for offset in 0..7 {
            let d = date(2025, 5, 11 + offset);
            let sun = compute_solar_times(d, &GeoLocation::NEW_DELHI);
            let p = compute_panchang(d);
            let segment = sun.day_duration_minutes / 8.0;
            let index = ((p.rahu_start * 60.0 - sun.sunrise_minutes) / segment).round() as u32 + 1;
            assert_eq!(index, expected[offset as usize], "{}", p.weekday);
            assert!(((p.rahu_end - p.rahu_start) * 60.0 - segment).abs() < 1e-6);
        }
    }

    #[test]
    fn test_labels_use_zero_based_month() {
        // January 1st: 1 + 0
        assert_eq!(
            calendar_labels(date(2025, 1, 1)),
            ("Krishna Paksha Ekadashi", "Ashwini", "Shubha")
        );
        // December 31st: 31 + 11 = 42
        assert_eq!(
            calendar_labels(date(2025, 12, 31)),
            ("Shukla Paksha Dashami", "Rohini", "Siddha")
        );
    }

    #[test]
    fn test_degenerate_day_uses_sentinel() {
        let arctic = GeoLocation {
            latitude: 89.0,
            longitude: 19.0,
            standard_meridian: 15.0,
            timezone: chrono_tz::Europe::Oslo,
        };
        let p = compute_panchang_at(date(2024, 12, 21), &arctic);
        assert!(!p.has_abhijit);
        assert_eq!(p.abhijit_start, 0.0);
        assert_eq!(p.abhijit_end, 0.0);
        assert_eq!(p.abhijit_muhurat, "Not available");
    }
}
