//! Approximate sidereal Moon position from mean daily motion.
//!
//! Birth date and time are read as UTC and the birth place is ignored. The
//! longitude is the mean Moon only (no perturbation terms) shifted by a fixed
//! ayanamsa, so results are indicative rather than ephemeris grade.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::models::{parse_date, parse_time, MoonPlacement, NakshatraInfo, Rashi};

/// Mean lunar longitude at the J2000.0 epoch, in degrees
pub const MOON_LONGITUDE_AT_EPOCH: f64 = 280.46;

/// Mean lunar motion in degrees per day
pub const MOON_DAILY_MOTION: f64 = 13.176358;

/// Fixed ayanamsa in degrees
pub const AYANAMSA: f64 = 24.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 2000-01-01T12:00:00Z
fn j2000() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Normalize an angle to [0, 360)
fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Days elapsed since J2000.0 (fractional, negative before the epoch)
pub fn days_since_j2000(instant: NaiveDateTime) -> f64 {
    (instant - j2000()).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Locate the Moon for a `YYYY-MM-DD` birth date and `HH:MM` birth time
pub fn locate_moon(birth_date: &str, birth_time: &str) -> Result<MoonPlacement> {
    let date = parse_date(birth_date)?;
    let time = parse_time(birth_time)?;
    Ok(locate_moon_at(date.and_time(time)))
}

/// Locate the Moon for a UTC instant
pub fn locate_moon_at(instant: NaiveDateTime) -> MoonPlacement {
    let days = days_since_j2000(instant);

    let tropical = normalize_degrees(MOON_LONGITUDE_AT_EPOCH + MOON_DAILY_MOTION * days);
    let sidereal = normalize_degrees(tropical - AYANAMSA);

    let nakshatra = *NakshatraInfo::from_longitude(sidereal);
    let rashi_index = ((sidereal / 30.0).floor() as usize) % 12;

    tracing::debug!(
        %instant,
        sidereal,
        nakshatra = nakshatra.name,
        rashi_index,
        "Located Moon"
    );

    MoonPlacement {
        nakshatra,
        rashi: Rashi::from_index(rashi_index),
        rashi_index,
        tropical_longitude: tropical,
        sidereal_longitude: sidereal,
    }
}

/// Markdown birth-chart summary for a Moon placement
pub fn birth_chart_report(name: &str, placement: &MoonPlacement) -> String {
    let nakshatra = &placement.nakshatra;
    format!(
        "**Birth Chart Analysis for {name}**\n\n\
         1. **Core Identity (Moon Sign/Rashi):** {rashi}\n   \
         - Your emotional core is ruled by **{lord}**.\n\
         2. **Nakshatra (Constellation):** {nak}\n   \
         - **Ruler:** {ruler}\n   \
         - **Symbol:** {yoni} (Nature/Animal Symbol)\n\
         3. **Nature (Gana):** {gana}\n   \
         - Determines your temperament and reaction to the world.\n\
         4. **Energy Flow (Nadi):** {nadi}\n   \
         - Indicates your physiological and spiritual constitution.\n\n\
         *Note: This chart is calculated using standard sidereal approximations.*",
        rashi = placement.rashi,
        lord = placement.rashi.lord(),
        nak = nakshatra.name,
        ruler = nakshatra.ruling_planet,
        yoni = nakshatra.yoni,
        gana = nakshatra.gana,
        nadi = nakshatra.nadi,
    )
}
