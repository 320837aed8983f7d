//! Pure calculation engine: solar times, Panchang, Moon placement,
//! Guna Milan scoring and offline horoscopes.
//!
//! Nothing here performs I/O or holds state; every function may be called
//! concurrently.

pub mod horoscope;
pub mod matching;
pub mod moon;
pub mod panchang;
pub mod solar;

pub use horoscope::{fallback_horoscope, generate_horoscope};
pub use matching::{
    bhakoot_distance, bhakoot_points, gana_points, graha_maitri_points, match_report,
    nadi_points, score_compatibility,
};
pub use moon::{birth_chart_report, locate_moon, locate_moon_at};
pub use panchang::{compute_panchang, compute_panchang_at, rahu_kaal, RAHU_SEGMENTS};
pub use solar::{compute_solar_times, format_time_from_minutes};
