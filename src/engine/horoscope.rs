//! Offline daily horoscope text, seeded by sign and date

use chrono::{Datelike, NaiveDate};

use crate::models::HoroscopeData;

const ADJECTIVES: [&str; 9] = [
    "transformative",
    "energetic",
    "peaceful",
    "challenging",
    "prosperous",
    "spiritual",
    "dynamic",
    "auspicious",
    "reflective",
];

const FOCUS_AREAS: [&str; 9] = [
    "career",
    "relationships",
    "health",
    "finance",
    "spirituality",
    "creativity",
    "family",
    "travel",
    "learning",
];

const PLANETS: [&str; 9] = [
    "Mars", "Venus", "Jupiter", "Saturn", "Mercury", "Sun", "Moon", "Rahu", "Ketu",
];

/// Seed from the first character of the sign plus day, zero-based month and year
fn seed(sign: &str, date: NaiveDate) -> usize {
    let first = sign.chars().next().map(|c| c as usize).unwrap_or(0);
    first + date.day() as usize + date.month0() as usize + date.year().max(0) as usize
}

/// Generate the horoscope sentence for a sign on a date.
///
/// The same sign and date always produce the same text.
pub fn generate_horoscope(sign: &str, date: NaiveDate) -> String {
    let seed = seed(sign, date);

    let adjective = ADJECTIVES[seed % ADJECTIVES.len()];
    let focus = FOCUS_AREAS[(seed * 2) % FOCUS_AREAS.len()];
    let planet = PLANETS[(seed * 3) % PLANETS.len()];
    let secondary = ADJECTIVES[(seed + 5) % ADJECTIVES.len()];

    format!(
        "For {}, the stars align to bring a {} energy to your life. \
         The influence of {} highlights a significant focus on {}. \
         While the morning may feel {}, trust your intuition as the day progresses. \
         Avoid unnecessary conflicts and embrace the cosmic flow.",
        date.format("%A, %B %-d"),
        adjective,
        planet,
        focus,
        secondary,
    )
}

/// Horoscope record in the same shape as published content
pub fn fallback_horoscope(sign: &str, date: NaiveDate) -> HoroscopeData {
    HoroscopeData {
        sign_id: sign.trim().to_ascii_lowercase(),
        date: date.format("%Y-%m-%d").to_string(),
        prediction: generate_horoscope(sign, date),
        lucky_color: "Crimson Red".to_string(),
        lucky_number: 7,
        remedy: "Offer Water to Sun".to_string(),
        mood: "Energetic".to_string(),
    }
}
