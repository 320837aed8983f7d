use serde::{Deserialize, Serialize};
use std::fmt;

/// Rashis (sidereal zodiac signs) in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Rashi {
    /// Get all rashis in zodiac order
    pub fn all() -> &'static [Rashi] {
        &[
            Rashi::Aries,
            Rashi::Taurus,
            Rashi::Gemini,
            Rashi::Cancer,
            Rashi::Leo,
            Rashi::Virgo,
            Rashi::Libra,
            Rashi::Scorpio,
            Rashi::Sagittarius,
            Rashi::Capricorn,
            Rashi::Aquarius,
            Rashi::Pisces,
        ]
    }

    /// Get rashi from sidereal longitude (0-360 degrees)
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = longitude.rem_euclid(360.0);
        Self::from_index((normalized / 30.0).floor() as usize)
    }

    /// Get rashi from index (0 = Aries, 11 = Pisces), wrapping past 11
    pub fn from_index(index: usize) -> Self {
        Self::all()[index % 12]
    }

    /// Parse a sign name or id ("Aries", "aries")
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
    }

    /// Get rashi index (0 = Aries, 11 = Pisces)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rashi::Aries => "Aries",
            Rashi::Taurus => "Taurus",
            Rashi::Gemini => "Gemini",
            Rashi::Cancer => "Cancer",
            Rashi::Leo => "Leo",
            Rashi::Virgo => "Virgo",
            Rashi::Libra => "Libra",
            Rashi::Scorpio => "Scorpio",
            Rashi::Sagittarius => "Sagittarius",
            Rashi::Capricorn => "Capricorn",
            Rashi::Aquarius => "Aquarius",
            Rashi::Pisces => "Pisces",
        }
    }

    /// Lowercase id used as the horoscope document key
    pub fn id(&self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Ruling graha of the sign
    pub fn lord(&self) -> Graha {
        match self {
            Rashi::Aries | Rashi::Scorpio => Graha::Mars,
            Rashi::Taurus | Rashi::Libra => Graha::Venus,
            Rashi::Gemini | Rashi::Virgo => Graha::Mercury,
            Rashi::Cancer => Graha::Moon,
            Rashi::Leo => Graha::Sun,
            Rashi::Sagittarius | Rashi::Pisces => Graha::Jupiter,
            Rashi::Capricorn | Rashi::Aquarius => Graha::Saturn,
        }
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Natural relationship of one graha towards another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

impl Relation {
    /// Points contributed towards Graha Maitri
    pub fn points(&self) -> f64 {
        match self {
            Relation::Friend => 1.0,
            Relation::Neutral => 0.5,
            Relation::Enemy => 0.0,
        }
    }
}

/// The nine grahas of Vedic astrology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// North lunar node
    Rahu,
    /// South lunar node
    Ketu,
}

impl Graha {
    /// How `self` regards `other`.
    ///
    /// Pairs missing from the friend and neutral lists count as enemies,
    /// including a graha looking at itself.
    pub fn relation_to(&self, other: Graha) -> Relation {
        use Graha::*;
        use Relation::*;

        match (self, other) {
            (Sun, Moon | Mars | Jupiter) => Friend,
            (Sun, Mercury) => Neutral,

            (Moon, Sun | Mercury) => Friend,
            (Moon, Mars | Jupiter | Venus | Saturn) => Neutral,

            (Mars, Sun | Moon | Jupiter) => Friend,
            (Mars, Venus | Saturn) => Neutral,

            (Mercury, Sun | Venus) => Friend,
            (Mercury, Mars | Jupiter | Saturn) => Neutral,

            (Jupiter, Sun | Moon | Mars) => Friend,
            (Jupiter, Saturn) => Neutral,

            (Venus, Mercury | Saturn) => Friend,
            (Venus, Mars | Jupiter) => Neutral,

            (Saturn, Mercury | Venus) => Friend,
            (Saturn, Jupiter) => Neutral,

            (Rahu, Venus | Saturn) => Friend,
            (Rahu, Mercury | Jupiter) => Neutral,

            (Ketu, Mars | Venus) => Friend,
            (Ketu, Mercury | Jupiter) => Neutral,

            _ => Enemy,
        }
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Graha::Sun => "Sun",
            Graha::Moon => "Moon",
            Graha::Mars => "Mars",
            Graha::Mercury => "Mercury",
            Graha::Jupiter => "Jupiter",
            Graha::Venus => "Venus",
            Graha::Saturn => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        };
        write!(f, "{}", name)
    }
}
