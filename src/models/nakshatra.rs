//! The 27 nakshatras with their fixed classifications

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Graha, Rashi};

/// Span of one nakshatra: 360/27 degrees (13°20')
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Temperament group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl fmt::Display for Gana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gana::Deva => "Deva",
            Gana::Manushya => "Manushya",
            Gana::Rakshasa => "Rakshasa",
        };
        write!(f, "{}", name)
    }
}

/// Constitution group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl fmt::Display for Nadi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nadi::Adi => "Adi",
            Nadi::Madhya => "Madhya",
            Nadi::Antya => "Antya",
        };
        write!(f, "{}", name)
    }
}

/// Static classification of a nakshatra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct NakshatraInfo {
    /// 0 = Ashwini, 26 = Revati
    pub index: usize,
    pub name: &'static str,
    pub ruling_planet: Graha,
    /// Sign the nakshatra is traditionally listed under
    pub zodiac_sign: Rashi,
    pub gana: Gana,
    /// Yoni (animal symbol)
    pub yoni: &'static str,
    pub nadi: Nadi,
}

const fn nak(
    index: usize,
    name: &'static str,
    ruling_planet: Graha,
    zodiac_sign: Rashi,
    gana: Gana,
    yoni: &'static str,
    nadi: Nadi,
) -> NakshatraInfo {
    NakshatraInfo {
        index,
        name,
        ruling_planet,
        zodiac_sign,
        gana,
        yoni,
        nadi,
    }
}

use Gana::{Deva, Manushya, Rakshasa};
use Graha::{Jupiter, Ketu, Mars, Mercury, Moon, Rahu, Saturn, Sun, Venus};
use Nadi::{Adi, Antya, Madhya};

/// All 27 nakshatras in ecliptic order.
///
/// Krittika spans Aries and Taurus; it is listed under Aries.
pub const NAKSHATRAS: [NakshatraInfo; 27] = [
    nak(0, "Ashwini", Ketu, Rashi::Aries, Deva, "Ashwa", Adi),
    nak(1, "Bharani", Venus, Rashi::Aries, Manushya, "Gaja", Madhya),
    nak(2, "Krittika", Sun, Rashi::Aries, Rakshasa, "Mesha", Antya),
    nak(3, "Rohini", Moon, Rashi::Taurus, Manushya, "Sarpa", Antya),
    nak(4, "Mrigashira", Mars, Rashi::Taurus, Deva, "Sarpa", Madhya),
    nak(5, "Ardra", Rahu, Rashi::Gemini, Manushya, "Shwan", Adi),
    nak(6, "Punarvasu", Jupiter, Rashi::Gemini, Deva, "Marjar", Adi),
    nak(7, "Pushya", Saturn, Rashi::Cancer, Deva, "Mesha", Madhya),
    nak(8, "Ashlesha", Mercury, Rashi::Cancer, Rakshasa, "Marjar", Antya),
    nak(9, "Magha", Ketu, Rashi::Leo, Rakshasa, "Mushak", Antya),
    nak(10, "Purva Phalguni", Venus, Rashi::Leo, Manushya, "Mushak", Madhya),
    nak(11, "Uttara Phalguni", Sun, Rashi::Leo, Manushya, "Gau", Adi),
    nak(12, "Hasta", Moon, Rashi::Virgo, Deva, "Mahish", Adi),
    nak(13, "Chitra", Mars, Rashi::Virgo, Rakshasa, "Vyaghra", Madhya),
    nak(14, "Swati", Rahu, Rashi::Libra, Deva, "Mahish", Antya),
    nak(15, "Vishakha", Jupiter, Rashi::Libra, Rakshasa, "Vyaghra", Antya),
    nak(16, "Anuradha", Saturn, Rashi::Scorpio, Deva, "Mrig", Madhya),
    nak(17, "Jyeshtha", Mercury, Rashi::Scorpio, Rakshasa, "Mrig", Adi),
    nak(18, "Mula", Ketu, Rashi::Sagittarius, Rakshasa, "Shwan", Adi),
    nak(19, "Purva Ashadha", Venus, Rashi::Sagittarius, Manushya, "Vanar", Madhya),
    nak(20, "Uttara Ashadha", Sun, Rashi::Sagittarius, Manushya, "Nakul", Antya),
    nak(21, "Shravana", Moon, Rashi::Capricorn, Deva, "Vanar", Antya),
    nak(22, "Dhanishta", Mars, Rashi::Capricorn, Rakshasa, "Simha", Madhya),
    nak(23, "Shatabhisha", Rahu, Rashi::Aquarius, Rakshasa, "Ashwa", Adi),
    nak(24, "Purva Bhadrapada", Jupiter, Rashi::Aquarius, Manushya, "Simha", Adi),
    nak(25, "Uttara Bhadrapada", Saturn, Rashi::Pisces, Manushya, "Gau", Madhya),
    nak(26, "Revati", Mercury, Rashi::Pisces, Deva, "Gaja", Antya),
];

impl NakshatraInfo {
    /// Look up a nakshatra by index, wrapping past 26
    pub fn from_index(index: usize) -> &'static NakshatraInfo {
        &NAKSHATRAS[index % 27]
    }

    /// Nakshatra containing a sidereal longitude
    pub fn from_longitude(longitude: f64) -> &'static NakshatraInfo {
        let normalized = longitude.rem_euclid(360.0);
        Self::from_index((normalized / NAKSHATRA_SPAN).floor() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indices_match_positions() {
        for (i, n) in NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index, i);
        }
    }

    #[test]
    fn test_from_longitude_boundaries() {
        assert_eq!(NakshatraInfo::from_longitude(0.0).name, "Ashwini");
        assert_eq!(NakshatraInfo::from_longitude(13.4).name, "Bharani");
        assert_eq!(NakshatraInfo::from_longitude(359.99).name, "Revati");
    }

    #[test]
    fn test_each_nadi_appears_nine_times() {
        for nadi in [Nadi::Adi, Nadi::Madhya, Nadi::Antya] {
            let count = NAKSHATRAS.iter().filter(|n| n.nadi == nadi).count();
            assert_eq!(count, 9, "{nadi}");
        }
    }
}
