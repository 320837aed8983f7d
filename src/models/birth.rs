use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{NakshatraInfo, Rashi};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Birth details as entered by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BirthDetails {
    #[schemars(description = "Name of the person")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "Gender: 'male' or 'female'")]
    pub gender: Gender,

    /// Birth date in YYYY-MM-DD format
    #[schemars(description = "Birth date in YYYY-MM-DD format")]
    pub date: String,

    /// Birth time in HH:MM format
    #[schemars(description = "Birth time in 24-hour HH:MM format")]
    pub time: String,

    /// Birth place. Recorded for display only; calculations do not use it.
    #[serde(default)]
    #[schemars(description = "Birth place (informational, not used in calculations)")]
    pub place: String,
}

impl BirthDetails {
    /// Empty details carrying only a name
    pub fn default_for(name: &str) -> Self {
        Self {
            name: name.to_string(),
            gender: Gender::default(),
            date: String::new(),
            time: String::new(),
            place: String::new(),
        }
    }

    /// Whether both date and time were supplied
    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty() && !self.time.trim().is_empty()
    }

    pub fn parse_date(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn parse_time(&self) -> Result<NaiveTime> {
        parse_time(&self.time)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::invalid_date(value))
}

/// Parse a 24-hour `HH:MM` time, also accepting `HH:MM:SS`
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| Error::invalid_time(value))
}

/// Position of the Moon at birth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, schemars::JsonSchema)]
pub struct MoonPlacement {
    pub nakshatra: NakshatraInfo,
    pub rashi: Rashi,
    /// 0 = Aries, 11 = Pisces
    pub rashi_index: usize,
    /// Mean tropical longitude (0-360)
    pub tropical_longitude: f64,
    /// Sidereal longitude after the fixed ayanamsa (0-360)
    pub sidereal_longitude: f64,
}
