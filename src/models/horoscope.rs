use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A daily horoscope entry, shared by the offline generator and AI content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeData {
    /// Lowercase sign id (e.g. "aries")
    pub sign_id: String,
    /// Date in YYYY-MM-DD format
    pub date: String,
    pub prediction: String,
    pub lucky_color: String,
    pub lucky_number: u32,
    pub remedy: String,
    pub mood: String,
}

/// All horoscopes published for one date, keyed by sign id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DailyHoroscopes {
    pub date: String,
    pub entries: BTreeMap<String, HoroscopeData>,
}

/// Where a served horoscope came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HoroscopeSource {
    /// Published content found in the document store
    Cached,
    /// Generated locally from the sign and date
    Offline,
}
