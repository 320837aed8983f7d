//! MCP Server tools for Panchang, Kundli and horoscope calculations

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rmcp::{
    RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    schemars::{self, schema_for},
    service::RequestContext,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::Capabilities;
use crate::engine::{
    birth_chart_report, compute_panchang, compute_solar_times, fallback_horoscope,
    format_time_from_minutes, locate_moon, match_report, score_compatibility,
};
use crate::models::{
    parse_date, BirthDetails, DailyHoroscopes, GeoLocation, HoroscopeData, HoroscopeSource,
    MoonPlacement, Rashi,
};
use crate::storage::DocumentStore;

/// Shown when a birth date or time is missing
pub const INCOMPLETE_DETAILS_MESSAGE: &str = "Please fill in all Date and Time fields.";

/// Input for date-based tools
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct DateInput {
    #[schemars(description = "Date in YYYY-MM-DD format (default: today in India)")]
    pub date: Option<String>,
}

/// Input for the Moon placement
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct MoonPlacementInput {
    #[schemars(description = "Birth date in YYYY-MM-DD format")]
    pub date: String,
    #[schemars(description = "Birth time in 24-hour HH:MM format, read as UTC")]
    pub time: String,
}

/// A person for chart or matching tools: explicit details or a stored profile name
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct PersonInput {
    #[schemars(description = "Name of the person, or of a stored profile when date and time are omitted")]
    pub name: Option<String>,
    #[schemars(description = "Birth date in YYYY-MM-DD format")]
    pub date: Option<String>,
    #[schemars(description = "Birth time in 24-hour HH:MM format")]
    pub time: Option<String>,
}

/// Input for Kundli matching
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct MatchKundliInput {
    #[schemars(description = "The boy's birth details or profile name")]
    pub boy: PersonInput,
    #[schemars(description = "The girl's birth details or profile name")]
    pub girl: PersonInput,
}

/// Input for a single horoscope
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct HoroscopeInput {
    #[schemars(description = "Zodiac sign name or id (e.g. 'Aries' or 'aries')")]
    pub sign: String,
    #[schemars(description = "Date in YYYY-MM-DD format (default: today in India)")]
    pub date: Option<String>,
}

/// Input for publishing a day's horoscopes
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct StoreDailyHoroscopesInput {
    #[schemars(description = "Date in YYYY-MM-DD format")]
    pub date: String,
    #[schemars(description = "Horoscope entries, one per sign")]
    pub entries: Vec<HoroscopeData>,
}

/// Input for profile lookups
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ProfileNameInput {
    #[schemars(description = "Name of the stored profile")]
    pub name: String,
}

/// Input for deleting a profile
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DeleteProfileInput {
    #[schemars(description = "Name of the profile to delete")]
    pub name: String,
    #[schemars(description = "Birth date of the profile (for confirmation) in YYYY-MM-DD format")]
    pub date: String,
}

/// A horoscope together with where it came from
#[derive(Debug, Clone, Serialize, schemars::JsonSchema)]
pub struct ServedHoroscope {
    pub source: HoroscopeSource,
    #[serde(flatten)]
    pub horoscope: HoroscopeData,
}

fn schema_to_value<T: schemars::JsonSchema>() -> Arc<serde_json::Map<String, Value>> {
    let schema = schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => empty_schema(),
    }
}

fn empty_schema() -> Arc<serde_json::Map<String, Value>> {
    let mut map = serde_json::Map::new();
    map.insert("type".into(), Value::String("object".into()));
    map.insert("properties".into(), Value::Object(serde_json::Map::new()));
    Arc::new(map)
}

fn error_response(message: impl Into<String>) -> String {
    json!({
        "success": false,
        "error": message.into()
    })
    .to_string()
}

fn parse<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, rmcp::ErrorData> {
    serde_json::from_value(args).map_err(|e| rmcp::ErrorData::invalid_params(e.to_string(), None))
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| error_response(format!("Failed to serialize response: {}", e)))
}

/// Parse an optional date, defaulting to today at the Panchang location
fn resolve_date(date: Option<&str>) -> Result<NaiveDate, String> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => parse_date(d).map_err(|e| e.to_string()),
        None => {
            let tz = GeoLocation::NEW_DELHI.timezone;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
    }
}

/// Compact view of a Moon placement for tool output
fn placement_summary(placement: &MoonPlacement) -> Value {
    json!({
        "rashi": placement.rashi.to_string(),
        "rashi_index": placement.rashi_index,
        "rashi_lord": placement.rashi.lord().to_string(),
        "nakshatra": placement.nakshatra.name,
        "nakshatra_index": placement.nakshatra.index,
        "nakshatra_ruler": placement.nakshatra.ruling_planet.to_string(),
        "gana": placement.nakshatra.gana.to_string(),
        "nadi": placement.nakshatra.nadi.to_string(),
        "yoni": placement.nakshatra.yoni,
        "sidereal_longitude": (placement.sidereal_longitude * 100.0).round() / 100.0
    })
}

/// MCP Server for Vedic astrology calculations
#[derive(Clone)]
pub struct JyotishServer {
    store: Arc<dyn DocumentStore>,
    capabilities: Capabilities,
}

impl JyotishServer {
    pub fn new(store: Arc<dyn DocumentStore>, capabilities: Capabilities) -> Self {
        Self {
            store,
            capabilities,
        }
    }

    /// Resolve a person from explicit details or a stored profile
    fn resolve_person(&self, input: PersonInput, default_name: &str) -> Result<BirthDetails, String> {
        let has_date = input.date.as_deref().is_some_and(|d| !d.trim().is_empty());
        let has_time = input.time.as_deref().is_some_and(|t| !t.trim().is_empty());

        if !has_date && !has_time {
            if let Some(name) = input.name.as_deref() {
                return match self.store.get_profile(name) {
                    Ok(Some(profile)) if profile.is_complete() => Ok(profile),
                    Ok(Some(_)) => Err(INCOMPLETE_DETAILS_MESSAGE.to_string()),
                    Ok(None) => Err(format!("Profile '{}' not found", name)),
                    Err(e) => Err(format!("Failed to load profile: {}", e)),
                };
            }
        }

        if !has_date || !has_time {
            return Err(INCOMPLETE_DETAILS_MESSAGE.to_string());
        }

        Ok(BirthDetails {
            name: input
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| default_name.to_string()),
            date: input.date.unwrap_or_default(),
            time: input.time.unwrap_or_default(),
            ..BirthDetails::default_for(default_name)
        })
    }

    fn get_panchang(&self, input: DateInput) -> String {
        let date = match resolve_date(input.date.as_deref()) {
            Ok(d) => d,
            Err(e) => return error_response(e),
        };

        tracing::debug!(%date, "Computing panchang");
        to_pretty_json(&compute_panchang(date))
    }

    fn get_solar_times(&self, input: DateInput) -> String {
        let date = match resolve_date(input.date.as_deref()) {
            Ok(d) => d,
            Err(e) => return error_response(e),
        };

        let sun = compute_solar_times(date, &GeoLocation::NEW_DELHI);
        let response = json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "location": {
                "latitude": GeoLocation::NEW_DELHI.latitude,
                "longitude": GeoLocation::NEW_DELHI.longitude,
                "timezone": GeoLocation::NEW_DELHI.timezone.name()
            },
            "sunrise": format_time_from_minutes(sun.sunrise_minutes),
            "solar_noon": format_time_from_minutes(sun.solar_noon_minutes),
            "sunset": format_time_from_minutes(sun.sunset_minutes),
            "day_duration_minutes": (sun.day_duration_minutes * 10.0).round() / 10.0,
            "raw": sun
        });

        to_pretty_json(&response)
    }

    fn get_moon_placement(&self, input: MoonPlacementInput) -> String {
        match locate_moon(&input.date, &input.time) {
            Ok(placement) => to_pretty_json(&placement),
            Err(e) => error_response(e.to_string()),
        }
    }

    fn get_birth_chart(&self, input: PersonInput) -> String {
        let person = match self.resolve_person(input, "User") {
            Ok(p) => p,
            Err(e) => return error_response(e),
        };

        let placement = match locate_moon(&person.date, &person.time) {
            Ok(p) => p,
            Err(e) => return error_response(e.to_string()),
        };

        let response = json!({
            "success": true,
            "name": person.name,
            "placement": placement_summary(&placement),
            "report": birth_chart_report(&person.name, &placement)
        });

        to_pretty_json(&response)
    }

    fn match_kundli(&self, input: MatchKundliInput) -> String {
        let boy = match self.resolve_person(input.boy, "Boy") {
            Ok(p) => p,
            Err(e) => return error_response(e),
        };
        let girl = match self.resolve_person(input.girl, "Girl") {
            Ok(p) => p,
            Err(e) => return error_response(e),
        };

        let boy_moon = match locate_moon(&boy.date, &boy.time) {
            Ok(p) => p,
            Err(e) => return error_response(format!("{}: {}", boy.name, e)),
        };
        let girl_moon = match locate_moon(&girl.date, &girl.time) {
            Ok(p) => p,
            Err(e) => return error_response(format!("{}: {}", girl.name, e)),
        };

        let report = match_report(&boy.name, &boy_moon, &girl.name, &girl_moon);
        let score = score_compatibility(&boy_moon, &girl_moon);

        tracing::info!(
            boy = %boy.name,
            girl = %girl.name,
            total = score.total_score,
            verdict = %score.verdict,
            "Kundli matched"
        );

        let response = json!({
            "success": true,
            "boy": { "name": boy.name, "placement": placement_summary(&boy_moon) },
            "girl": { "name": girl.name, "placement": placement_summary(&girl_moon) },
            "score": score,
            "report": report,
            "markdown": report.to_markdown()
        });

        to_pretty_json(&response)
    }

    /// Cached horoscope for the date if one was published, else the offline text
    fn serve_horoscope(&self, sign: Rashi, date: NaiveDate) -> ServedHoroscope {
        let key = date.format("%Y-%m-%d").to_string();
        let cached = match self.store.get_daily_horoscopes(&key) {
            Ok(daily) => daily.and_then(|d| d.entries.get(&sign.id()).cloned()),
            Err(e) => {
                tracing::warn!(error = %e, date = %key, "Horoscope cache unavailable");
                None
            }
        };

        match cached {
            Some(horoscope) => ServedHoroscope {
                source: HoroscopeSource::Cached,
                horoscope,
            },
            None => ServedHoroscope {
                source: HoroscopeSource::Offline,
                horoscope: fallback_horoscope(sign.name(), date),
            },
        }
    }

    fn get_horoscope(&self, input: HoroscopeInput) -> String {
        let sign = match Rashi::from_name(&input.sign) {
            Some(s) => s,
            None => return error_response(format!("Unknown zodiac sign: {}", input.sign)),
        };
        let date = match resolve_date(input.date.as_deref()) {
            Ok(d) => d,
            Err(e) => return error_response(e),
        };

        to_pretty_json(&self.serve_horoscope(sign, date))
    }

    fn get_daily_horoscopes(&self, input: DateInput) -> String {
        let date = match resolve_date(input.date.as_deref()) {
            Ok(d) => d,
            Err(e) => return error_response(e),
        };

        let horoscopes: Vec<ServedHoroscope> = Rashi::all()
            .iter()
            .map(|sign| self.serve_horoscope(*sign, date))
            .collect();

        to_pretty_json(&json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "horoscopes": horoscopes
        }))
    }

    fn store_daily_horoscopes(&self, input: StoreDailyHoroscopesInput) -> String {
        let date = match parse_date(&input.date) {
            Ok(d) => d.format("%Y-%m-%d").to_string(),
            Err(e) => return error_response(e.to_string()),
        };

        let mut daily = DailyHoroscopes {
            date: date.clone(),
            ..DailyHoroscopes::default()
        };
        for mut entry in input.entries {
            let sign = match Rashi::from_name(&entry.sign_id) {
                Some(s) => s,
                None => return error_response(format!("Unknown zodiac sign: {}", entry.sign_id)),
            };
            entry.sign_id = sign.id();
            entry.date = date.clone();
            daily.entries.insert(sign.id(), entry);
        }

        let count = daily.entries.len();
        if let Err(e) = self.store.save_daily_horoscopes(daily) {
            return error_response(format!("Failed to save horoscopes: {}", e));
        }

        tracing::info!(%date, count, "Stored daily horoscopes");
        json!({
            "success": true,
            "date": date,
            "stored": count
        })
        .to_string()
    }

    fn store_birth_details(&self, input: BirthDetails) -> String {
        if input.name.trim().is_empty() {
            return error_response("A profile name is required");
        }
        if !input.is_complete() {
            return error_response(INCOMPLETE_DETAILS_MESSAGE);
        }

        let placement = match locate_moon(&input.date, &input.time) {
            Ok(p) => p,
            Err(e) => return error_response(e.to_string()),
        };

        let name = input.name.clone();
        if let Err(e) = self.store.save_profile(input) {
            return error_response(format!("Failed to save profile: {}", e));
        }

        let message = if self.capabilities.persistence {
            "Birth details stored successfully"
        } else {
            "Birth details stored for this session only (persistence disabled)"
        };

        to_pretty_json(&json!({
            "success": true,
            "message": message,
            "name": name,
            "placement": placement_summary(&placement)
        }))
    }

    fn list_profiles(&self) -> String {
        match self.store.list_profiles() {
            Ok(names) => to_pretty_json(&json!({
                "profiles": names,
                "count": names.len()
            })),
            Err(e) => error_response(format!("Failed to list profiles: {}", e)),
        }
    }

    fn get_profile(&self, input: ProfileNameInput) -> String {
        match self.store.get_profile(&input.name) {
            Ok(Some(profile)) => to_pretty_json(&profile),
            Ok(None) => error_response(format!("Profile '{}' not found", input.name)),
            Err(e) => error_response(format!("Failed to load profile: {}", e)),
        }
    }

    fn delete_profile(&self, input: DeleteProfileInput) -> String {
        let profile = match self.store.get_profile(&input.name) {
            Ok(Some(p)) => p,
            Ok(None) => return error_response(format!("Profile '{}' not found", input.name)),
            Err(e) => return error_response(format!("Failed to load profile: {}", e)),
        };

        if profile.date.trim() != input.date.trim() {
            return error_response(format!(
                "Birth date does not match. Expected {}, got {}",
                profile.date, input.date
            ));
        }

        match self.store.delete_profile(&input.name) {
            Ok(_) => json!({
                "success": true,
                "message": format!("Profile '{}' deleted", input.name)
            })
            .to_string(),
            Err(e) => error_response(format!("Failed to delete profile: {}", e)),
        }
    }

    fn get_tools(&self) -> Vec<Tool> {
        vec![
            Tool::new(
                "get_panchang",
                "Get the daily Panchang for New Delhi: tithi, nakshatra, yoga, sunrise, sunset, Rahu Kaal and Abhijit Muhurat.",
                schema_to_value::<DateInput>(),
            ),
            Tool::new(
                "get_solar_times",
                "Get sunrise, solar noon, sunset and day length for New Delhi on a date.",
                schema_to_value::<DateInput>(),
            ),
            Tool::new(
                "get_moon_placement",
                "Get the approximate sidereal Moon position (nakshatra and rashi) for a birth date and time.",
                schema_to_value::<MoonPlacementInput>(),
            ),
            Tool::new(
                "get_birth_chart",
                "Get a Moon-based birth chart report from birth details or a stored profile.",
                schema_to_value::<PersonInput>(),
            ),
            Tool::new(
                "match_kundli",
                "Score Ashtakoot (Guna Milan) compatibility between a boy and a girl, with analysis and remedies.",
                schema_to_value::<MatchKundliInput>(),
            ),
            Tool::new(
                "get_horoscope",
                "Get the daily horoscope for a zodiac sign. Uses published content when available, otherwise generates it offline.",
                schema_to_value::<HoroscopeInput>(),
            ),
            Tool::new(
                "get_daily_horoscopes",
                "Get the daily horoscopes for all twelve signs.",
                schema_to_value::<DateInput>(),
            ),
            Tool::new(
                "store_daily_horoscopes",
                "Publish horoscope content for a date. Stored entries replace the offline text for that date.",
                schema_to_value::<StoreDailyHoroscopesInput>(),
            ),
            Tool::new(
                "store_birth_details",
                "Store a person's birth details as a profile for charts and matching.",
                schema_to_value::<BirthDetails>(),
            ),
            Tool::new(
                "list_profiles",
                "List all stored birth profiles by name.",
                empty_schema(),
            ),
            Tool::new(
                "get_profile",
                "Get a stored birth profile by name.",
                schema_to_value::<ProfileNameInput>(),
            ),
            Tool::new(
                "delete_profile",
                "Delete a stored birth profile. Requires both name and birth date for confirmation.",
                schema_to_value::<DeleteProfileInput>(),
            ),
        ]
    }
}

impl ServerHandler for JyotishServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Jyotish - MCP Server for Vedic astrology. Use get_panchang for the daily \
                 calendar, get_horoscope for sign predictions, and store_birth_details followed \
                 by get_birth_chart or match_kundli for Moon-based charts and Guna Milan."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::ErrorData> {
        Ok(ListToolsResult {
            tools: self.get_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let args: Value = Value::Object(request.arguments.clone().unwrap_or_default());

        tracing::debug!(tool = %request.name, "Tool call");

        let result = match request.name.as_ref() {
            "get_panchang" => self.get_panchang(parse(args)?),
            "get_solar_times" => self.get_solar_times(parse(args)?),
            "get_moon_placement" => self.get_moon_placement(parse(args)?),
            "get_birth_chart" => self.get_birth_chart(parse(args)?),
            "match_kundli" => self.match_kundli(parse(args)?),
            "get_horoscope" => self.get_horoscope(parse(args)?),
            "get_daily_horoscopes" => self.get_daily_horoscopes(parse(args)?),
            "store_daily_horoscopes" => self.store_daily_horoscopes(parse(args)?),
            "store_birth_details" => self.store_birth_details(parse(args)?),
            "list_profiles" => self.list_profiles(),
            "get_profile" => self.get_profile(parse(args)?),
            "delete_profile" => self.delete_profile(parse(args)?),
            _ => {
                return Err(rmcp::ErrorData::invalid_params(
                    format!("Unknown tool: {}", request.name),
                    None,
                ))
            }
        };

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::BTreeMap;

    fn server() -> JyotishServer {
        JyotishServer::new(Arc::new(MemoryStore::new()), Capabilities::default())
    }

    fn parse_json(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    fn person(name: &str, date: &str, time: &str) -> PersonInput {
        PersonInput {
            name: Some(name.to_string()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
        }
    }

    #[test]
    fn test_get_panchang_for_date() {
        let out = parse_json(&server().get_panchang(DateInput {
            date: Some("2025-05-15".into()),
        }));
        assert_eq!(out["tithi"], "Krishna Paksha Ekadashi");
        assert_eq!(out["rahu_kaal"], "1:58 PM - 3:38 PM");
        assert_eq!(out["has_abhijit"], true);
    }

    #[test]
    fn test_get_panchang_defaults_to_today() {
        let out = parse_json(&server().get_panchang(DateInput::default()));
        assert!(out["date"].as_str().is_some());
        assert!(out.get("error").is_none());
    }

    #[test]
    fn test_bad_date_is_reported_not_panicking() {
        let out = parse_json(&server().get_panchang(DateInput {
            date: Some("2025-02-30".into()),
        }));
        assert_eq!(out["success"], false);
        assert!(out["error"].as_str().unwrap().contains("Invalid date"));
    }

    #[test]
    fn test_get_solar_times() {
        let out = parse_json(&server().get_solar_times(DateInput {
            date: Some("2025-05-15".into()),
        }));
        assert_eq!(out["sunrise"], "5:34 AM");
        assert_eq!(out["sunset"], "7:00 PM");
        assert_eq!(out["location"]["timezone"], "Asia/Kolkata");
    }

    #[test]
    fn test_get_moon_placement() {
        let out = parse_json(&server().get_moon_placement(MoonPlacementInput {
            date: "2000-01-01".into(),
            time: "12:00".into(),
        }));
        assert_eq!(out["nakshatra"]["name"], "Purva Ashadha");
        assert_eq!(out["rashi"], "sagittarius");
        assert_eq!(out["rashi_index"], 8);

        let out = parse_json(&server().get_moon_placement(MoonPlacementInput {
            date: "2000-01-01".into(),
            time: "noon".into(),
        }));
        assert_eq!(out["success"], false);
    }

    #[test]
    fn test_incomplete_details_get_graceful_message() {
        let out = parse_json(&server().get_birth_chart(PersonInput {
            name: Some("Asha".into()),
            date: Some("1992-08-20".into()),
            time: None,
        }));
        assert_eq!(out["error"], INCOMPLETE_DETAILS_MESSAGE);
    }

    #[test]
    fn test_birth_chart_defaults_name() {
        let out = parse_json(&server().get_birth_chart(PersonInput {
            name: None,
            date: Some("1995-03-10".into()),
            time: Some("06:00".into()),
        }));
        assert_eq!(out["name"], "User");
        assert_eq!(out["placement"]["nakshatra"], "Magha");
        assert!(out["report"]
            .as_str()
            .unwrap()
            .starts_with("**Birth Chart Analysis for User**"));
    }

    #[test]
    fn test_match_kundli_with_explicit_details() {
        let out = parse_json(&server().match_kundli(MatchKundliInput {
            boy: person("Ravi", "2000-01-01", "12:00"),
            girl: person("Asha", "1992-08-20", "14:45"),
        }));
        assert_eq!(out["success"], true);
        assert_eq!(out["score"]["total_score"], 16.5);
        assert_eq!(out["score"]["verdict"], "Average");
        assert_eq!(out["report"]["score"], 16);
        let markdown = out["markdown"].as_str().unwrap();
        assert!(markdown.starts_with("### Match Score: 16 / 36"));
        assert!(markdown.contains("Nadi Dosha"));
    }

    #[test]
    fn test_profiles_round_trip_and_match_by_name() {
        let server = server();
        for (name, date, time) in [("Ravi", "1995-03-10", "06:00"), ("Asha", "1988-11-02", "23:15")] {
            let out = parse_json(&server.store_birth_details(BirthDetails {
                name: name.into(),
                date: date.into(),
                time: time.into(),
                ..BirthDetails::default_for(name)
            }));
            assert_eq!(out["success"], true);
        }

        let listed = parse_json(&server.list_profiles());
        assert_eq!(listed["count"], 2);

        let out = parse_json(&server.match_kundli(MatchKundliInput {
            boy: PersonInput {
                name: Some("Ravi".into()),
                ..PersonInput::default()
            },
            girl: PersonInput {
                name: Some("Asha".into()),
                ..PersonInput::default()
            },
        }));
        assert_eq!(out["score"]["total_score"], 27.5);
        assert_eq!(out["score"]["verdict"], "Good");

        let missing = parse_json(&server.get_birth_chart(PersonInput {
            name: Some("Nobody".into()),
            ..PersonInput::default()
        }));
        assert_eq!(missing["error"], "Profile 'Nobody' not found");
    }

    #[test]
    fn test_delete_profile_requires_matching_date() {
        let server = server();
        server.store_birth_details(BirthDetails {
            name: "Ravi".into(),
            date: "1990-05-15".into(),
            time: "10:30".into(),
            ..BirthDetails::default_for("Ravi")
        });

        let out = parse_json(&server.delete_profile(DeleteProfileInput {
            name: "Ravi".into(),
            date: "1990-05-16".into(),
        }));
        assert_eq!(out["success"], false);

        let out = parse_json(&server.delete_profile(DeleteProfileInput {
            name: "Ravi".into(),
            date: "1990-05-15".into(),
        }));
        assert_eq!(out["success"], true);
        assert_eq!(parse_json(&server.list_profiles())["count"], 0);
    }

    #[test]
    fn test_store_birth_details_rejects_bad_time() {
        let out = parse_json(&server().store_birth_details(BirthDetails {
            name: "Ravi".into(),
            date: "1990-05-15".into(),
            time: "7pm".into(),
            ..BirthDetails::default_for("Ravi")
        }));
        assert_eq!(out["success"], false);
    }

    #[test]
    fn test_horoscope_falls_back_then_uses_published_content() {
        let server = server();
        let date = Some("2025-05-15".to_string());

        let out = parse_json(&server.get_horoscope(HoroscopeInput {
            sign: "Aries".into(),
            date: date.clone(),
        }));
        assert_eq!(out["source"], "offline");
        assert_eq!(out["signId"], "aries");
        assert_eq!(out["luckyNumber"], 7);
        assert!(out["prediction"]
            .as_str()
            .unwrap()
            .starts_with("For Thursday, May 15,"));

        let stored = parse_json(&server.store_daily_horoscopes(StoreDailyHoroscopesInput {
            date: "2025-05-15".into(),
            entries: vec![HoroscopeData {
                sign_id: "Aries".into(),
                date: String::new(),
                prediction: "Published prediction".into(),
                lucky_color: "Saffron".into(),
                lucky_number: 9,
                remedy: "Light a diya".into(),
                mood: "Hopeful".into(),
            }],
        }));
        assert_eq!(stored["stored"], 1);

        let out = parse_json(&server.get_horoscope(HoroscopeInput {
            sign: "aries".into(),
            date,
        }));
        assert_eq!(out["source"], "cached");
        assert_eq!(out["prediction"], "Published prediction");
        assert_eq!(out["date"], "2025-05-15");
    }

    #[test]
    fn test_daily_horoscopes_cover_all_signs() {
        let server = server();
        let mut entries = BTreeMap::new();
        entries.insert("leo".to_string(), fallback_horoscope("Leo", NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()));
        server
            .store
            .save_daily_horoscopes(DailyHoroscopes {
                date: "2025-05-15".into(),
                entries,
            })
            .unwrap();

        let out = parse_json(&server.get_daily_horoscopes(DateInput {
            date: Some("2025-05-15".into()),
        }));
        let list = out["horoscopes"].as_array().unwrap();
        assert_eq!(list.len(), 12);
        assert_eq!(list[4]["signId"], "leo");
        assert_eq!(list[4]["source"], "cached");
        assert_eq!(list[0]["source"], "offline");
    }

    #[test]
    fn test_unknown_sign() {
        let out = parse_json(&server().get_horoscope(HoroscopeInput {
            sign: "Ophiuchus".into(),
            date: None,
        }));
        assert_eq!(out["success"], false);
    }

    #[test]
    fn test_tool_list_is_complete() {
        let names: Vec<String> = server()
            .get_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"match_kundli".to_string()));
        assert!(names.contains(&"get_panchang".to_string()));
    }
}
