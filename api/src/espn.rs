//! ESPN API raw wire types: serde shapes for deserializing ESPN responses.
//! These map to our clean domain types via the mapping functions in client.rs.
//!
//! Every field goes through one of the lenient helpers below, so a value of
//! the wrong type becomes `None` (or is dropped from its list) instead of
//! failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Team profile  (site v2 API: /teams/{id})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<EspnTeamDetail>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(rename = "displayName", default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "optional_rank")]
    pub rank: Option<i64>, // absent when unranked
    #[serde(default, deserialize_with = "lenient")]
    pub record: Option<EspnTeamRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamRecord {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub items: Option<Vec<EspnRecordItem>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecordItem {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub record_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub stats: Option<Vec<EspnRecordStat>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecordStat {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Team schedule  (site v2 API: /teams/{id}/schedule)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>, // ISO 8601, usually minute precision: "2025-09-06T16:00Z"
    #[serde(default, deserialize_with = "lenient_seq")]
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<EspnStatus>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub competitors: Option<Vec<EspnCompetitor>>,
    #[serde(default, deserialize_with = "lenient")]
    pub venue: Option<EspnVenue>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub broadcasts: Option<Vec<EspnBroadcast>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_FINAL", "STATUS_POSTPONED"
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway", default, deserialize_with = "lenient")]
    pub home_away: Option<String>, // "home" | "away"
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<EspnScore>,
    #[serde(rename = "curatedRank", default, deserialize_with = "lenient")]
    pub curated_rank: Option<EspnRank>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(rename = "displayName", default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRank {
    #[serde(default, deserialize_with = "optional_rank")]
    pub current: Option<i64>, // 99 when unranked
}

/// The schedule endpoint sends completed scores as `{"value": 21.0, "displayValue": "21"}`
/// while other ESPN endpoints send a bare number or string.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EspnScore {
    Bare(EspnScoreValue),
    Wrapped {
        value: Option<EspnScoreValue>,
        #[serde(rename = "displayValue")]
        display_value: Option<String>,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EspnScoreValue {
    Number(f64),
    Text(String),
}

impl EspnScore {
    /// Points as an integer: parsed as a float, then truncated.
    /// Anything unreadable counts as zero.
    pub fn points(&self) -> u16 {
        let raw = match self {
            EspnScore::Bare(v) => v.as_f64(),
            EspnScore::Wrapped { value, display_value } => value
                .as_ref()
                .and_then(EspnScoreValue::as_f64)
                .or_else(|| display_value.as_deref().and_then(|s| s.trim().parse().ok())),
        };
        // float → int casts saturate, NaN becomes 0
        raw.map(|v| v.trunc() as u16).unwrap_or(0)
    }
}

impl EspnScoreValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            EspnScoreValue::Number(n) => Some(*n),
            EspnScoreValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnVenue {
    #[serde(rename = "fullName", default, deserialize_with = "lenient")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<EspnAddress>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnAddress {
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnBroadcast {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub names: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Lenient field helpers
// ---------------------------------------------------------------------------

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(from_value_or_skip))
}

/// Lists keep the entries that deserialize and drop the rest.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Array(items)) => {
            Ok(Some(items.into_iter().filter_map(from_value_or_skip).collect()))
        }
        Some(other) => {
            log::debug!("ignoring non-list value where a list was expected: {other}");
            Ok(None)
        }
        None => Ok(None),
    }
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        _ => Ok(None),
    }
}

/// Poll positions occasionally arrive as strings ("5").
fn optional_rank<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.filter(|n| n.is_finite()).map(|n| n.trunc() as i64))
}

fn from_value_or_skip<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::debug!("ignoring malformed ESPN field: {e}");
            None
        }
    }
}
