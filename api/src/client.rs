use crate::espn::{ScheduleResponse, TeamResponse};
use crate::{
    Competition, Competitor, Event, GameStatus, Location, Rank, RecordStat, RecordSummary,
    TeamProfile, Venue,
};
use chrono::{DateTime, FixedOffset};
use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/college-football";
// ESPN rejects some non-browser agents on the site API.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// College football client backed by ESPN's public site API.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for EspnApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            base_url: ESPN_SITE_V2.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
        }
    }
}

impl EspnApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host serving the same paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Per-request timeout, covering connect through the end of the body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the team profile: name, poll rank and record summaries.
    pub fn fetch_team(&self, team_id: &str) -> ApiResult<TeamProfile> {
        let url = format!("{}/teams/{team_id}", self.base_url);
        let raw: TeamResponse = self.get(&url)?;
        Ok(map_team(team_id, raw))
    }

    /// Fetch the team's season schedule in ESPN's order.
    pub fn fetch_schedule(&self, team_id: &str) -> ApiResult<Vec<Event>> {
        let url = format!("{}/teams/{team_id}/schedule", self.base_url);
        let raw: ScheduleResponse = self.get(&url)?;
        Ok(raw.events.unwrap_or_default().iter().map(map_event).collect())
    }

    fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        log::debug!("{url} -> {}", response.status());
        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_team(requested_id: &str, raw: TeamResponse) -> TeamProfile {
    let team = raw.team.unwrap_or_default();

    let records = team
        .record
        .and_then(|r| r.items)
        .unwrap_or_default()
        .into_iter()
        .map(|item| RecordSummary {
            kind: item.record_type,
            name: item.name,
            summary: item.summary,
            stats: item
                .stats
                .unwrap_or_default()
                .into_iter()
                .filter_map(|s| Some(RecordStat { name: s.name?, value: s.value.unwrap_or_default() }))
                .collect(),
        })
        .collect();

    TeamProfile {
        id: team.id.unwrap_or_else(|| requested_id.to_owned()),
        name: team.display_name.unwrap_or_else(|| "Unknown Team".into()),
        rank: team.rank.map(Rank::from_raw).unwrap_or_default(),
        records,
    }
}

fn map_event(event: &crate::espn::EspnEvent) -> Event {
    let start_time = event.date.as_deref().and_then(parse_timestamp);

    Event {
        id: event.id.clone().unwrap_or_default(),
        date_text: event.date.clone(),
        start_time,
        competition: event
            .competitions
            .as_deref()
            .and_then(|c| c.first())
            .map(map_competition),
    }
}

fn map_competition(c: &crate::espn::EspnCompetition) -> Competition {
    let status = c
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        .map(parse_status)
        .unwrap_or_default();

    let venue = c.venue.as_ref().map(|v| {
        let address = v.address.as_ref();
        Venue {
            name: v.full_name.clone(),
            city: address.and_then(|a| a.city.clone()),
            state: address.and_then(|a| a.state.clone()),
        }
    });

    let broadcasts = c
        .broadcasts
        .iter()
        .flatten()
        .flat_map(|b| b.names.iter().flatten().cloned())
        .collect();

    Competition {
        status,
        competitors: c.competitors.iter().flatten().map(map_competitor).collect(),
        venue,
        broadcasts,
    }
}

fn map_competitor(c: &crate::espn::EspnCompetitor) -> Competitor {
    let location = match c.home_away.as_deref() {
        Some("home") => Location::Home,
        _ => Location::Away,
    };

    Competitor {
        team_id: c.team.as_ref().and_then(|t| t.id.clone()),
        name: c
            .team
            .as_ref()
            .and_then(|t| t.display_name.clone())
            .unwrap_or_else(|| "Unknown".into()),
        rank: c
            .curated_rank
            .as_ref()
            .and_then(|r| r.current)
            .map(Rank::from_raw)
            .unwrap_or_default(),
        location,
        score: c.score.as_ref().map(|s| s.points()).unwrap_or_default(),
    }
}

fn parse_status(s: &str) -> GameStatus {
    match s {
        "STATUS_FINAL" | "STATUS_FINAL_OT" => GameStatus::Final,
        "STATUS_POSTPONED" | "STATUS_CANCELED" | "STATUS_CANCELLED" => GameStatus::Postponed,
        "STATUS_SCHEDULED" => GameStatus::Scheduled,
        _ => GameStatus::Other,
    }
}

/// ESPN timestamps are ISO 8601 with a `Z` suffix and usually no seconds
/// ("2025-09-06T16:00Z"), which RFC 3339 parsing alone rejects.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    let normalized = match s.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => s.to_owned(),
    };
    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").ok()
}
