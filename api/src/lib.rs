pub mod client;
pub mod espn;
pub mod schedule;
pub mod teams;

use chrono::{DateTime, FixedOffset, NaiveDate};

// ---------------------------------------------------------------------------
// Domain types: clean model independent of ESPN wire format
// ---------------------------------------------------------------------------

/// AP/CFP poll position. Only 1–25 is meaningful; ESPN reports 0 or 99 for
/// unranked teams and anything outside the top 25 is treated the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rank(Option<u8>);

impl Rank {
    pub const UNRANKED: Rank = Rank(None);

    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1..=25 => Rank(Some(raw as u8)),
            _ => Rank::UNRANKED,
        }
    }

    pub fn current(&self) -> Option<u8> {
        self.0
    }

    /// `#12 Navy` or `(UR) Navy`.
    pub fn label(&self, name: &str) -> String {
        match self.0 {
            Some(rank) => format!("#{rank} {name}"),
            None => format!("(UR) {name}"),
        }
    }

    /// Same as [`Rank::label`] but unranked teams get a bare `UR` prefix.
    /// Only the away side of the next-game matchup is printed this way.
    pub fn label_bare(&self, name: &str) -> String {
        match self.0 {
            Some(rank) => format!("#{rank} {name}"),
            None => format!("UR {name}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamProfile {
    pub id: String,
    pub name: String, // "Navy Midshipmen"
    pub rank: Rank,
    pub records: Vec<RecordSummary>,
}

impl TeamProfile {
    /// Summary of the overall record ("6-2"), preferring the item typed
    /// `total` or named `overall` and falling back to the first item.
    pub fn overall_record(&self) -> Option<String> {
        let item = self
            .records
            .iter()
            .find(|r| r.kind.as_deref() == Some("total") || r.name.as_deref() == Some("overall"))
            .or_else(|| self.records.first())?;
        Some(item.display_summary())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordSummary {
    pub kind: Option<String>, // "total", "home", "road", "vsconf"
    pub name: Option<String>, // "overall", "Home", ...
    pub summary: Option<String>,
    pub stats: Vec<RecordStat>,
}

impl RecordSummary {
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }

    fn display_summary(&self) -> String {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        match (self.stat("wins"), self.stat("losses")) {
            (Some(wins), Some(losses)) => format!("{}-{}", wins as u32, losses as u32),
            _ => "N/A".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStat {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    Final,
    Postponed,
    #[default]
    Other,
}

impl GameStatus {
    pub fn is_final(&self) -> bool {
        *self == GameStatus::Final
    }

    /// Scheduled, in progress or anything unrecognised can still be "next".
    pub fn is_pending(&self) -> bool {
        !matches!(self, GameStatus::Final | GameStatus::Postponed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Location {
    Home,
    #[default]
    Away,
}

impl Location {
    /// Token printed before the opponent in the results table.
    pub fn token(&self) -> &'static str {
        match self {
            Location::Home => "vs",
            Location::Away => "@",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Strictly greater wins; a tie counts as a loss.
    pub fn from_scores(own: u16, opponent: u16) -> Self {
        if own > opponent { Outcome::Win } else { Outcome::Loss }
    }

    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
        }
    }
}

/// One entry of the team schedule, already normalised at ingestion.
#[derive(Debug, Clone, Default)]
pub struct Event {
    pub id: String,
    pub date_text: Option<String>, // raw ISO 8601 from ESPN
    pub start_time: Option<DateTime<FixedOffset>>,
    /// First competition only; ESPN never sends more for college football.
    pub competition: Option<Competition>,
}

#[derive(Debug, Clone, Default)]
pub struct Competition {
    pub status: GameStatus,
    pub competitors: Vec<Competitor>,
    pub venue: Option<Venue>,
    pub broadcasts: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Competitor {
    pub team_id: Option<String>,
    pub name: String,
    pub rank: Rank,
    pub location: Location,
    pub score: u16,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Venue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpponentRef {
    pub name: String,
    pub rank: Rank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub date: Option<NaiveDate>,
    pub outcome: Outcome,
    pub score: (u16, u16), // (own, opponent)
    pub opponent: OpponentRef,
    pub location: Location,
}

#[derive(Debug, Clone, Default)]
pub struct UpcomingGame {
    pub matchup: Option<Matchup>, // None when ESPN hasn't listed both sides
    pub start_time: Option<DateTime<FixedOffset>>,
    pub date_text: Option<String>,
    pub venue: Option<Venue>,
    pub broadcasts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub opponent: OpponentRef,
    pub location: Location,
    pub home_team: String,
}

impl Matchup {
    /// Opponent with rank prefix. An unranked away opponent keeps the bare
    /// `UR` prefix the checker has always printed.
    pub fn opponent_label(&self) -> String {
        match self.location {
            Location::Home => self.opponent.rank.label_bare(&self.opponent.name),
            Location::Away => self.opponent.rank.label(&self.opponent.name),
        }
    }
}
