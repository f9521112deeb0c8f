use crate::render;
use cfb_api::client::EspnApi;
use cfb_api::schedule::{extract_completed_games, find_next_game, upcoming_game};
use cfb_api::{Event, GameResult, TeamProfile, UpcomingGame, teams};
use chrono::TimeZone;
use log::{debug, warn};
use std::fmt::Display;
use std::io::Write;

/// Everything the report needs, after the schedule has been scanned.
/// `results` is `None` when the schedule couldn't be fetched at all.
#[derive(Debug, Default)]
pub struct Summary {
    pub profile: Option<TeamProfile>,
    pub results: Option<Vec<GameResult>>,
    pub next_game: Option<UpcomingGame>,
}

impl Summary {
    /// `team_id` is the id the schedule was requested with; the profile may
    /// be missing, so it can't be the source of our side of each game.
    pub fn build(team_id: &str, profile: Option<TeamProfile>, schedule: Option<&[Event]>) -> Self {
        let results = schedule.map(|events| extract_completed_games(events, team_id));
        let next_game = schedule
            .and_then(find_next_game)
            .map(|event| upcoming_game(event, team_id));

        Self { profile, results, next_game }
    }
}

pub struct App {
    api: EspnApi,
}

impl App {
    pub fn new(api: EspnApi) -> Self {
        Self { api }
    }

    /// Look up `team_name` and print its summary. Unknown names and API
    /// failures are reported on `out`; only write errors are returned.
    pub fn run<W, Tz>(&self, team_name: &str, out: &mut W, tz: &Tz) -> anyhow::Result<()>
    where
        W: Write,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let team_name = team_name.trim();
        if team_name.is_empty() {
            writeln!(out, "No team name provided. Exiting.")?;
            return Ok(());
        }

        writeln!(out, "\nSearching for '{team_name}'...")?;

        let Some(team_id) = teams::resolve(team_name) else {
            debug!("no team id for {team_name:?}");
            render::render_not_found(out, team_name)?;
            return Ok(());
        };

        writeln!(out, "✓ Found team (ID: {team_id})")?;
        writeln!(out, "Fetching team information...")?;

        let profile = match self.api.fetch_team(team_id) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("team profile unavailable: {e}");
                writeln!(out, "Error fetching team data: {e}")?;
                None
            }
        };

        let schedule = match self.api.fetch_schedule(team_id) {
            Ok(events) => {
                debug!("schedule has {} events", events.len());
                Some(events)
            }
            Err(e) => {
                warn!("schedule unavailable: {e}");
                writeln!(out, "Error fetching schedule: {e}")?;
                None
            }
        };

        let summary = Summary::build(team_id, profile, schedule.as_deref());
        render::render_summary(out, &summary, tz)?;
        out.flush()?;
        Ok(())
    }
}
