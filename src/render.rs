use crate::app::Summary;
use cfb_api::{GameResult, Location, UpcomingGame, teams};
use chrono::TimeZone;
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 70;
const HELP_SAMPLE_SIZE: usize = 15;
const HELP_COLUMNS: usize = 3;
const KICKOFF_FORMAT: &str = "%A, %B %d, %Y at %I:%M %p %Z";

/// Print the full team summary. Kickoff times are shown in `tz`.
pub fn render_summary<W, Tz>(out: &mut W, summary: &Summary, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match &summary.profile {
        Some(profile) => {
            writeln!(out)?;
            writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
            writeln!(out, "  {}", profile.rank.label(&profile.name))?;
            writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

            let record = profile.overall_record().unwrap_or_else(|| "N/A".into());
            writeln!(out, "\n📊 Current Record: {record}")?;
        }
        None => writeln!(out, "❌ Could not retrieve team information")?,
    }

    if let Some(results) = &summary.results {
        render_results(out, results)?;
    }

    match &summary.next_game {
        Some(game) => render_next_game(out, game, tz)?,
        None => {
            writeln!(out, "\n🏈 No upcoming games scheduled")?;
            writeln!(out, "   The season may have ended or the schedule is not yet available.")?;
        }
    }

    writeln!(out, "\n{}\n", "=".repeat(RULE_WIDTH))
}

fn render_results<W: Write>(out: &mut W, results: &[GameResult]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "\n📅 No games completed yet this season");
    }

    writeln!(out, "\n📅 SEASON RESULTS")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for game in results {
        writeln!(out, "   {}", result_line(game))?;
    }
    Ok(())
}

/// `09/13/25  W    28-24  vs (UR) Memphis Tigers`
pub fn result_line(game: &GameResult) -> String {
    let date = game
        .date
        .map(|d| d.format("%m/%d/%y").to_string())
        .unwrap_or_else(|| "Unknown".into());
    let score = format!("{}-{}", game.score.0, game.score.1);
    format!(
        "{date}  {}  {score:>7}  {} {}",
        game.outcome.letter(),
        game.location.token(),
        game.opponent.rank.label(&game.opponent.name),
    )
}

fn render_next_game<W, Tz>(out: &mut W, game: &UpcomingGame, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out, "\n🏈 NEXT GAME")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if let Some(matchup) = &game.matchup {
        writeln!(out, "   Opponent: {}", matchup.opponent_label())?;
        match matchup.location {
            Location::Home => writeln!(out, "   Location: Home")?,
            Location::Away => writeln!(out, "   Location: Away @ {}", matchup.home_team)?,
        }
    }

    let kickoff = match (&game.start_time, game.date_text.as_deref()) {
        (Some(start), _) => Some(start.with_timezone(tz).format(KICKOFF_FORMAT).to_string()),
        (None, Some(raw)) if !raw.is_empty() => Some(raw.to_owned()),
        _ => None,
    };
    if let Some(kickoff) = kickoff {
        writeln!(out, "   Date/Time: {kickoff}")?;
    }

    if let Some(venue) = &game.venue
        && let Some(name) = venue.name.as_deref().filter(|n| !n.is_empty())
    {
        writeln!(out, "   Venue: {name}")?;
        if let (Some(city), Some(state)) = (&venue.city, &venue.state)
            && !city.is_empty()
            && !state.is_empty()
        {
            writeln!(out, "          {city}, {state}")?;
        }
    }

    if !game.broadcasts.is_empty() {
        writeln!(out, "\n📺 TV: {}", game.broadcasts.join(", "))?;
    }
    Ok(())
}

/// Help shown when the name isn't in the team table.
pub fn render_not_found<W: Write>(out: &mut W, team_name: &str) -> io::Result<()> {
    writeln!(out, "\n❌ Team '{team_name}' not found in database.")?;
    writeln!(out, "\nSupported teams include:")?;

    let sample: Vec<String> = teams::sample(HELP_SAMPLE_SIZE)
        .into_iter()
        .map(teams::title_case)
        .collect();
    for row in sample.chunks(HELP_COLUMNS) {
        writeln!(out, "   {}", row.join(", "))?;
    }
    if let Some(more) = teams::len().checked_sub(HELP_SAMPLE_SIZE).filter(|n| *n > 0) {
        writeln!(out, "   ... and {more} more")?;
    }

    writeln!(out, "\nTry one of these team names.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfb_api::{Matchup, OpponentRef, Outcome, Rank, RecordSummary, TeamProfile, Venue};
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn render(summary: &Summary) -> String {
        let mut buf = Vec::new();
        render_summary(&mut buf, summary, &Utc).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn navy_profile() -> TeamProfile {
        TeamProfile {
            id: "2426".into(),
            name: "Navy Midshipmen".into(),
            rank: Rank::from_raw(0),
            records: vec![RecordSummary {
                kind: Some("total".into()),
                name: Some("overall".into()),
                summary: Some("1-0".into()),
                stats: vec![],
            }],
        }
    }

    fn win_over_memphis() -> GameResult {
        GameResult {
            date: NaiveDate::from_ymd_opt(2025, 9, 13),
            outcome: Outcome::Win,
            score: (28, 24),
            opponent: OpponentRef { name: "Memphis Tigers".into(), rank: Rank::UNRANKED },
            location: Location::Home,
        }
    }

    fn army_game() -> UpcomingGame {
        UpcomingGame {
            matchup: Some(Matchup {
                opponent: OpponentRef { name: "Army Black Knights".into(), rank: Rank::UNRANKED },
                location: Location::Home,
                home_team: "Navy Midshipmen".into(),
            }),
            start_time: cfb_api::client::parse_timestamp("2025-12-13T20:00Z"),
            date_text: Some("2025-12-13T20:00Z".into()),
            venue: Some(Venue {
                name: Some("M&T Bank Stadium".into()),
                city: Some("Baltimore".into()),
                state: Some("MD".into()),
            }),
            broadcasts: vec!["CBS".into(), "Paramount+".into()],
        }
    }

    #[test]
    fn renders_full_summary() {
        let summary = Summary {
            profile: Some(navy_profile()),
            results: Some(vec![win_over_memphis()]),
            next_game: Some(army_game()),
        };

        let rule = "=".repeat(70);
        let dash = "-".repeat(70);
        let expected = format!(
            "\n{rule}\n  (UR) Navy Midshipmen\n{rule}\n\
             \n📊 Current Record: 1-0\n\
             \n📅 SEASON RESULTS\n{dash}\n\
             \x20  09/13/25  W    28-24  vs (UR) Memphis Tigers\n\
             \n🏈 NEXT GAME\n{dash}\n\
             \x20  Opponent: UR Army Black Knights\n\
             \x20  Location: Home\n\
             \x20  Date/Time: Saturday, December 13, 2025 at 08:00 PM UTC\n\
             \x20  Venue: M&T Bank Stadium\n\
             \x20         Baltimore, MD\n\
             \n📺 TV: CBS, Paramount+\n\
             \n{rule}\n\n"
        );
        assert_eq!(render(&summary), expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let summary = Summary {
            profile: Some(navy_profile()),
            results: Some(vec![win_over_memphis()]),
            next_game: Some(army_game()),
        };
        assert_eq!(render(&summary), render(&summary));
    }

    #[test]
    fn kickoff_uses_given_time_zone() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let summary = Summary { next_game: Some(army_game()), ..Default::default() };
        let mut buf = Vec::new();
        render_summary(&mut buf, &summary, &eastern).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Date/Time: Saturday, December 13, 2025 at 03:00 PM -05:00"));
    }

    #[test]
    fn unparseable_kickoff_falls_back_to_raw_text() {
        let game = UpcomingGame {
            start_time: None,
            date_text: Some("TBD".into()),
            ..Default::default()
        };
        let summary = Summary { next_game: Some(game), ..Default::default() };
        assert!(render(&summary).contains("   Date/Time: TBD\n"));
    }

    #[test]
    fn away_game_names_host_and_ranked_opponent() {
        let game = UpcomingGame {
            matchup: Some(Matchup {
                opponent: OpponentRef { name: "Notre Dame Fighting Irish".into(), rank: Rank::from_raw(8) },
                location: Location::Away,
                home_team: "Notre Dame Fighting Irish".into(),
            }),
            venue: Some(Venue { name: Some("Notre Dame Stadium".into()), city: None, state: Some("IN".into()) }),
            ..Default::default()
        };
        let text = render(&Summary { next_game: Some(game), ..Default::default() });
        assert!(text.contains("   Opponent: #8 Notre Dame Fighting Irish\n"));
        assert!(text.contains("   Location: Away @ Notre Dame Fighting Irish\n"));
        assert!(text.contains("   Venue: Notre Dame Stadium\n"));
        assert!(!text.contains(", IN"), "city/state line needs both parts");
        assert!(!text.contains("TV:"));
        assert!(!text.contains("Date/Time"));
    }

    #[test]
    fn missing_profile_still_renders_schedule() {
        let summary = Summary {
            profile: None,
            results: Some(vec![win_over_memphis()]),
            next_game: Some(army_game()),
        };
        let text = render(&summary);
        assert!(text.starts_with("❌ Could not retrieve team information\n"));
        assert!(text.contains("📅 SEASON RESULTS"));
        assert!(text.contains("🏈 NEXT GAME"));
        assert!(!text.contains("Current Record"));
    }

    #[test]
    fn record_defaults_to_na() {
        let profile = TeamProfile { records: vec![], ..navy_profile() };
        let text = render(&Summary { profile: Some(profile), ..Default::default() });
        assert!(text.contains("📊 Current Record: N/A\n"));
    }

    #[test]
    fn empty_and_missing_schedules() {
        let empty = render(&Summary { results: Some(vec![]), ..Default::default() });
        assert!(empty.contains("📅 No games completed yet this season"));
        assert!(empty.contains("🏈 No upcoming games scheduled"));
        assert!(empty.contains("The season may have ended or the schedule is not yet available."));

        let missing = render(&Summary::default());
        assert!(!missing.contains("📅"));
        assert!(missing.contains("🏈 No upcoming games scheduled"));
    }

    #[test]
    fn result_line_pads_score_and_marks_road_games() {
        let game = GameResult {
            date: None,
            outcome: Outcome::Loss,
            score: (7, 0),
            opponent: OpponentRef { name: "Army Black Knights".into(), rank: Rank::from_raw(12) },
            location: Location::Away,
        };
        assert_eq!(result_line(&game), "Unknown  L      7-0  @ #12 Army Black Knights");

        let blowout = GameResult { score: (100, 0), outcome: Outcome::Win, ..game };
        assert_eq!(result_line(&blowout), "Unknown  W    100-0  @ #12 Army Black Knights");
    }

    #[test]
    fn not_found_lists_sample_and_remaining_count() {
        let mut buf = Vec::new();
        render_not_found(&mut buf, "Hogwarts").unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("❌ Team 'Hogwarts' not found in database."));
        let rows = concat!(
            "   Navy, Air Force, Army\n",
            "   Michigan, Ohio State, Alabama\n",
            "   Georgia, Clemson, Notre Dame\n",
            "   Usc, Texas, Oklahoma\n",
            "   Penn State, Florida, Lsu\n",
        );
        assert!(text.contains(rows), "help rows out of order:\n{text}");
        assert!(text.contains(&format!("   ... and {} more\n", teams::len() - 15)));
        assert!(text.ends_with("\nTry one of these team names.\n"));
    }
}
