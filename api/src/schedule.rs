//! Scans a team schedule for completed results and the next game.

use crate::{Competitor, Event, GameResult, Location, Matchup, OpponentRef, Outcome, UpcomingGame};

/// First event, in schedule order, that is neither final nor postponed.
pub fn find_next_game(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .find(|e| e.competition.as_ref().is_some_and(|c| c.status.is_pending()))
}

/// Results of every final game, in schedule order, from `our_team_id`'s side.
///
/// Games where either our team or an opponent can't be identified are
/// skipped.
pub fn extract_completed_games(events: &[Event], our_team_id: &str) -> Vec<GameResult> {
    events
        .iter()
        .filter_map(|event| {
            let competition = event.competition.as_ref()?;
            if !competition.status.is_final() {
                return None;
            }

            let (ours, opponent) = split_sides(&competition.competitors, our_team_id);
            let (ours, opponent) = (ours?, opponent?);

            Some(GameResult {
                date: event.start_time.map(|dt| dt.date_naive()),
                outcome: Outcome::from_scores(ours.score, opponent.score),
                score: (ours.score, opponent.score),
                opponent: OpponentRef { name: opponent.name.clone(), rank: opponent.rank },
                location: ours.location,
            })
        })
        .collect()
}

/// Matchup and logistics for the game returned by [`find_next_game`].
pub fn upcoming_game(event: &Event, our_team_id: &str) -> UpcomingGame {
    let Some(competition) = &event.competition else {
        return UpcomingGame {
            start_time: event.start_time,
            date_text: event.date_text.clone(),
            ..Default::default()
        };
    };

    let side = |location: Location| {
        competition
            .competitors
            .iter()
            .rev()
            .find(|c| c.location == location)
    };

    let matchup = match (side(Location::Home), side(Location::Away)) {
        (Some(home), Some(away)) => {
            let we_are_home = home.team_id.as_deref() == Some(our_team_id);
            let (opponent, location) = if we_are_home {
                (away, Location::Home)
            } else {
                (home, Location::Away)
            };
            Some(Matchup {
                opponent: OpponentRef { name: opponent.name.clone(), rank: opponent.rank },
                location,
                home_team: home.name.clone(),
            })
        }
        _ => None,
    };

    UpcomingGame {
        matchup,
        start_time: event.start_time,
        date_text: event.date_text.clone(),
        venue: competition.venue.clone(),
        broadcasts: competition.broadcasts.clone(),
    }
}

/// Our competitor and the (last) competitor that isn't us.
fn split_sides<'a>(
    competitors: &'a [Competitor],
    our_team_id: &str,
) -> (Option<&'a Competitor>, Option<&'a Competitor>) {
    let mut ours = None;
    let mut opponent = None;
    for c in competitors {
        if c.team_id.as_deref() == Some(our_team_id) {
            ours = Some(c);
        } else {
            opponent = Some(c);
        }
    }
    (ours, opponent)
}
