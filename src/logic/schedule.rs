//! Schedule generation: round-robin fixtures via the circle method.

use crate::models::{GameMatch, Team, Tournament, TournamentError, TournamentStatus};

/// Generate the full round-robin schedule: every unordered pair of teams
/// meets exactly once, N(N-1)/2 matches in total.
///
/// Circle method: fix the first team and rotate the rest one slot per round,
/// which keeps any team from playing twice within a round. An odd team count
/// gets a phantom slot, leaving one team idle per round. Fixtures start
/// pending with a zeroed score and no timestamps.
pub fn generate_schedule(teams: &[Team], match_duration: u32) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let mut slots: Vec<Option<usize>> = (0..teams.len()).map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let rounds = slots.len() - 1;
    let half = slots.len() / 2;

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for _ in 0..rounds {
        for pair in 0..half {
            let home = slots[pair];
            let away = slots[slots.len() - 1 - pair];
            if let (Some(home), Some(away)) = (home, away) {
                matches.push(GameMatch::new(teams[home].id, teams[away].id, match_duration));
            }
        }
        slots[1..].rotate_right(1);
    }
    matches
}

/// Start the tournament: requires Setup with all teams formed. Populates the
/// schedule and moves the tournament to InProgress.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Setup {
        return Err(TournamentError::InvalidTransition);
    }
    if tournament.teams.len() != tournament.settings.number_of_teams as usize {
        return Err(TournamentError::InvalidTransition);
    }
    tournament.matches = generate_schedule(&tournament.teams, tournament.settings.match_duration);
    tournament.status = TournamentStatus::InProgress;
    log::info!(
        "tournament {} started: {} teams, {} matches",
        tournament.id,
        tournament.teams.len(),
        tournament.matches.len()
    );
    Ok(())
}
