//! Match lifecycle: pending -> in_progress -> completed, driven through the
//! owning tournament so the single-active-match invariant can be enforced.

use crate::models::{
    MatchId, MatchSide, MatchStatus, Tournament, TournamentError, TournamentStatus,
};
use chrono::Utc;

/// Start a pending match. Only one match may run at a time, so this fails
/// while another match is in progress. Sets the start time and the
/// tournament's `current_match` pointer.
pub fn start_match(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidTransition);
    }
    if tournament.current_match.is_some() {
        return Err(TournamentError::InvalidTransition);
    }
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if game.status != MatchStatus::Pending {
        return Err(TournamentError::InvalidTransition);
    }
    game.status = MatchStatus::InProgress;
    game.start_time = Some(Utc::now());
    tournament.current_match = Some(match_id);
    log::info!("match {} started", match_id);
    Ok(())
}

/// Record one goal for the given side. Only valid while the match is in
/// progress.
pub fn record_goal(
    tournament: &mut Tournament,
    match_id: MatchId,
    side: MatchSide,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidTransition);
    }
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if game.status != MatchStatus::InProgress {
        return Err(TournamentError::InvalidTransition);
    }
    match side {
        MatchSide::Team1 => game.score.team1_goals += 1,
        MatchSide::Team2 => game.score.team2_goals += 1,
    }
    Ok(())
}

/// Complete a running match: sets the end time (never earlier than the start
/// time), clears `current_match`, and completes the tournament once the
/// schedule is exhausted.
pub fn complete_match(
    tournament: &mut Tournament,
    match_id: MatchId,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidTransition);
    }
    let game = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if game.status != MatchStatus::InProgress {
        return Err(TournamentError::InvalidTransition);
    }
    let started = game.start_time.ok_or(TournamentError::InvalidTransition)?;
    let now = Utc::now();
    game.end_time = Some(if now > started { now } else { started });
    game.status = MatchStatus::Completed;
    let score = game.score;
    tournament.current_match = None;
    log::info!(
        "match {} completed {}-{}",
        match_id,
        score.team1_goals,
        score.team2_goals
    );

    if tournament
        .matches
        .iter()
        .all(|m| m.status == MatchStatus::Completed)
    {
        tournament.status = TournamentStatus::Completed;
        log::info!("tournament {} completed", tournament.id);
    }
    Ok(())
}
