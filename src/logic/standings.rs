//! Standings: ranked points table derived from completed matches.

use crate::models::{GameMatch, MatchStatus, TeamId, Tournament};
use serde::{Deserialize, Serialize};

/// Points for a win.
pub const WIN_POINTS: u32 = 3;
/// Points for a draw (each side).
pub const DRAW_POINTS: u32 = 1;

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl TeamStanding {
    fn new(team: TeamId) -> Self {
        Self {
            team,
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }
}

/// Rank the teams appearing in `matches` by points, then goal difference,
/// then goals for, then team id. Only completed matches contribute; pending
/// and running fixtures leave their teams at zero.
pub fn compute_standings(matches: &[GameMatch]) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = Vec::new();
    tally_matches(&mut rows, matches);
    sort_rows(&mut rows);
    rows
}

/// Standings for a whole tournament: every team gets a row even before any
/// fixture exists or completes.
pub fn tournament_standings(tournament: &Tournament) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = tournament
        .teams
        .iter()
        .map(|team| TeamStanding::new(team.id))
        .collect();
    tally_matches(&mut rows, &tournament.matches);
    sort_rows(&mut rows);
    rows
}

fn tally_matches(rows: &mut Vec<TeamStanding>, matches: &[GameMatch]) {
    for game in matches {
        let first = row_index(rows, game.team1);
        let second = row_index(rows, game.team2);
        if game.status != MatchStatus::Completed {
            continue;
        }
        let goals1 = game.score.team1_goals;
        let goals2 = game.score.team2_goals;
        rows[first].goals_for += goals1;
        rows[first].goals_against += goals2;
        rows[second].goals_for += goals2;
        rows[second].goals_against += goals1;
        if goals1 > goals2 {
            rows[first].wins += 1;
            rows[first].points += WIN_POINTS;
            rows[second].losses += 1;
        } else if goals2 > goals1 {
            rows[second].wins += 1;
            rows[second].points += WIN_POINTS;
            rows[first].losses += 1;
        } else {
            rows[first].draws += 1;
            rows[first].points += DRAW_POINTS;
            rows[second].draws += 1;
            rows[second].points += DRAW_POINTS;
        }
    }
    for row in rows.iter_mut() {
        row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
    }
}

fn row_index(rows: &mut Vec<TeamStanding>, team: TeamId) -> usize {
    match rows.iter().position(|r| r.team == team) {
        Some(index) => index,
        None => {
            rows.push(TeamStanding::new(team));
            rows.len() - 1
        }
    }
}

fn sort_rows(rows: &mut [TeamStanding]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team.cmp(&b.team))
    });
}
