//! Statistics aggregation: average skill profile and position coverage of a roster.

use crate::models::{AverageStatistics, Player, Position, PositionCoverage, TournamentError};

/// Arithmetic mean of each rating (and age), rounded to one decimal.
/// An empty roster is an error; callers never aggregate an empty team.
pub fn average_statistics(players: &[Player]) -> Result<AverageStatistics, TournamentError> {
    if players.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    let n = players.len() as f64;
    let mut strength = 0.0;
    let mut speed = 0.0;
    let mut dribbling = 0.0;
    let mut age = 0.0;
    for p in players {
        strength += f64::from(p.statistics.strength);
        speed += f64::from(p.statistics.speed);
        dribbling += f64::from(p.statistics.dribbling);
        age += f64::from(p.statistics.age);
    }
    Ok(AverageStatistics {
        strength: round_one(strength / n),
        speed: round_one(speed / n),
        dribbling: round_one(dribbling / n),
        age: round_one(age / n),
    })
}

/// Count how many rostered players are eligible at each role. A player
/// covering several positions counts toward each, but only once per role.
pub fn position_coverage(players: &[Player]) -> PositionCoverage {
    let mut coverage = PositionCoverage::default();
    for p in players {
        if p.has_position(Position::Goalkeeper) {
            coverage.goalkeeper += 1;
        }
        if p.has_position(Position::Defender) {
            coverage.defender += 1;
        }
        if p.has_position(Position::Midfielder) {
            coverage.midfielder += 1;
        }
        if p.has_position(Position::Forward) {
            coverage.forward += 1;
        }
    }
    coverage
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
