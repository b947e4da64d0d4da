//! Team data: roster ids plus derived averages and position coverage.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Mean skill profile of a roster, one-decimal precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageStatistics {
    pub strength: f64,
    pub speed: f64,
    pub dribbling: f64,
    pub age: f64,
}

/// How many rostered players can cover each role. A player eligible at
/// several positions counts toward each of them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PositionCoverage {
    pub goalkeeper: u32,
    pub defender: u32,
    pub midfielder: u32,
    pub forward: u32,
}

/// A team formed from the player pool. Created once per tournament; the
/// roster only changes through pre-start reassignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<PlayerId>,
    pub average_statistics: AverageStatistics,
    pub position_coverage: PositionCoverage,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        players: Vec<PlayerId>,
        average_statistics: AverageStatistics,
        position_coverage: PositionCoverage,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players,
            average_statistics,
            position_coverage,
        }
    }

    /// Whether the given player is on this team's roster.
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }
}
