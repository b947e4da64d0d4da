//! Match data: the two competing teams, score, status, and timestamps.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which of the two teams in a match (for goal attribution).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSide {
    Team1,
    Team2,
}

/// Lifecycle state of a match. Transitions only move forward:
/// pending -> in_progress -> completed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Goals scored by each side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1_goals: u32,
    pub team2_goals: u32,
}

/// A single fixture between two distinct teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team1: TeamId,
    pub team2: TeamId,
    pub score: MatchScore,
    /// Scheduled length in minutes.
    pub duration: u32,
    pub status: MatchStatus,
    /// Set when the match is started.
    pub start_time: Option<DateTime<Utc>>,
    /// Set when the match is completed; never earlier than `start_time`.
    pub end_time: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// Create a pending fixture with a zeroed score and no timestamps.
    pub fn new(team1: TeamId, team2: TeamId, duration: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1,
            team2,
            score: MatchScore::default(),
            duration,
            status: MatchStatus::Pending,
            start_time: None,
            end_time: None,
        }
    }
}
