//! Player and PlayerStatistics data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in team rosters and lookups).
pub type PlayerId = Uuid;

/// On-field role a player can cover.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Skill ratings on a 1-10 scale, plus age in years.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub strength: u8,
    pub speed: u8,
    pub dribbling: u8,
    pub age: u32,
}

/// A player in the pool. The engine works on a read-only roster snapshot;
/// player records are never mutated once assigned to a tournament run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub statistics: PlayerStatistics,
    /// Eligible positions; never empty.
    pub positions: Vec<Position>,
    /// Inactive players are skipped during team assignment.
    pub is_active: bool,
}

impl Player {
    /// Create an active player with the given name, ratings, and positions.
    pub fn new(
        name: impl Into<String>,
        statistics: PlayerStatistics,
        positions: Vec<Position>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            statistics,
            positions,
            is_active: true,
        }
    }

    /// Whether the player can cover the given position.
    pub fn has_position(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Whether the given position is the only one the player covers.
    pub fn only_plays(&self, position: Position) -> bool {
        !self.positions.is_empty() && self.positions.iter().all(|&p| p == position)
    }
}
