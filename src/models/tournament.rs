//! Tournament root: teams, schedule, settings, and status.

use crate::models::game::{GameMatch, MatchId};
use crate::models::player::PlayerId;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Allowed players per team.
pub const TEAM_SIZE_RANGE: RangeInclusive<u32> = 4..=8;
/// Allowed number of teams.
pub const TEAM_COUNT_RANGE: RangeInclusive<u32> = 2..=8;

/// Errors that can occur during balancing, scheduling, or lifecycle operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// No eligible players (or zero teams) where at least one is required.
    EmptyRoster,
    /// Active player count does not match team_size * number_of_teams.
    RosterSizeMismatch { expected: usize, actual: usize },
    /// Operation attempted from a state that forbids it (including starting
    /// a second match while one is already in progress).
    InvalidTransition,
    /// A settings value is outside its allowed range.
    InvalidSettings { setting: &'static str },
    /// Match not found in the tournament's schedule.
    MatchNotFound(MatchId),
    /// Player not found in the roster or on any team.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyRoster => write!(f, "No eligible players available"),
            TournamentError::RosterSizeMismatch { expected, actual } => {
                write!(f, "Need exactly {} players, got {}", expected, actual)
            }
            TournamentError::InvalidTransition => {
                write!(f, "Operation not allowed in the current state")
            }
            TournamentError::InvalidSettings { setting } => {
                write!(f, "Setting '{}' is out of range", setting)
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Tournament configuration provided by the host application.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// Match length in minutes.
    pub match_duration: u32,
    /// Players per team (4-8).
    pub team_size: u32,
    /// Teams in the tournament (2-8).
    pub number_of_teams: u32,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            match_duration: 20,
            team_size: 5,
            number_of_teams: 4,
        }
    }
}

impl TournamentSettings {
    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.match_duration == 0 {
            return Err(TournamentError::InvalidSettings {
                setting: "match_duration",
            });
        }
        if !TEAM_SIZE_RANGE.contains(&self.team_size) {
            return Err(TournamentError::InvalidSettings {
                setting: "team_size",
            });
        }
        if !TEAM_COUNT_RANGE.contains(&self.number_of_teams) {
            return Err(TournamentError::InvalidSettings {
                setting: "number_of_teams",
            });
        }
        Ok(())
    }

    /// Total players needed to fill every team.
    pub fn required_players(&self) -> usize {
        (self.team_size * self.number_of_teams) as usize
    }
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Teams being formed; no schedule yet.
    #[default]
    Setup,
    /// Schedule generated; matches being played.
    InProgress,
    /// Every match completed.
    Completed,
}

/// Full tournament state: teams, schedule, and phase. The single root owning
/// its teams and matches for the duration of a run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub teams: Vec<Team>,
    /// Full ordered schedule (populated when the tournament starts).
    pub matches: Vec<GameMatch>,
    /// The match currently in progress, if any. At most one at a time.
    pub current_match: Option<MatchId>,
    pub settings: TournamentSettings,
    pub status: TournamentStatus,
}

impl Tournament {
    /// Create a tournament in Setup with validated settings and no teams yet.
    pub fn new(settings: TournamentSettings) -> Result<Self, TournamentError> {
        settings.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            matches: Vec::new(),
            current_match: None,
            settings,
            status: TournamentStatus::Setup,
        })
    }

    /// Look up a team by id.
    pub fn get_team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Look up a match by id.
    pub fn get_match(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Mutable reference to a match by id.
    pub fn get_match_mut(&mut self, match_id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }
}
