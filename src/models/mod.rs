//! Data structures for the tournament engine: players, teams, matches, tournament state.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, MatchScore, MatchSide, MatchStatus};
pub use player::{Player, PlayerId, PlayerStatistics, Position};
pub use team::{AverageStatistics, PositionCoverage, Team, TeamId};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentSettings, TournamentStatus,
    TEAM_COUNT_RANGE, TEAM_SIZE_RANGE,
};
