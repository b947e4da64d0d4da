//! Soccer tournament engine: balanced team formation, round-robin
//! scheduling, match lifecycle, and standings.

pub mod logic;
pub mod models;

pub use logic::{
    assign_teams, average_statistics, balance, balance_with_weights, complete_match,
    composite_score, compute_standings, generate_schedule, position_coverage, record_goal,
    start_match, start_tournament, swap_assigned_players, tournament_standings, BalanceOutcome,
    BalanceWarning, BalanceWeights, TeamStanding, DRAW_POINTS, WIN_POINTS,
};
pub use models::{
    AverageStatistics, GameMatch, MatchId, MatchScore, MatchSide, MatchStatus, Player, PlayerId,
    PlayerStatistics, Position, PositionCoverage, Team, TeamId, Tournament, TournamentError,
    TournamentId, TournamentSettings, TournamentStatus, TEAM_COUNT_RANGE, TEAM_SIZE_RANGE,
};
