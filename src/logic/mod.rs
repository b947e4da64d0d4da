//! Tournament engine logic: team balancing, scheduling, match lifecycle, standings.

mod balance;
mod lifecycle;
mod schedule;
mod standings;
mod stats;

pub use balance::{
    assign_teams, balance, balance_with_weights, composite_score, swap_assigned_players,
    BalanceOutcome, BalanceWarning, BalanceWeights,
};
pub use lifecycle::{complete_match, record_goal, start_match};
pub use schedule::{generate_schedule, start_tournament};
pub use standings::{
    compute_standings, tournament_standings, TeamStanding, DRAW_POINTS, WIN_POINTS,
};
pub use stats::{average_statistics, position_coverage};
