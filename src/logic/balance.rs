//! Team balancing: greedy lowest-total assignment over a ranked player pool,
//! followed by a bounded local-improvement pass. Deterministic throughout so
//! the same pool always produces the same partition.

use crate::logic::stats;
use crate::models::{
    Player, PlayerId, PlayerStatistics, Position, Team, Tournament, TournamentError,
    TournamentStatus, TEAM_COUNT_RANGE, TEAM_SIZE_RANGE,
};
use serde::{Deserialize, Serialize};

/// Weights for the composite skill score used to rank players and compare
/// team totals. The defaults favor strength slightly over speed and dribbling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceWeights {
    pub strength: f64,
    pub speed: f64,
    pub dribbling: f64,
}

impl Default for BalanceWeights {
    fn default() -> Self {
        Self {
            strength: 0.4,
            speed: 0.3,
            dribbling: 0.3,
        }
    }
}

/// Composite skill score of a single player under the given weights.
pub fn composite_score(statistics: &PlayerStatistics, weights: &BalanceWeights) -> f64 {
    f64::from(statistics.strength) * weights.strength
        + f64::from(statistics.speed) * weights.speed
        + f64::from(statistics.dribbling) * weights.dribbling
}

/// Non-fatal issues detected while balancing, reported alongside the teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceWarning {
    /// Fewer goalkeeper-eligible players than teams; some teams play without one.
    GoalkeeperShortfall { eligible: usize, teams: usize },
}

impl std::fmt::Display for BalanceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceWarning::GoalkeeperShortfall { eligible, teams } => {
                write!(f, "Only {} goalkeeper(s) for {} teams", eligible, teams)
            }
        }
    }
}

/// Result of a balancing run: the formed teams plus any warnings.
#[derive(Clone, Debug)]
pub struct BalanceOutcome {
    pub teams: Vec<Team>,
    pub warnings: Vec<BalanceWarning>,
}

/// Two spreads within this distance count as equal; an accepted swap must
/// improve by more than this, so the improvement loop cannot cycle on noise.
const SPREAD_EPSILON: f64 = 1e-9;

/// Working state for one team while balancing: owned player copies, their
/// precomputed scores, and the running composite total.
#[derive(Clone, Debug, Default)]
struct Draft {
    players: Vec<Player>,
    scores: Vec<f64>,
    total: f64,
}

impl Draft {
    fn count_eligible(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.has_position(position)).count()
    }
}

/// Partition the active players into `number_of_teams` teams of `team_size`
/// using the default weights. See [`balance_with_weights`].
pub fn balance(
    players: &[Player],
    team_size: usize,
    number_of_teams: usize,
) -> Result<BalanceOutcome, TournamentError> {
    balance_with_weights(players, team_size, number_of_teams, &BalanceWeights::default())
}

/// Partition the active players into teams of even composite strength.
///
/// Inactive players are filtered out first; the remaining count must equal
/// `team_size * number_of_teams` exactly. Every team gets a goalkeeper when
/// the pool has enough keeper-eligible players; otherwise balancing proceeds
/// and the shortfall is reported as a warning.
pub fn balance_with_weights(
    players: &[Player],
    team_size: usize,
    number_of_teams: usize,
    weights: &BalanceWeights,
) -> Result<BalanceOutcome, TournamentError> {
    if number_of_teams == 0 {
        return Err(TournamentError::EmptyRoster);
    }
    if !TEAM_SIZE_RANGE.contains(&(team_size as u32)) {
        return Err(TournamentError::InvalidSettings {
            setting: "team_size",
        });
    }
    if !TEAM_COUNT_RANGE.contains(&(number_of_teams as u32)) {
        return Err(TournamentError::InvalidSettings {
            setting: "number_of_teams",
        });
    }

    let active: Vec<&Player> = players.iter().filter(|p| p.is_active).collect();
    if active.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    let expected = team_size * number_of_teams;
    if active.len() != expected {
        return Err(TournamentError::RosterSizeMismatch {
            expected,
            actual: active.len(),
        });
    }

    // Rank by composite score descending; ties resolved by player id so the
    // order is stable for identical inputs.
    let mut ranked: Vec<(f64, &Player)> = active
        .iter()
        .map(|p| (composite_score(&p.statistics, weights), *p))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));

    let keeper_pool = active
        .iter()
        .filter(|p| p.has_position(Position::Goalkeeper))
        .count();
    let mut warnings = Vec::new();
    if keeper_pool < number_of_teams {
        warnings.push(BalanceWarning::GoalkeeperShortfall {
            eligible: keeper_pool,
            teams: number_of_teams,
        });
    }

    let mut drafts: Vec<Draft> = (0..number_of_teams).map(|_| Draft::default()).collect();
    for &(score, player) in &ranked {
        let target = pick_team(&drafts, player, team_size);
        let draft = &mut drafts[target];
        draft.players.push(player.clone());
        draft.scores.push(score);
        draft.total += score;
    }

    spread_goalkeepers(&mut drafts, keeper_pool);
    improve_balance(&mut drafts, number_of_teams * team_size);

    log::debug!(
        "balanced {} players into {} teams, total spread {:.1}",
        expected,
        number_of_teams,
        total_spread(&drafts)
    );

    let mut teams = Vec::with_capacity(number_of_teams);
    for (index, draft) in drafts.into_iter().enumerate() {
        let average_statistics = stats::average_statistics(&draft.players)?;
        let position_coverage = stats::position_coverage(&draft.players);
        let roster: Vec<PlayerId> = draft.players.iter().map(|p| p.id).collect();
        teams.push(Team::new(
            format!("Team {}", index + 1),
            roster,
            average_statistics,
            position_coverage,
        ));
    }
    Ok(BalanceOutcome { teams, warnings })
}

/// Form the tournament's teams from the given roster. Only valid in Setup;
/// the teams land on the tournament and any warnings are returned.
pub fn assign_teams(
    tournament: &mut Tournament,
    players: &[Player],
) -> Result<Vec<BalanceWarning>, TournamentError> {
    if tournament.status != TournamentStatus::Setup {
        return Err(TournamentError::InvalidTransition);
    }
    let outcome = balance(
        players,
        tournament.settings.team_size as usize,
        tournament.settings.number_of_teams as usize,
    )?;
    tournament.teams = outcome.teams;
    Ok(outcome.warnings)
}

/// Swap two assigned players between their teams before the tournament
/// starts; both teams' derived statistics are recomputed from the roster
/// snapshot. Rosters are frozen once the tournament leaves Setup.
pub fn swap_assigned_players(
    tournament: &mut Tournament,
    roster: &[Player],
    first: PlayerId,
    second: PlayerId,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Setup {
        return Err(TournamentError::InvalidTransition);
    }
    let team_a = tournament
        .teams
        .iter()
        .position(|t| t.has_player(first))
        .ok_or(TournamentError::PlayerNotFound(first))?;
    let team_b = tournament
        .teams
        .iter()
        .position(|t| t.has_player(second))
        .ok_or(TournamentError::PlayerNotFound(second))?;
    if team_a == team_b {
        return Ok(());
    }

    let mut roster_a = tournament.teams[team_a].players.clone();
    let mut roster_b = tournament.teams[team_b].players.clone();
    replace_id(&mut roster_a, first, second);
    replace_id(&mut roster_b, second, first);

    // Resolve and aggregate both new rosters before touching the tournament,
    // so a missing player leaves everything unchanged.
    let members_a = resolve_members(&roster_a, roster)?;
    let members_b = resolve_members(&roster_b, roster)?;
    let averages_a = stats::average_statistics(&members_a)?;
    let averages_b = stats::average_statistics(&members_b)?;
    let coverage_a = stats::position_coverage(&members_a);
    let coverage_b = stats::position_coverage(&members_b);

    let a = &mut tournament.teams[team_a];
    a.players = roster_a;
    a.average_statistics = averages_a;
    a.position_coverage = coverage_a;
    let b = &mut tournament.teams[team_b];
    b.players = roster_b;
    b.average_statistics = averages_b;
    b.position_coverage = coverage_b;
    Ok(())
}

fn replace_id(roster: &mut [PlayerId], from: PlayerId, to: PlayerId) {
    for id in roster.iter_mut() {
        if *id == from {
            *id = to;
        }
    }
}

fn resolve_members(ids: &[PlayerId], roster: &[Player]) -> Result<Vec<Player>, TournamentError> {
    ids.iter()
        .map(|id| {
            roster
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .ok_or(TournamentError::PlayerNotFound(*id))
        })
        .collect()
}

/// Choose the open team with the lowest running total (first such team on
/// ties). A keeper-only specialist is steered to a team still lacking a
/// keeper while an open one exists, so specialists do not pile up.
fn pick_team(drafts: &[Draft], player: &Player, team_size: usize) -> usize {
    let keeper_specialist = player.only_plays(Position::Goalkeeper);
    let lacks_keeper =
        |d: &Draft| d.players.len() < team_size && d.count_eligible(Position::Goalkeeper) == 0;
    let restrict = keeper_specialist && drafts.iter().any(lacks_keeper);

    let mut best: Option<usize> = None;
    for (index, draft) in drafts.iter().enumerate() {
        if draft.players.len() >= team_size {
            continue;
        }
        if restrict && draft.count_eligible(Position::Goalkeeper) > 0 {
            continue;
        }
        match best {
            Some(current) if drafts[current].total <= draft.total => {}
            _ => best = Some(index),
        }
    }
    best.unwrap_or(0)
}

/// Move surplus keepers into keeper-less teams so every team has one when
/// the pool allows it. Each swap picks the score-closest pairing, keeping
/// totals as level as the greedy phase left them.
fn spread_goalkeepers(drafts: &mut [Draft], keeper_pool: usize) {
    if keeper_pool < drafts.len() {
        return;
    }
    while let Some(lacking) = drafts
        .iter()
        .position(|d| d.count_eligible(Position::Goalkeeper) == 0)
    {
        let mut best: Option<(f64, usize, usize, usize)> = None;
        for (donor, draft) in drafts.iter().enumerate() {
            if donor == lacking || draft.count_eligible(Position::Goalkeeper) < 2 {
                continue;
            }
            for (keeper, player) in draft.players.iter().enumerate() {
                if !player.has_position(Position::Goalkeeper) {
                    continue;
                }
                for out in 0..drafts[lacking].players.len() {
                    let delta = (draft.scores[keeper] - drafts[lacking].scores[out]).abs();
                    if best.map_or(true, |(closest, ..)| delta < closest) {
                        best = Some((delta, donor, keeper, out));
                    }
                }
            }
        }
        match best {
            Some((_, donor, keeper, out)) => swap_between(drafts, donor, keeper, lacking, out),
            None => break,
        }
    }
}

/// Positions every team must keep at least one player for. A floor is only
/// enforced when the pool has enough eligible players to cover every team.
struct CoverageFloor {
    goalkeeper: bool,
    defender: bool,
    midfielder: bool,
}

impl CoverageFloor {
    fn for_pool(drafts: &[Draft]) -> Self {
        let teams = drafts.len();
        let pool = |pos: Position| drafts.iter().map(|d| d.count_eligible(pos)).sum::<usize>();
        Self {
            goalkeeper: pool(Position::Goalkeeper) >= teams,
            defender: pool(Position::Defender) >= teams,
            midfielder: pool(Position::Midfielder) >= teams,
        }
    }

    /// Whether `team` still meets every enforced floor after swapping the
    /// player at `out` for `incoming`.
    fn holds_after(&self, team: &Draft, out: usize, incoming: &Player) -> bool {
        let check = |enforced: bool, pos: Position| {
            if !enforced {
                return true;
            }
            let mut count = team.count_eligible(pos);
            if incoming.has_position(pos) {
                count += 1;
            }
            if team.players[out].has_position(pos) {
                count -= 1;
            }
            count >= 1
        };
        check(self.goalkeeper, Position::Goalkeeper)
            && check(self.defender, Position::Defender)
            && check(self.midfielder, Position::Midfielder)
    }
}

/// Bounded local improvement: repeatedly apply the first cross-team swap
/// that strictly shrinks the spread between the strongest and weakest team
/// totals without breaking a position floor. The budget caps applied swaps,
/// so the pass always terminates quickly.
fn improve_balance(drafts: &mut [Draft], max_swaps: usize) {
    if drafts.len() < 2 {
        return;
    }
    let floor = CoverageFloor::for_pool(drafts);
    let mut applied = 0;
    while applied < max_swaps {
        match find_improving_swap(drafts, &floor) {
            Some((i, a, j, b)) => {
                swap_between(drafts, i, a, j, b);
                applied += 1;
            }
            None => break,
        }
    }
    log::debug!("improvement pass applied {} swap(s)", applied);
}

fn find_improving_swap(
    drafts: &[Draft],
    floor: &CoverageFloor,
) -> Option<(usize, usize, usize, usize)> {
    let spread = total_spread(drafts);
    for i in 0..drafts.len() {
        for j in (i + 1)..drafts.len() {
            for a in 0..drafts[i].players.len() {
                for b in 0..drafts[j].players.len() {
                    let delta = drafts[j].scores[b] - drafts[i].scores[a];
                    let after = spread_after(drafts, i, j, delta);
                    if after + SPREAD_EPSILON < spread
                        && floor.holds_after(&drafts[i], a, &drafts[j].players[b])
                        && floor.holds_after(&drafts[j], b, &drafts[i].players[a])
                    {
                        return Some((i, a, j, b));
                    }
                }
            }
        }
    }
    None
}

fn total_spread(drafts: &[Draft]) -> f64 {
    spread_after(drafts, 0, 0, 0.0)
}

/// Spread of team totals if `delta` moved from team `j` to team `i`.
fn spread_after(drafts: &[Draft], i: usize, j: usize, delta: f64) -> f64 {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for (k, draft) in drafts.iter().enumerate() {
        let total = if k == i {
            draft.total + delta
        } else if k == j {
            draft.total - delta
        } else {
            draft.total
        };
        max = max.max(total);
        min = min.min(total);
    }
    max - min
}

/// Exchange the players at `(i, a)` and `(j, b)`, keeping scores and totals
/// in sync.
fn swap_between(drafts: &mut [Draft], i: usize, a: usize, j: usize, b: usize) {
    let player_a = drafts[i].players[a].clone();
    let player_b = drafts[j].players[b].clone();
    let score_a = drafts[i].scores[a];
    let score_b = drafts[j].scores[b];

    drafts[i].players[a] = player_b;
    drafts[i].scores[a] = score_b;
    drafts[i].total += score_b - score_a;

    drafts[j].players[b] = player_a;
    drafts[j].scores[b] = score_a;
    drafts[j].total += score_a - score_b;
}
