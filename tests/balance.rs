//! Integration tests for team balancing: partition properties, determinism,
//! effectiveness, and the statistics aggregation feeding it.

use soccer_tournament::{
    average_statistics, balance, composite_score, position_coverage, BalanceOutcome,
    BalanceWarning, BalanceWeights, Player, PlayerStatistics, Position, TournamentError,
};
use std::collections::HashSet;

fn player(name: &str, strength: u8, speed: u8, dribbling: u8, positions: &[Position]) -> Player {
    Player::new(
        name,
        PlayerStatistics {
            strength,
            speed,
            dribbling,
            age: 25,
        },
        positions.to_vec(),
    )
}

/// Deterministic pool with varied ratings and a position cycle that keeps
/// one goalkeeper-eligible player per four.
fn mixed_pool(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            let positions = match i % 4 {
                0 => vec![Position::Goalkeeper, Position::Defender],
                1 => vec![Position::Defender],
                2 => vec![Position::Midfielder, Position::Forward],
                _ => vec![Position::Forward, Position::Midfielder],
            };
            let rating = |k: usize| (1 + (i * k + 3) % 10) as u8;
            Player::new(
                format!("P{i}"),
                PlayerStatistics {
                    strength: rating(3),
                    speed: rating(5),
                    dribbling: rating(7),
                    age: 20 + (i % 15) as u32,
                },
                positions,
            )
        })
        .collect()
}

fn rosters(outcome: &BalanceOutcome) -> Vec<Vec<soccer_tournament::PlayerId>> {
    outcome.teams.iter().map(|t| t.players.clone()).collect()
}

fn spread(totals: &[f64]) -> f64 {
    let max = totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = totals.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

#[test]
fn partitions_into_disjoint_full_teams() {
    let pool = mixed_pool(16);
    let outcome = balance(&pool, 4, 4).unwrap();

    assert_eq!(outcome.teams.len(), 4);
    let mut seen = HashSet::new();
    for team in &outcome.teams {
        assert_eq!(team.players.len(), 4);
        for id in &team.players {
            assert!(seen.insert(*id), "player assigned to two teams");
        }
    }
    let pool_ids: HashSet<_> = pool.iter().map(|p| p.id).collect();
    assert_eq!(seen, pool_ids);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn identical_input_gives_identical_partition() {
    let pool = mixed_pool(16);
    let first = balance(&pool, 4, 4).unwrap();
    let second = balance(&pool, 4, 4).unwrap();
    assert_eq!(rosters(&first), rosters(&second));
}

#[test]
fn skewed_pool_beats_naive_chunking() {
    // Four aces and twelve weak players: naive chunking stacks the aces in
    // one team, balancing must spread them out.
    let mut pool = Vec::new();
    for i in 0..4 {
        pool.push(player(
            &format!("Ace {i}"),
            10,
            10,
            10,
            &[Position::Defender, Position::Midfielder],
        ));
    }
    for i in 0..12 {
        pool.push(player(
            &format!("Sub {i}"),
            3,
            3,
            3,
            &[Position::Defender, Position::Midfielder],
        ));
    }
    let weights = BalanceWeights::default();
    let score = |p: &Player| composite_score(&p.statistics, &weights);

    let outcome = balance(&pool, 4, 4).unwrap();
    let balanced: Vec<f64> = outcome
        .teams
        .iter()
        .map(|team| {
            team.players
                .iter()
                .map(|id| score(pool.iter().find(|p| p.id == *id).unwrap()))
                .sum()
        })
        .collect();
    let naive: Vec<f64> = pool
        .chunks(4)
        .map(|chunk| chunk.iter().map(score).sum())
        .collect();

    assert!(spread(&balanced) < spread(&naive));
    // Nobody plays goalkeeper here, so the shortfall is reported but non-fatal.
    assert_eq!(
        outcome.warnings,
        vec![BalanceWarning::GoalkeeperShortfall {
            eligible: 0,
            teams: 4
        }]
    );
}

#[test]
fn keeper_specialists_end_up_one_per_team() {
    let mut pool = Vec::new();
    for i in 0..4 {
        pool.push(player(
            &format!("GK {i}"),
            (4 + i) as u8,
            5,
            5,
            &[Position::Goalkeeper],
        ));
    }
    for i in 0..12 {
        let positions = match i % 3 {
            0 => vec![Position::Defender],
            1 => vec![Position::Midfielder],
            _ => vec![Position::Forward],
        };
        pool.push(Player::new(
            format!("Out {i}"),
            PlayerStatistics {
                strength: (3 + i % 7) as u8,
                speed: (2 + i % 8) as u8,
                dribbling: (4 + i % 6) as u8,
                age: 22 + i as u32,
            },
            positions,
        ));
    }

    let outcome = balance(&pool, 4, 4).unwrap();
    assert!(outcome.warnings.is_empty());
    for team in &outcome.teams {
        assert_eq!(team.position_coverage.goalkeeper, 1);
    }
}

#[test]
fn goalkeeper_shortfall_is_a_warning_not_an_error() {
    let mut pool = mixed_pool(16);
    // Strip goalkeeper eligibility from all but two players.
    let mut keepers = 0;
    for p in pool.iter_mut() {
        if p.has_position(Position::Goalkeeper) {
            keepers += 1;
            if keepers > 2 {
                p.positions.retain(|&pos| pos != Position::Goalkeeper);
            }
        }
    }

    let outcome = balance(&pool, 4, 4).unwrap();
    assert!(outcome.warnings.contains(&BalanceWarning::GoalkeeperShortfall {
        eligible: 2,
        teams: 4
    }));
    assert_eq!(outcome.teams.len(), 4);
}

#[test]
fn inactive_players_are_not_assigned() {
    let mut pool = mixed_pool(16);
    let mut benched = player("Benched", 9, 9, 9, &[Position::Forward]);
    benched.is_active = false;
    let benched_id = benched.id;
    pool.push(benched);

    let outcome = balance(&pool, 4, 4).unwrap();
    assert!(outcome.teams.iter().all(|t| !t.has_player(benched_id)));
}

#[test]
fn wrong_pool_size_is_rejected() {
    let pool = mixed_pool(15);
    assert!(matches!(
        balance(&pool, 4, 4),
        Err(TournamentError::RosterSizeMismatch {
            expected: 16,
            actual: 15
        })
    ));
}

#[test]
fn zero_teams_is_rejected() {
    let pool = mixed_pool(16);
    assert!(matches!(
        balance(&pool, 4, 0),
        Err(TournamentError::EmptyRoster)
    ));
}

#[test]
fn out_of_range_team_size_is_rejected() {
    let pool = mixed_pool(12);
    assert!(matches!(
        balance(&pool, 3, 4),
        Err(TournamentError::InvalidSettings {
            setting: "team_size"
        })
    ));
}

#[test]
fn team_averages_match_a_recomputation_from_the_roster() {
    let pool = mixed_pool(16);
    let outcome = balance(&pool, 4, 4).unwrap();
    for team in &outcome.teams {
        let members: Vec<Player> = team
            .players
            .iter()
            .map(|id| pool.iter().find(|p| p.id == *id).unwrap().clone())
            .collect();
        assert_eq!(
            average_statistics(&members).unwrap(),
            team.average_statistics
        );
        assert_eq!(position_coverage(&members), team.position_coverage);
    }
}

#[test]
fn average_statistics_rounds_to_one_decimal() {
    let players = vec![
        player("A", 5, 7, 4, &[Position::Defender]),
        player("B", 6, 7, 5, &[Position::Midfielder]),
        player("C", 6, 8, 5, &[Position::Forward]),
    ];
    let avg = average_statistics(&players).unwrap();
    assert_eq!(avg.strength, 5.7);
    assert_eq!(avg.speed, 7.3);
    assert_eq!(avg.dribbling, 4.7);
    assert_eq!(avg.age, 25.0);
}

#[test]
fn average_statistics_rejects_an_empty_roster() {
    assert!(matches!(
        average_statistics(&[]),
        Err(TournamentError::EmptyRoster)
    ));
}

#[test]
fn position_coverage_counts_every_eligible_role() {
    let players = vec![
        player("A", 5, 5, 5, &[Position::Goalkeeper, Position::Defender]),
        player("B", 5, 5, 5, &[Position::Defender]),
        player("C", 5, 5, 5, &[Position::Midfielder, Position::Forward]),
    ];
    let coverage = position_coverage(&players);
    assert_eq!(coverage.goalkeeper, 1);
    assert_eq!(coverage.defender, 2);
    assert_eq!(coverage.midfielder, 1);
    assert_eq!(coverage.forward, 1);
}
