//! Rank assignment
//!
//! Turns a collection of team totals into a stable, deterministically
//! ordered ranking with rank-change deltas relative to a previous snapshot.
//! Pure in-memory transform: empty input yields empty output, no failure
//! modes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockleague_types::{RankSnapshot, RankedEntry, TeamId};

/// One team's total for a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    /// Team identifier
    pub team_id: TeamId,
    /// Ranking input (base points plus sector bonus)
    pub points: Decimal,
}

impl TeamScore {
    pub fn new(team_id: TeamId, points: Decimal) -> Self {
        Self { team_id, points }
    }
}

/// Assign dense 1-based ranks over the given totals.
///
/// Order is points descending with ties broken by team id ascending, so the
/// ordering is total and deterministic regardless of input order. Teams with
/// equal points still receive distinct sequential ranks. For ids the previous
/// snapshot does not carry, `previous_rank` equals the new rank and
/// `points_delta` is zero, so first-seen teams show no movement.
pub fn assign_ranks(
    mut scores: Vec<TeamScore>,
    previous: Option<&RankSnapshot>,
) -> Vec<RankedEntry> {
    scores.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team_id.cmp(&b.team_id)));

    scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| {
            let rank = i + 1;
            let previous_rank = previous
                .and_then(|snapshot| snapshot.rank_of(&score.team_id))
                .unwrap_or(rank);
            let points_delta = previous
                .and_then(|snapshot| snapshot.points_of(&score.team_id))
                .map(|prior| score.points - prior)
                .unwrap_or(Decimal::ZERO);

            RankedEntry {
                team_id: score.team_id,
                rank,
                previous_rank,
                points: score.points,
                points_delta,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(assign_ranks(Vec::new(), None).is_empty());
    }

    #[test]
    fn test_ranks_are_dense_and_descending() {
        let scores = vec![
            TeamScore::new(TeamId::new(), dec!(63.63)),
            TeamScore::new(TeamId::new(), dec!(295.00)),
            TeamScore::new(TeamId::new(), dec!(120.50)),
        ];

        let entries = assign_ranks(scores, None);

        let ranks: HashSet<usize> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=3).collect());
        assert_eq!(entries[0].points, dec!(295.00));
        assert_eq!(entries[1].points, dec!(120.50));
        assert_eq!(entries[2].points, dec!(63.63));
    }

    #[test]
    fn test_first_pass_shows_no_movement() {
        let scores = vec![
            TeamScore::new(TeamId::new(), dec!(295.00)),
            TeamScore::new(TeamId::new(), dec!(63.63)),
        ];

        for entry in assign_ranks(scores, None) {
            assert_eq!(entry.previous_rank, entry.rank);
            assert_eq!(entry.points_delta, Decimal::ZERO);
            assert_eq!(entry.rank_change(), 0);
        }
    }

    #[test]
    fn test_tie_break_by_team_id_is_deterministic() {
        let a = TeamId::new();
        let b = TeamId::new();
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        let forward = assign_ranks(
            vec![TeamScore::new(low, dec!(100)), TeamScore::new(high, dec!(100))],
            None,
        );
        let reversed = assign_ranks(
            vec![TeamScore::new(high, dec!(100)), TeamScore::new(low, dec!(100))],
            None,
        );

        assert_eq!(forward, reversed);
        assert_eq!(forward[0].team_id, low);
        assert_eq!(forward[0].rank, 1);
        assert_eq!(forward[1].rank, 2);
    }

    #[test]
    fn test_movement_against_snapshot() {
        let climber = TeamId::new();
        let faller = TeamId::new();

        let first = assign_ranks(
            vec![
                TeamScore::new(faller, dec!(200)),
                TeamScore::new(climber, dec!(100)),
            ],
            None,
        );
        let snapshot = RankSnapshot::from_entries(&first);

        let second = assign_ranks(
            vec![
                TeamScore::new(faller, dec!(150)),
                TeamScore::new(climber, dec!(180)),
            ],
            Some(&snapshot),
        );

        let top = &second[0];
        assert_eq!(top.team_id, climber);
        assert_eq!(top.previous_rank, 2);
        assert!(top.rank_improved());
        assert_eq!(top.points_delta, dec!(80));

        let bottom = &second[1];
        assert_eq!(bottom.team_id, faller);
        assert_eq!(bottom.previous_rank, 1);
        assert!(bottom.rank_dropped());
        assert_eq!(bottom.points_delta, dec!(-50));
    }

    #[test]
    fn test_new_entrant_mid_contest_shows_no_movement() {
        let veteran = TeamId::new();
        let first = assign_ranks(vec![TeamScore::new(veteran, dec!(100))], None);
        let snapshot = RankSnapshot::from_entries(&first);

        let rookie = TeamId::new();
        let second = assign_ranks(
            vec![
                TeamScore::new(veteran, dec!(100)),
                TeamScore::new(rookie, dec!(250)),
            ],
            Some(&snapshot),
        );

        let rookie_entry = second.iter().find(|e| e.team_id == rookie).unwrap();
        assert_eq!(rookie_entry.rank, 1);
        assert_eq!(rookie_entry.previous_rank, 1);
        assert_eq!(rookie_entry.points_delta, Decimal::ZERO);
    }
}
