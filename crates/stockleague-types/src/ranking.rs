//! Ranking output types
//!
//! `RankedEntry` is the sole contract between the rank assigner and
//! leaderboard consumers: id, current rank, previous rank, points, and
//! points delta. A `RankSnapshot` carries the previous pass's ranks and
//! points; it is the only state threaded between passes, and the caller owns
//! it.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TeamId;

/// One team's position in a ranking pass.
///
/// Ranks are 1-based and dense; `previous_rank` equals `rank` for ids the
/// prior snapshot did not carry, so first-seen teams show zero movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Team identifier
    pub team_id: TeamId,
    /// Current rank (1-indexed, no gaps)
    pub rank: usize,
    /// Rank in the previous snapshot, or `rank` if first seen
    pub previous_rank: usize,
    /// Points this pass
    pub points: Decimal,
    /// Points change versus the previous snapshot, zero if first seen
    pub points_delta: Decimal,
}

impl RankedEntry {
    /// Signed rank movement (+ve = climbed, -ve = dropped)
    pub fn rank_change(&self) -> i64 {
        self.previous_rank as i64 - self.rank as i64
    }

    /// Check if rank improved
    pub fn rank_improved(&self) -> bool {
        self.rank_change() > 0
    }

    /// Check if rank dropped
    pub fn rank_dropped(&self) -> bool {
        self.rank_change() < 0
    }

    /// Get rank movement indicator
    pub fn rank_indicator(&self) -> &'static str {
        match self.rank_change() {
            c if c > 0 => "^",
            c if c < 0 => "v",
            _ => "-",
        }
    }
}

/// Previous-pass state for rank-change tracking.
///
/// Built from the prior pass's output and supplied back to the next pass.
/// The engine never persists one of these itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankSnapshot {
    /// Rank by team
    pub ranks: HashMap<TeamId, usize>,
    /// Points by team
    pub points: HashMap<TeamId, Decimal>,
}

impl RankSnapshot {
    /// Capture a snapshot from a pass's ranked output
    pub fn from_entries(entries: &[RankedEntry]) -> Self {
        Self {
            ranks: entries.iter().map(|e| (e.team_id, e.rank)).collect(),
            points: entries.iter().map(|e| (e.team_id, e.points)).collect(),
        }
    }

    /// Previous rank for a team, if the snapshot carries it
    pub fn rank_of(&self, team_id: &TeamId) -> Option<usize> {
        self.ranks.get(team_id).copied()
    }

    /// Previous points for a team, if the snapshot carries them
    pub fn points_of(&self, team_id: &TeamId) -> Option<Decimal> {
        self.points.get(team_id).copied()
    }
}
