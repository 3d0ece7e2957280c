//! Leaderboard projection
//!
//! Maps ranked entries into the display rows consumed by UI components. The
//! row schema (id, ranks, movement, points, delta) is the sole contract with
//! the rendering layer; nothing here feeds back into scoring.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockleague_types::{RankedEntry, TeamId};

/// One display row of a contest leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Team identifier
    pub team_id: TeamId,
    /// Team display name
    pub team_name: String,
    /// Current rank (1-indexed)
    pub rank: usize,
    /// Rank on the previous pass
    pub previous_rank: usize,
    /// Signed movement (+ve = climbed)
    pub rank_change: i64,
    /// Movement indicator: "^", "v", or "-"
    pub movement: String,
    /// Points this pass
    pub points: Decimal,
    /// Points change versus the previous pass
    pub points_delta: Decimal,
}

/// Project ranked entries into leaderboard rows.
///
/// `names` maps team ids to display names; a team missing from the map falls
/// back to its prefixed id string so the row is still renderable.
pub fn project_leaderboard(
    entries: &[RankedEntry],
    names: &HashMap<TeamId, String>,
) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .map(|entry| LeaderboardRow {
            team_id: entry.team_id,
            team_name: names
                .get(&entry.team_id)
                .cloned()
                .unwrap_or_else(|| entry.team_id.to_prefixed_string()),
            rank: entry.rank,
            previous_rank: entry.previous_rank,
            rank_change: entry.rank_change(),
            movement: entry.rank_indicator().to_string(),
            points: entry.points,
            points_delta: entry.points_delta,
        })
        .collect()
}
