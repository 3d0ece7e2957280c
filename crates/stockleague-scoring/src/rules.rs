//! Scoring rule set
//!
//! The constant table that parameterizes all scoring math. Contests run with
//! `ScoringRules::default()` unless a contest configures its own table.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Decimal places for all point values
pub const POINTS_DP: u32 = 2;

/// Fixed constants for a contest's scoring math.
///
/// No logic lives here; the scorer, bonus calculator, and aggregator consume
/// these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points every resolvable holding starts from
    pub base_points: Decimal,
    /// Points per percentage point of change
    pub performance_multiplier: Decimal,
    /// Share volume above which the volume bonus applies (strict >)
    pub volume_bonus_threshold: u64,
    /// Flat bonus for heavy trading volume
    pub volume_bonus_points: Decimal,
    /// Damping factor in (0,1) applied after the role multiplier when
    /// `change_percent` is negative
    pub negative_performance_penalty: Decimal,
    /// Bonus per sector-leading holding, scaled by the holding's multiplier
    pub sector_leader_bonus: Decimal,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_points: dec!(100),
            performance_multiplier: dec!(10),
            volume_bonus_threshold: 1_000_000,
            volume_bonus_points: dec!(5),
            negative_performance_penalty: dec!(0.5),
            sector_leader_bonus: dec!(10),
        }
    }
}

/// Round a point value to [`POINTS_DP`] places, half away from zero.
pub fn round_points(points: Decimal) -> Decimal {
    points.round_dp_with_strategy(POINTS_DP, RoundingStrategy::MidpointAwayFromZero)
}
