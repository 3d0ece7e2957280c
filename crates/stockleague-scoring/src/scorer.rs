//! Stock scorer
//!
//! Points for a single holding against a single performance sample. This
//! function has no failure mode for well-formed inputs; absent-performance
//! handling belongs to the aggregator.

use rust_decimal::Decimal;

use stockleague_types::{StockPerformance, TeamStock};

use crate::rules::{round_points, ScoringRules};

/// Score one holding against its performance sample.
///
/// Base points, plus `change_percent * performance_multiplier`, plus a flat
/// volume bonus for `volume > volume_bonus_threshold`. The running total is
/// scaled by the holding's multiplier; a negative `change_percent` then damps
/// the already role-scaled total, so higher-multiplier roles are penalized by
/// the same proportional factor on a larger base. Rounded to 2 dp, half away
/// from zero.
pub fn score_stock(rules: &ScoringRules, stock: &TeamStock, perf: &StockPerformance) -> Decimal {
    let mut points = rules.base_points;
    points += perf.change_percent * rules.performance_multiplier;

    if perf.volume > rules.volume_bonus_threshold {
        points += rules.volume_bonus_points;
    }

    points *= stock.multiplier;

    if perf.change_percent < Decimal::ZERO {
        points *= rules.negative_performance_penalty;
    }

    round_points(points)
}
