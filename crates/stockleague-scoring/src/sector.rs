//! Sector-leader bonus
//!
//! Holdings whose stock posts the best percent change in its sector collect a
//! bonus scaled by their multiplier. Leadership is decided against ALL
//! samples in the pass, not just the team's own holdings, and compared at
//! 2-decimal precision; every holding tied at the leading value collects.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use stockleague_types::{StockPerformance, TeamStock};

use crate::rules::{ScoringRules, POINTS_DP};

/// Decimal precision at which sector leadership is compared
const LEADER_DP: u32 = POINTS_DP;

fn leader_key(change_percent: Decimal) -> Decimal {
    change_percent.round_dp_with_strategy(LEADER_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Leading `change_percent` per sector, rounded to comparison precision.
pub fn sector_leaders(performances: &[StockPerformance]) -> HashMap<&str, Decimal> {
    let mut leaders: HashMap<&str, Decimal> = HashMap::new();

    for perf in performances {
        let value = leader_key(perf.change_percent);
        leaders
            .entry(perf.sector.as_str())
            .and_modify(|best| {
                if value > *best {
                    *best = value;
                }
            })
            .or_insert(value);
    }

    leaders
}

/// Total sector-leader bonus for a team's holdings.
///
/// Holdings with no matching performance sample contribute nothing and
/// cannot lead their sector.
pub fn sector_bonus(
    rules: &ScoringRules,
    holdings: &[TeamStock],
    performances: &[StockPerformance],
) -> Decimal {
    let leaders = sector_leaders(performances);

    holdings
        .iter()
        .filter_map(|stock| {
            let perf = performances.iter().find(|p| p.symbol == stock.symbol)?;
            let best = leaders.get(perf.sector.as_str())?;
            if leader_key(perf.change_percent) == *best {
                Some(rules.sector_leader_bonus * stock.multiplier)
            } else {
                None
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockleague_types::StockRole;

    fn sample(symbol: &str, sector: &str, change_percent: Decimal) -> StockPerformance {
        StockPerformance {
            symbol: symbol.to_string(),
            price: dec!(100),
            previous_price: dec!(100),
            change: Decimal::ZERO,
            change_percent,
            volume: 0,
            market_cap: None,
            sector: sector.to_string(),
        }
    }

    #[test]
    fn test_only_sector_leader_collects() {
        let rules = ScoringRules::default();
        let performances = vec![
            sample("AAPL", "Technology", dec!(2.10)),
            sample("MSFT", "Technology", dec!(1.40)),
        ];
        let holdings = vec![
            TeamStock::new("AAPL", StockRole::Bowler),
            TeamStock::new("MSFT", StockRole::Bowler),
        ];

        // Only AAPL leads Technology: 10 * 1.0
        assert_eq!(sector_bonus(&rules, &holdings, &performances), dec!(10));
    }

    #[test]
    fn test_leadership_decided_against_full_market() {
        let rules = ScoringRules::default();
        // NVDA leads the sector but is not held by the team
        let performances = vec![
            sample("NVDA", "Technology", dec!(4.00)),
            sample("AAPL", "Technology", dec!(2.10)),
        ];
        let holdings = vec![TeamStock::new("AAPL", StockRole::Captain)];

        assert_eq!(sector_bonus(&rules, &holdings, &performances), Decimal::ZERO);
    }

    #[test]
    fn test_tied_leaders_all_collect() {
        let rules = ScoringRules::default();
        // Equal at comparison precision despite differing raw values
        let performances = vec![
            sample("XOM", "Energy", dec!(1.501)),
            sample("CVX", "Energy", dec!(1.499)),
        ];
        let holdings = vec![
            TeamStock::new("XOM", StockRole::Captain),
            TeamStock::new("CVX", StockRole::Bowler),
        ];

        // 10 * 2.5 + 10 * 1.0
        assert_eq!(sector_bonus(&rules, &holdings, &performances), dec!(35));
    }

    #[test]
    fn test_multiplier_scales_bonus() {
        let rules = ScoringRules::default();
        let performances = vec![sample("RELI", "Energy", dec!(0.90))];
        let holdings = vec![TeamStock::new("RELI", StockRole::ViceCaptain)];

        assert_eq!(sector_bonus(&rules, &holdings, &performances), dec!(20));
    }

    #[test]
    fn test_missing_sample_cannot_lead() {
        let rules = ScoringRules::default();
        let performances = vec![sample("AAPL", "Technology", dec!(1.00))];
        let holdings = vec![TeamStock::new("GHOST", StockRole::Captain)];

        assert_eq!(sector_bonus(&rules, &holdings, &performances), Decimal::ZERO);
    }
}
