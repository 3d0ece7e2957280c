//! Team aggregation
//!
//! Combines the stock scorer and sector-bonus calculator across a team's
//! holdings. A holding whose symbol has no performance sample in the pass
//! contributes 0 points; it stays in the holding list and is not an error.
//! Symbols are assumed unique within a pass (a feed precondition); lookups
//! take the first match.

use rust_decimal::Decimal;

use stockleague_types::{StockPerformance, Team, TeamStock};

use crate::rules::{round_points, ScoringRules};
use crate::scorer::score_stock;
use crate::sector::sector_bonus;

/// Base team total: the sum of per-holding scores, rounded to 2 dp.
///
/// Does not include the sector bonus; [`team_total`] is the quantity that
/// feeds ranking.
pub fn team_points(
    rules: &ScoringRules,
    holdings: &[TeamStock],
    performances: &[StockPerformance],
) -> Decimal {
    let sum: Decimal = holdings
        .iter()
        .map(|stock| {
            performances
                .iter()
                .find(|p| p.symbol == stock.symbol)
                .map(|perf| score_stock(rules, stock, perf))
                .unwrap_or(Decimal::ZERO)
        })
        .sum();

    round_points(sum)
}

/// Ranking input for a team: base points plus sector bonus.
pub fn team_total(
    rules: &ScoringRules,
    holdings: &[TeamStock],
    performances: &[StockPerformance],
) -> Decimal {
    round_points(team_points(rules, holdings, performances) + sector_bonus(rules, holdings, performances))
}

/// Score a team in place, rewriting each holding's `points` cache and the
/// team's `total_points`, and return the total.
///
/// The caches exist for display; every pass recomputes them from scratch.
pub fn apply_scores(
    rules: &ScoringRules,
    team: &mut Team,
    performances: &[StockPerformance],
) -> Decimal {
    for stock in &mut team.stocks {
        let points = performances
            .iter()
            .find(|p| p.symbol == stock.symbol)
            .map(|perf| score_stock(rules, stock, perf))
            .unwrap_or(Decimal::ZERO);
        stock.points = points;
    }

    let total = team_total(rules, &team.stocks, performances);
    team.total_points = total;

    tracing::debug!(team = %team.id, points = %total, "scored team");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockleague_types::StockRole;

    fn sample(symbol: &str, sector: &str, change_percent: Decimal, volume: u64) -> StockPerformance {
        StockPerformance {
            symbol: symbol.to_string(),
            price: dec!(100),
            previous_price: dec!(100),
            change: Decimal::ZERO,
            change_percent,
            volume,
            market_cap: None,
            sector: sector.to_string(),
        }
    }

    #[test]
    fn test_empty_team_scores_zero() {
        let rules = ScoringRules::default();
        assert_eq!(team_points(&rules, &[], &[]), Decimal::ZERO);
        assert_eq!(team_total(&rules, &[], &[]), Decimal::ZERO);
    }

    #[test]
    fn test_missing_sample_contributes_zero() {
        let rules = ScoringRules::default();
        let performances = vec![sample("AAPL", "Technology", dec!(1.30), 45_678_900)];

        let with_ghost = vec![
            TeamStock::new("AAPL", StockRole::Captain),
            TeamStock::new("GHOST", StockRole::ViceCaptain),
        ];
        let without_ghost = vec![TeamStock::new("AAPL", StockRole::Captain)];

        assert_eq!(
            team_points(&rules, &with_ghost, &performances),
            team_points(&rules, &without_ghost, &performances)
        );
    }

    #[test]
    fn test_team_points_sums_holdings() {
        let rules = ScoringRules::default();
        let performances = vec![
            sample("AAPL", "Technology", dec!(1.30), 45_678_900),
            sample("MSFT", "Technology", dec!(-0.32), 23_456_789),
        ];
        let holdings = vec![
            TeamStock::new("AAPL", StockRole::Captain),
            TeamStock::new("MSFT", StockRole::Batsman),
        ];

        // 295.00 + 63.63
        assert_eq!(team_points(&rules, &holdings, &performances), dec!(358.63));
    }

    #[test]
    fn test_team_total_folds_in_sector_bonus() {
        let rules = ScoringRules::default();
        let performances = vec![
            sample("AAPL", "Technology", dec!(1.30), 45_678_900),
            sample("MSFT", "Technology", dec!(-0.32), 23_456_789),
        ];
        let holdings = vec![
            TeamStock::new("AAPL", StockRole::Captain),
            TeamStock::new("MSFT", StockRole::Batsman),
        ];

        // AAPL leads Technology: 358.63 + 10 * 2.5
        assert_eq!(team_total(&rules, &holdings, &performances), dec!(383.63));
    }

    #[test]
    fn test_apply_scores_rewrites_caches() {
        let rules = ScoringRules::default();
        let performances = vec![sample("AAPL", "Technology", dec!(1.30), 45_678_900)];

        let mut team = stockleague_types::Team::new("Bulls")
            .with_stock(TeamStock::new("AAPL", StockRole::Captain))
            .with_stock(TeamStock::new("GHOST", StockRole::Bowler));

        // Stale caches from a previous pass must be overwritten
        team.stocks[1].points = dec!(42);
        team.total_points = dec!(42);

        let total = apply_scores(&rules, &mut team, &performances);

        assert_eq!(team.stocks[0].points, dec!(295.00));
        assert_eq!(team.stocks[1].points, Decimal::ZERO);
        // 295.00 + sector-leader bonus 10 * 2.5
        assert_eq!(total, dec!(320.00));
        assert_eq!(team.total_points, total);
    }
}
