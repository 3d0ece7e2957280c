//! Team composition types
//!
//! A team is an ordered set of up to [`MAX_HOLDINGS`] stocks, each selected
//! into a role that carries a scoring multiplier. Capacity is a domain
//! invariant enforced by the team-composition layer upstream; the scoring
//! engine tolerates any size including zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::TeamId;

/// Maximum holdings per team
pub const MAX_HOLDINGS: usize = 11;

// ============================================================================
// Roles
// ============================================================================

/// Role assigned to a stock within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockRole {
    /// Team captain, highest multiplier
    Captain,
    /// Second in command
    ViceCaptain,
    /// Balanced pick
    AllRounder,
    /// Defensive pick
    WicketKeeper,
    /// Offensive pick
    Batsman,
    /// Baseline pick, no multiplier advantage
    Bowler,
}

impl StockRole {
    /// Default scoring multiplier for the role
    pub fn default_multiplier(&self) -> Decimal {
        match self {
            Self::Captain => dec!(2.5),
            Self::ViceCaptain => dec!(2.0),
            Self::AllRounder => dec!(1.75),
            Self::WicketKeeper => dec!(1.5),
            Self::Batsman => dec!(1.25),
            Self::Bowler => dec!(1.0),
        }
    }

    /// Get display name for the role
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Captain => "Captain",
            Self::ViceCaptain => "Vice Captain",
            Self::AllRounder => "All Rounder",
            Self::WicketKeeper => "Wicket Keeper",
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
        }
    }

    /// All roles, multiplier-descending
    pub fn all() -> [StockRole; 6] {
        [
            Self::Captain,
            Self::ViceCaptain,
            Self::AllRounder,
            Self::WicketKeeper,
            Self::Batsman,
            Self::Bowler,
        ]
    }
}

// ============================================================================
// Holdings
// ============================================================================

/// A stock selected into a team.
///
/// The multiplier is derived from the role at construction but stored
/// independently so contest rules can override it. `points` caches the most
/// recent scorer output; it is rewritten on every pass and never read
/// authoritatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStock {
    /// Ticker symbol; must resolve to a performance sample in the same pass
    /// to contribute points
    pub symbol: String,
    /// Assigned role
    pub role: StockRole,
    /// Scoring multiplier, normally `role.default_multiplier()`
    pub multiplier: Decimal,
    /// Last computed points (cache, rewritten each pass)
    pub points: Decimal,
}

impl TeamStock {
    /// Select a stock into a role with the role's default multiplier
    pub fn new(symbol: impl Into<String>, role: StockRole) -> Self {
        Self {
            symbol: symbol.into(),
            role,
            multiplier: role.default_multiplier(),
            points: Decimal::ZERO,
        }
    }

    /// Override the multiplier (contest-specific rules)
    pub fn with_multiplier(mut self, multiplier: Decimal) -> Self {
        self.multiplier = multiplier;
        self
    }
}

// ============================================================================
// Teams
// ============================================================================

/// A contest entry: a named set of holdings owned by one participant.
///
/// `total_points` is derived each pass and never stored as ground truth
/// outside a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier
    pub id: TeamId,
    /// Display name
    pub name: String,
    /// Selected holdings, at most [`MAX_HOLDINGS`]
    pub stocks: Vec<TeamStock>,
    /// Last computed total (cache, rewritten each pass)
    pub total_points: Decimal,
}

impl Team {
    /// Create an empty team
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(),
            name: name.into(),
            stocks: Vec::new(),
            total_points: Decimal::ZERO,
        }
    }

    /// Add a holding
    pub fn with_stock(mut self, stock: TeamStock) -> Self {
        self.stocks.push(stock);
        self
    }

    /// Whether the team exceeds the composition capacity.
    ///
    /// The engine still scores over-capacity teams; this exists for upstream
    /// validation layers.
    pub fn is_over_capacity(&self) -> bool {
        self.stocks.len() > MAX_HOLDINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_multipliers_descend() {
        let roles = StockRole::all();
        for pair in roles.windows(2) {
            assert!(pair[0].default_multiplier() >= pair[1].default_multiplier());
        }
        assert_eq!(StockRole::Captain.default_multiplier(), dec!(2.5));
        assert_eq!(StockRole::Batsman.default_multiplier(), dec!(1.25));
        assert_eq!(StockRole::Bowler.default_multiplier(), dec!(1.0));
    }

    #[test]
    fn test_holding_takes_role_multiplier() {
        let stock = TeamStock::new("AAPL", StockRole::Captain);
        assert_eq!(stock.multiplier, dec!(2.5));
        assert_eq!(stock.points, Decimal::ZERO);

        let overridden = TeamStock::new("AAPL", StockRole::Captain).with_multiplier(dec!(3));
        assert_eq!(overridden.multiplier, dec!(3));
    }

    #[test]
    fn test_team_capacity_check() {
        let mut team = Team::new("Bulls");
        assert!(!team.is_over_capacity());

        for i in 0..=MAX_HOLDINGS {
            team.stocks.push(TeamStock::new(format!("SYM{i}"), StockRole::Bowler));
        }
        assert!(team.is_over_capacity());
    }
}
