//! Market performance snapshots
//!
//! A `StockPerformance` is one instrument's market snapshot for a single
//! scoring pass. The engine assumes symbols are unique within a pass; the
//! external market-data feed is responsible for producing one sample per
//! symbol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of one traded instrument for a scoring pass.
///
/// Immutable once produced. `change_percent` is a signed percentage
/// (`dec!(1.30)` means +1.30%), `volume` is a non-negative count of shares
/// traded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPerformance {
    /// Ticker symbol, unique key within a pass
    pub symbol: String,
    /// Current price
    pub price: Decimal,
    /// Price at the previous close
    pub previous_price: Decimal,
    /// Absolute price change
    pub change: Decimal,
    /// Percent change, signed (1.30 = +1.30%)
    pub change_percent: Decimal,
    /// Shares traded
    pub volume: u64,
    /// Market capitalization, when the feed supplies it
    pub market_cap: Option<Decimal>,
    /// Sector label used for sector-leader bonuses
    pub sector: String,
}

impl StockPerformance {
    /// Build a sample from current and previous prices, deriving the change
    /// fields.
    pub fn from_prices(
        symbol: impl Into<String>,
        price: Decimal,
        previous_price: Decimal,
        volume: u64,
        sector: impl Into<String>,
    ) -> Self {
        let change = price - previous_price;
        let change_percent = if previous_price.is_zero() {
            Decimal::ZERO
        } else {
            (change / previous_price) * Decimal::ONE_HUNDRED
        };

        Self {
            symbol: symbol.into(),
            price,
            previous_price,
            change,
            change_percent,
            volume,
            market_cap: None,
            sector: sector.into(),
        }
    }

    /// Attach a market capitalization to the sample
    pub fn with_market_cap(mut self, market_cap: Decimal) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Whether the instrument gained over the pass
    pub fn is_gainer(&self) -> bool {
        self.change_percent > Decimal::ZERO
    }

    /// Whether the instrument lost over the pass
    pub fn is_loser(&self) -> bool {
        self.change_percent < Decimal::ZERO
    }
}
