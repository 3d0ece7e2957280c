//! Data-provider boundary
//!
//! All data acquisition and persistence is pushed behind this trait: the
//! scoring core takes plain data structures and returns plain data
//! structures, and the surrounding application injects a provider for
//! market snapshots, team holdings, and rank history. Tests substitute a
//! fixture provider.

use stockleague_types::{ContestId, RankedEntry, StockPerformance, TeamId, TeamStock};

use crate::ContestResult;

/// External collaborators of a contest: the market-data feed, the team
/// store, and the rank-history store.
///
/// Symbols are assumed unique within the performance collection for one
/// pass. `persist_ranks` makes the new ranks available as the next pass's
/// "previous"; the engine itself holds no rank history.
#[async_trait::async_trait]
pub trait ContestDataProvider: Send + Sync {
    /// Fetch the current pass's performance snapshot, one sample per symbol
    async fn fetch_performances(&self, contest_id: ContestId) -> ContestResult<Vec<StockPerformance>>;

    /// Fetch a team's current holdings, including role and multiplier.
    /// Stored multipliers are trusted as-is.
    async fn fetch_holdings(&self, team_id: TeamId) -> ContestResult<Vec<TeamStock>>;

    /// Persist a pass's ranked output for downstream consumers
    async fn persist_ranks(&self, contest_id: ContestId, entries: &[RankedEntry]) -> ContestResult<()>;
}
