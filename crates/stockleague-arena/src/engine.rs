//! Scoring-pass orchestration
//!
//! `ScoringEngine` runs one whole scoring pass: score every team against the
//! performance snapshot, fold in sector bonuses, and rank the totals. The
//! engine holds only its rule table; it reads no hidden state and must be
//! re-invoked wholesale on each new market snapshot (no incremental scoring).

use stockleague_scoring::{apply_scores, ScoringRules};
use stockleague_types::{RankSnapshot, RankedEntry, StockPerformance, Team};

use crate::ranking::{assign_ranks, TeamScore};

/// Runs scoring passes under a fixed rule table.
///
/// Safe to invoke concurrently for independent inputs; nothing is shared
/// across invocations.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rules: ScoringRules,
}

impl ScoringEngine {
    /// Create an engine with the given rule table
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// The rule table this engine scores with
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score and rank all teams against one market snapshot.
    ///
    /// Each team's ranking input is its base points plus sector bonus; the
    /// per-holding and per-team caches inside `teams` are rewritten as a side
    /// effect. `previous` threads the prior pass's snapshot for rank-change
    /// tracking; pass `None` on the first pass.
    pub fn score_pass(
        &self,
        teams: &mut [Team],
        performances: &[StockPerformance],
        previous: Option<&RankSnapshot>,
    ) -> Vec<RankedEntry> {
        let scores: Vec<TeamScore> = teams
            .iter_mut()
            .map(|team| {
                let total = apply_scores(&self.rules, team, performances);
                TeamScore::new(team.id, total)
            })
            .collect();

        let entries = assign_ranks(scores, previous);

        tracing::info!(
            teams = teams.len(),
            samples = performances.len(),
            "scoring pass complete"
        );

        entries
    }
}
