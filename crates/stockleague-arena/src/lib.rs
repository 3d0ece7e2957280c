//! StockLeague Arena - Fantasy stock contest platform
//!
//! This crate provides the contest layer around the pure scoring core:
//! contests are created, teams register, and each market snapshot drives a
//! scoring pass whose ranked output feeds the leaderboard.
//!
//! # Features
//!
//! - **Contests**: Time-bounded contests with a configurable rule table
//! - **Rank Assignment**: Deterministic ordering with rank-change deltas
//! - **Scoring Passes**: Whole-pass orchestration over registered teams
//! - **Provider Boundary**: Injected market-data, team-store, and
//!   rank-history collaborators
//! - **Leaderboard Projection**: Display rows for UI consumers
//!
//! # Example
//!
//! ```ignore
//! use stockleague_arena::{ContestArena, ContestConfig};
//!
//! let arena = ContestArena::new();
//!
//! // Create a contest and register teams
//! let contest = arena.create_contest(ContestConfig {
//!     name: "Weekly Tech Clash".to_string(),
//!     ..Default::default()
//! })?;
//! arena.register_team(contest.id, team)?;
//! arena.start_contest(contest.id)?;
//!
//! // Each new market snapshot drives one pass
//! let entries = arena.run_pass(contest.id, &provider).await?;
//! let rows = arena.leaderboard(contest.id)?;
//! ```

pub mod engine;
pub mod leaderboard;
pub mod provider;
pub mod ranking;

pub use engine::ScoringEngine;
pub use leaderboard::{project_leaderboard, LeaderboardRow};
pub use provider::ContestDataProvider;
pub use ranking::{assign_ranks, TeamScore};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockleague_scoring::ScoringRules;
use stockleague_types::{ContestId, RankSnapshot, RankedEntry, Team, TeamId};

/// Contest errors
#[derive(Debug, Error)]
pub enum ContestError {
    #[error("Contest not found: {0}")]
    ContestNotFound(ContestId),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Team already registered")]
    AlreadyRegistered,

    #[error("Registration closed")]
    RegistrationClosed,

    #[error("Contest not active: {0}")]
    NotActive(ContestId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Data provider failure: {0}")]
    Provider(String),
}

/// Result type for contest operations
pub type ContestResult<T> = Result<T, ContestError>;

// ============================================================================
// Contest Lifecycle
// ============================================================================

/// Contest status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContestStatus {
    /// Contest is scheduled but not started
    Scheduled,
    /// Registration is open
    Registration,
    /// Contest is live, scoring passes run
    Active,
    /// Contest has ended, final results being calculated
    Calculating,
    /// Contest is complete
    Completed,
    /// Contest was cancelled
    Cancelled,
}

/// Contest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestConfig {
    /// Contest name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Start time
    pub start_time: DateTime<Utc>,
    /// Duration
    pub duration_hours: u64,
    /// Maximum teams
    pub max_teams: Option<usize>,
    /// Entry fee (optional)
    pub entry_fee: Option<Decimal>,
    /// Prize pool
    pub prize_pool: Option<Decimal>,
    /// Scoring rule table for this contest
    pub rules: ScoringRules,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            name: "Stock Contest".to_string(),
            description: None,
            start_time: Utc::now(),
            duration_hours: 24,
            max_teams: Some(100),
            entry_fee: None,
            prize_pool: None,
            rules: ScoringRules::default(),
        }
    }
}

/// Contest data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    /// Contest ID
    pub id: ContestId,
    /// Configuration
    pub config: ContestConfig,
    /// Current status
    pub status: ContestStatus,
    /// Registered team count
    pub team_count: usize,
    /// Created at
    pub created_at: DateTime<Utc>,
}

impl Contest {
    /// Create a new contest
    pub fn new(config: ContestConfig) -> Self {
        Self {
            id: ContestId::new(),
            config,
            status: ContestStatus::Scheduled,
            team_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Check if registration is open
    pub fn is_registration_open(&self) -> bool {
        matches!(self.status, ContestStatus::Scheduled | ContestStatus::Registration)
    }

    /// Check if contest is active
    pub fn is_active(&self) -> bool {
        self.status == ContestStatus::Active
    }

    /// Get end time
    pub fn end_time(&self) -> DateTime<Utc> {
        self.config.start_time + chrono::Duration::hours(self.config.duration_hours as i64)
    }
}

// ============================================================================
// Contest Arena
// ============================================================================

/// Contest registry and pass runner.
///
/// Holds contests, registered teams, and each contest's latest ranked pass.
/// The stored pass is the only rank history the arena keeps; it becomes the
/// "previous" snapshot for the next pass.
pub struct ContestArena {
    /// Contests by id
    contests: RwLock<HashMap<ContestId, Contest>>,
    /// Registered teams: contest_id -> team_id -> team
    registrations: RwLock<HashMap<ContestId, HashMap<TeamId, Team>>>,
    /// Latest ranked pass per contest
    last_pass: RwLock<HashMap<ContestId, Vec<RankedEntry>>>,
}

impl ContestArena {
    /// Create a new arena
    pub fn new() -> Self {
        Self {
            contests: RwLock::new(HashMap::new()),
            registrations: RwLock::new(HashMap::new()),
            last_pass: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new contest
    pub fn create_contest(&self, config: ContestConfig) -> ContestResult<Contest> {
        if config.name.trim().is_empty() {
            return Err(ContestError::InvalidConfig("contest name is empty".to_string()));
        }

        let contest = Contest::new(config);
        let id = contest.id;

        self.contests.write().insert(id, contest.clone());
        self.registrations.write().insert(id, HashMap::new());

        tracing::info!(contest = %id, name = %contest.config.name, "contest created");
        Ok(contest)
    }

    /// Get a contest by ID
    pub fn get_contest(&self, id: ContestId) -> ContestResult<Contest> {
        self.contests
            .read()
            .get(&id)
            .cloned()
            .ok_or(ContestError::ContestNotFound(id))
    }

    /// List all contests
    pub fn list_contests(&self) -> Vec<Contest> {
        self.contests.read().values().cloned().collect()
    }

    /// Move a contest to `Active`, closing registration
    pub fn start_contest(&self, id: ContestId) -> ContestResult<()> {
        self.set_status(id, ContestStatus::Active)
    }

    /// Move a contest to `Completed`
    pub fn complete_contest(&self, id: ContestId) -> ContestResult<()> {
        self.set_status(id, ContestStatus::Completed)
    }

    /// Cancel a contest
    pub fn cancel_contest(&self, id: ContestId) -> ContestResult<()> {
        self.set_status(id, ContestStatus::Cancelled)
    }

    fn set_status(&self, id: ContestId, status: ContestStatus) -> ContestResult<()> {
        let mut contests = self.contests.write();
        let contest = contests.get_mut(&id).ok_or(ContestError::ContestNotFound(id))?;
        contest.status = status;
        Ok(())
    }

    /// Register a team for a contest
    pub fn register_team(&self, contest_id: ContestId, team: Team) -> ContestResult<TeamId> {
        let contest = self.get_contest(contest_id)?;

        if !contest.is_registration_open() {
            return Err(ContestError::RegistrationClosed);
        }

        let mut registrations = self.registrations.write();
        let teams = registrations
            .get_mut(&contest_id)
            .ok_or(ContestError::ContestNotFound(contest_id))?;

        if teams.contains_key(&team.id) {
            return Err(ContestError::AlreadyRegistered);
        }

        if let Some(max) = contest.config.max_teams {
            if teams.len() >= max {
                return Err(ContestError::RegistrationClosed);
            }
        }

        let team_id = team.id;
        teams.insert(team_id, team);

        drop(registrations);
        if let Some(contest) = self.contests.write().get_mut(&contest_id) {
            contest.team_count += 1;
        }

        tracing::debug!(contest = %contest_id, team = %team_id, "team registered");
        Ok(team_id)
    }

    /// Get a registered team
    pub fn get_team(&self, contest_id: ContestId, team_id: &TeamId) -> ContestResult<Team> {
        self.registrations
            .read()
            .get(&contest_id)
            .and_then(|teams| teams.get(team_id))
            .cloned()
            .ok_or(ContestError::TeamNotFound(*team_id))
    }

    /// Run one scoring pass for a contest.
    ///
    /// Fetches the market snapshot and every registered team's holdings from
    /// the provider, scores and ranks against the previous pass, persists the
    /// new ranks through the provider, and stores them as the next pass's
    /// "previous". Ranking input per team is base points plus sector bonus.
    pub async fn run_pass(
        &self,
        contest_id: ContestId,
        provider: &dyn ContestDataProvider,
    ) -> ContestResult<Vec<RankedEntry>> {
        let contest = self.get_contest(contest_id)?;
        if !contest.is_active() {
            return Err(ContestError::NotActive(contest_id));
        }

        // Guards must not be held across awaits
        let mut teams: Vec<Team> = {
            let registrations = self.registrations.read();
            registrations
                .get(&contest_id)
                .ok_or(ContestError::ContestNotFound(contest_id))?
                .values()
                .cloned()
                .collect()
        };

        let performances = provider.fetch_performances(contest_id).await?;
        for team in &mut teams {
            team.stocks = provider.fetch_holdings(team.id).await?;
        }

        let previous = self
            .last_pass
            .read()
            .get(&contest_id)
            .map(|entries| RankSnapshot::from_entries(entries));

        let engine = ScoringEngine::new(contest.config.rules.clone());
        let entries = engine.score_pass(&mut teams, &performances, previous.as_ref());

        provider.persist_ranks(contest_id, &entries).await?;

        self.last_pass.write().insert(contest_id, entries.clone());
        {
            let mut registrations = self.registrations.write();
            if let Some(registered) = registrations.get_mut(&contest_id) {
                for team in teams {
                    registered.insert(team.id, team);
                }
            }
        }

        tracing::info!(contest = %contest_id, teams = entries.len(), "scoring pass persisted");
        Ok(entries)
    }

    /// Leaderboard rows from the latest pass
    pub fn leaderboard(&self, contest_id: ContestId) -> ContestResult<Vec<LeaderboardRow>> {
        // Existence check keeps unknown-contest and not-yet-scored distinct
        self.get_contest(contest_id)?;

        let names: HashMap<TeamId, String> = self
            .registrations
            .read()
            .get(&contest_id)
            .map(|teams| {
                teams
                    .values()
                    .map(|team| (team.id, team.name.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let last_pass = self.last_pass.read();
        let entries = last_pass.get(&contest_id).map(Vec::as_slice).unwrap_or(&[]);

        Ok(project_leaderboard(entries, &names))
    }
}

impl Default for ContestArena {
    fn default() -> Self {
        Self::new()
    }
}
