//! StockLeague Scoring - Pure scoring core for fantasy stock contests
//!
//! This crate converts raw market performance into team points. Every
//! function is a synchronous, side-effect-free transform over explicitly
//! passed inputs, safe to invoke concurrently for independent contests.
//!
//! # Features
//!
//! - **Rule Set**: `ScoringRules`, the fixed constant table that
//!   parameterizes all scoring math
//! - **Stock Scorer**: per-holding points from one performance sample
//! - **Sector Bonus**: extra points for holdings leading their sector
//! - **Team Aggregator**: team totals across all holdings
//!
//! # Degraded conditions
//!
//! Exactly two, both handled by silent zero-contribution rather than an
//! error: a holding whose symbol has no performance sample in the pass, and a
//! team with zero holdings.
//!
//! # Example
//!
//! ```ignore
//! use stockleague_scoring::{ScoringRules, score_stock, team_total};
//!
//! let rules = ScoringRules::default();
//! let points = score_stock(&rules, &holding, &sample);
//! let total = team_total(&rules, &team.stocks, &samples);
//! ```

pub mod aggregator;
pub mod rules;
pub mod scorer;
pub mod sector;

pub use aggregator::{apply_scores, team_points, team_total};
pub use rules::{round_points, ScoringRules, POINTS_DP};
pub use scorer::score_stock;
pub use sector::{sector_bonus, sector_leaders};
