//! StockLeague Types - Canonical domain types for the contest engine
//!
//! This crate contains all foundational types for StockLeague with zero
//! dependencies on other stockleague crates:
//!
//! - Identity types (`ContestId`, `TeamId`)
//! - Market performance snapshots (`StockPerformance`)
//! - Team composition types (`StockRole`, `TeamStock`, `Team`)
//! - Ranking output types (`RankedEntry`, `RankSnapshot`)
//!
//! # Architectural Invariants
//!
//! 1. A scoring pass is a pure function of its inputs; these types carry no
//!    hidden global state.
//! 2. `TeamStock::points` and `Team::total_points` are caches rewritten every
//!    pass and never read authoritatively.
//! 3. Rank history lives outside the engine; a `RankSnapshot` is threaded
//!    explicitly by the caller from one pass to the next.

pub mod performance;
pub mod ranking;
pub mod team;

pub use performance::*;
pub use ranking::*;
pub use team::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Version of the StockLeague types schema
pub const TYPES_VERSION: &str = "0.1.0";

/// Macro to generate ID types with common implementations
macro_rules! define_id_type {
    ($name:ident, $prefix:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse from a string (with or without prefix)
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Get the inner UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Convert to prefixed string
            pub fn to_prefixed_string(&self) -> String {
                format!("{}_{}", $prefix, self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id_type!(ContestId, "con", "Contest identifier");
define_id_type!(TeamId, "team", "Team identifier");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = TeamId::new();
        let parsed = TeamId::parse(&id.to_prefixed_string()).unwrap();
        assert_eq!(id, parsed);

        let bare = TeamId::parse(&id.0.to_string()).unwrap();
        assert_eq!(id, bare);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        let contest = ContestId::new();
        assert!(contest.to_prefixed_string().starts_with("con_"));
        assert!(TeamId::new().to_prefixed_string().starts_with("team_"));
    }
}
