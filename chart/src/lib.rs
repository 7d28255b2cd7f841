//! Type effectiveness chart and defensive coverage analysis for Pokemon teams.
//!
//! # Overview
//!
//! `teamdex-chart` is the pure core of teamdex. It performs no I/O; roster
//! sources and team storage live in the crates layered on top of it:
//!
//! ```text
//! teamdex-chart (type chart + coverage engine) ← THIS CRATE
//!        │
//!        ├─> teamdex-roster (PokeAPI payloads, creatures)
//!        │          └─> teamdex-client (HTTP roster provider)
//!        └─> teamdex-team (team store + persistence)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 canonical types, with the effectiveness chart
//! - [`TypePair`] - validated 1-2 type assignment of a creature
//! - [`DefensiveProfile`] - weaknesses, resistances and immunities of one creature
//! - [`TeamCoverage`] - the same rolled up over a team, plus coverage gaps
//!
//! # Example Usage
//!
//! ```
//! use teamdex_chart::{aggregate_team, classify, TeamMember, Type, TypePair};
//!
//! let bulbasaur = TypePair::dual(Type::Grass, Type::Poison)?;
//! let profile = classify(&bulbasaur);
//! assert_eq!(profile.weakness(Type::Fire), Some(2.0));
//!
//! let team = [TeamMember::new(1, "bulbasaur", bulbasaur)];
//! let coverage = aggregate_team(&team);
//! assert!(coverage.coverage_gaps.contains(&Type::Fire));
//! # Ok::<(), teamdex_chart::TypeError>(())
//! ```

use thiserror::Error;

pub mod coverage;
pub mod types;

// Re-export main types at crate root for convenience
pub use coverage::{
    DefensiveProfile, Effectiveness, TeamCoverage, TypeTally, aggregate_team, classify,
    defensive_multiplier,
};
pub use types::{TYPE_CHART, TYPE_COUNT, TeamMember, Type, TypePair, multiplier, multiplier_by_name};

/// Domain validation errors for type input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unknown type: {0:?}")]
    UnknownType(String),

    #[error("A creature needs at least one type")]
    Empty,

    #[error("A creature has at most two types, got {0}")]
    TooMany(usize),

    #[error("Duplicate type: {0}")]
    Duplicate(Type),
}
