//! Coverage engine
//!
//! Derives per-creature defensive profiles from the type chart and rolls them
//! up into team-level tallies and coverage gaps. Everything here is a pure
//! function of its inputs.

mod matchup;
mod team;

pub use matchup::{DefensiveProfile, Effectiveness, classify, defensive_multiplier};
pub use team::{TeamCoverage, TypeTally, aggregate_team};
