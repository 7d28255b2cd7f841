//! Command implementations for teamdex CLI

pub mod matchup;
pub mod roster;
pub mod team;
