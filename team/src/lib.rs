//! Team store for teamdex.
//!
//! A [`Team`] is an ordered selection of up to [`MAX_TEAM_SIZE`] creatures.
//! Its defensive analysis is never cached: [`Team::coverage`] rebuilds it from
//! the current members every time.

mod storage;

use serde::Serialize;
use teamdex_chart::{TeamCoverage, TeamMember, aggregate_team};
use teamdex_roster::Creature;
use thiserror::Error;

pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Team is full ({} members)", MAX_TEAM_SIZE)]
    Full,

    #[error("Creature {0} is already on the team")]
    Duplicate(u32),

    #[error("Slot {index} is out of range for a team of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Stored team is invalid: {0}")]
    Invalid(String),

    #[error("Failed to read or write team file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode team file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loaded through [`Team::from_members`] so stored teams are validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Team {
    members: Vec<Creature>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a team from stored members, enforcing size and uniqueness
    pub fn from_members(members: Vec<Creature>) -> Result<Self, TeamError> {
        let mut team = Self::new();
        for creature in members {
            team.add(creature).map_err(|e| TeamError::Invalid(e.to_string()))?;
        }
        Ok(team)
    }

    /// Append a creature to the end of the team
    pub fn add(&mut self, creature: Creature) -> Result<(), TeamError> {
        if self.is_full() {
            return Err(TeamError::Full);
        }
        if self.contains(creature.id) {
            return Err(TeamError::Duplicate(creature.id));
        }
        self.members.push(creature);
        Ok(())
    }

    /// Remove the creature with `id`, returning it if it was on the team
    pub fn remove(&mut self, id: u32) -> Option<Creature> {
        let index = self.members.iter().position(|c| c.id == id)?;
        Some(self.members.remove(index))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.members.iter().any(|c| c.id == id)
    }

    /// Move the member at `from` to position `to`, shifting the others
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), TeamError> {
        let len = self.members.len();
        for index in [from, to] {
            if index >= len {
                return Err(TeamError::OutOfRange { index, len });
            }
        }
        if from != to {
            let creature = self.members.remove(from);
            self.members.insert(to, creature);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    /// Defensive coverage of the current members
    pub fn coverage(&self) -> TeamCoverage {
        let members: Vec<TeamMember> = self.members.iter().map(Creature::to_member).collect();
        aggregate_team(&members)
    }
}
