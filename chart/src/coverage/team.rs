//! Team-level roll-up of defensive profiles

use std::collections::BTreeMap;

use super::matchup::{DefensiveProfile, classify};
use crate::types::{TeamMember, Type};

/// Team members sharing one matchup against an attacking type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeTally {
    /// Names of the contributing members, in team order
    pub members: Vec<String>,
}

impl TypeTally {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Aggregated defensive analysis of a team
///
/// Maps iterate in canonical type order; a type only appears as a key once at
/// least one member contributes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamCoverage {
    pub weaknesses: BTreeMap<Type, TypeTally>,
    pub resistances: BTreeMap<Type, TypeTally>,
    pub immunities: BTreeMap<Type, Vec<String>>,

    /// Attacking types no member resists or is immune to
    pub coverage_gaps: Vec<Type>,
}

impl TeamCoverage {
    /// Fold one member's profile into the tallies
    fn with_member(mut self, name: &str, profile: &DefensiveProfile) -> Self {
        for (t, _) in &profile.weaknesses {
            self.weaknesses.entry(*t).or_default().members.push(name.to_string());
        }
        for (t, _) in &profile.resistances {
            self.resistances.entry(*t).or_default().members.push(name.to_string());
        }
        for t in &profile.immunities {
            self.immunities.entry(*t).or_default().push(name.to_string());
        }
        self
    }

    /// Recompute gaps from the current tallies
    fn with_gaps(mut self) -> Self {
        self.coverage_gaps = Type::all()
            .iter()
            .copied()
            .filter(|t| !self.is_covered(*t))
            .collect();
        self
    }

    /// Whether some member resists or is immune to `attacker`
    pub fn is_covered(&self, attacker: Type) -> bool {
        self.resistances.contains_key(&attacker) || self.immunities.contains_key(&attacker)
    }

    pub fn weakness_count(&self, attacker: Type) -> usize {
        self.weaknesses.get(&attacker).map_or(0, TypeTally::count)
    }

    pub fn resistance_count(&self, attacker: Type) -> usize {
        self.resistances.get(&attacker).map_or(0, TypeTally::count)
    }

    /// Weaknesses with the most members affected first
    pub fn weaknesses_by_count(&self) -> Vec<(Type, &TypeTally)> {
        by_count(&self.weaknesses)
    }

    /// Resistances with the most members contributing first
    pub fn resistances_by_count(&self) -> Vec<(Type, &TypeTally)> {
        by_count(&self.resistances)
    }
}

fn by_count(tallies: &BTreeMap<Type, TypeTally>) -> Vec<(Type, &TypeTally)> {
    let mut sorted: Vec<(Type, &TypeTally)> = tallies.iter().map(|(t, tally)| (*t, tally)).collect();
    // stable sort keeps canonical order among equal counts
    sorted.sort_by(|a, b| b.1.count().cmp(&a.1.count()));
    sorted
}

/// Aggregate the defensive profiles of `members`, in team order
///
/// An empty team has nothing to cover and so reports no gaps.
pub fn aggregate_team(members: &[TeamMember]) -> TeamCoverage {
    if members.is_empty() {
        return TeamCoverage::default();
    }

    members
        .iter()
        .fold(TeamCoverage::default(), |coverage, member| {
            coverage.with_member(&member.name, &classify(&member.types))
        })
        .with_gaps()
}
