//! Defensive matchups of a single creature

use crate::types::{Type, TypePair};

/// Damage multiplier of an `attacker` move against a creature typed `defenders`
///
/// Folds the chart cell of each defending type into a product seeded at 1, so a
/// dual type yields one of 0, 0.25, 0.5, 1, 2 or 4 and any immunity zeroes it.
pub fn defensive_multiplier(attacker: Type, defenders: &TypePair) -> f32 {
    defenders
        .as_slice()
        .iter()
        .fold(1.0, |product, defender| product * attacker.effectiveness(*defender))
}

/// Bucket an attacking type falls into against one defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Immune,
    Resisted,
    Neutral,
    Weak,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::Immune
        } else if multiplier < 1.0 {
            Effectiveness::Resisted
        } else if multiplier > 1.0 {
            Effectiveness::Weak
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Weaknesses, resistances and immunities of one [`TypePair`]
///
/// Every bucket lists attacking types in canonical [`Type::ALL`] order. A type
/// missing from all three buckets is a neutral matchup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefensiveProfile {
    pub types: TypePair,

    /// Attacking types dealing 2x or 4x
    pub weaknesses: Vec<(Type, f32)>,

    /// Attacking types dealing 0.5x or 0.25x
    pub resistances: Vec<(Type, f32)>,

    /// Attacking types dealing no damage
    pub immunities: Vec<Type>,
}

impl DefensiveProfile {
    /// Multiplier of `attacker` if it is a weakness
    pub fn weakness(&self, attacker: Type) -> Option<f32> {
        lookup(&self.weaknesses, attacker)
    }

    /// Multiplier of `attacker` if it is resisted
    pub fn resistance(&self, attacker: Type) -> Option<f32> {
        lookup(&self.resistances, attacker)
    }

    pub fn is_immune(&self, attacker: Type) -> bool {
        self.immunities.contains(&attacker)
    }

    pub fn effectiveness(&self, attacker: Type) -> Effectiveness {
        if self.is_immune(attacker) {
            Effectiveness::Immune
        } else if self.resistance(attacker).is_some() {
            Effectiveness::Resisted
        } else if self.weakness(attacker).is_some() {
            Effectiveness::Weak
        } else {
            Effectiveness::Neutral
        }
    }

    /// Attacking types that hit for exactly 1x
    pub fn neutral(&self) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| self.effectiveness(*t) == Effectiveness::Neutral)
            .collect()
    }
}

fn lookup(bucket: &[(Type, f32)], attacker: Type) -> Option<f32> {
    bucket
        .iter()
        .find(|(t, _)| *t == attacker)
        .map(|(_, multiplier)| *multiplier)
}

/// Classify every attacking type against `defenders`
pub fn classify(defenders: &TypePair) -> DefensiveProfile {
    let mut profile = DefensiveProfile {
        types: *defenders,
        weaknesses: Vec::new(),
        resistances: Vec::new(),
        immunities: Vec::new(),
    };

    for attacker in Type::all().iter().copied() {
        let multiplier = defensive_multiplier(attacker, defenders);
        match Effectiveness::from_multiplier(multiplier) {
            Effectiveness::Weak => profile.weaknesses.push((attacker, multiplier)),
            Effectiveness::Resisted => profile.resistances.push((attacker, multiplier)),
            Effectiveness::Immune => profile.immunities.push(attacker),
            Effectiveness::Neutral => {}
        }
    }

    profile
}
