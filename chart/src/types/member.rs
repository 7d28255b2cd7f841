//! Team member input for coverage aggregation

use super::type_pair::TypePair;

/// A creature as seen by the coverage engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamMember {
    /// Roster id (national dex number for PokeAPI rosters)
    pub id: u32,

    /// Display name, retained in the team-level contributor lists
    pub name: String,

    pub types: TypePair,
}

impl TeamMember {
    pub fn new(id: u32, name: impl Into<String>, types: TypePair) -> Self {
        Self {
            id,
            name: name.into(),
            types,
        }
    }
}
