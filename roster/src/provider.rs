//! Roster sources

use std::future::Future;
use std::path::Path;

use anyhow::Result;

use crate::api::Pokemon;
use crate::creature::Creature;
use crate::RosterError;

/// Something that can produce the browsable roster
///
/// The coverage engine does not care where creatures come from; the HTTP
/// client and [`FixtureRoster`] both implement this.
pub trait RosterProvider {
    /// Up to `limit` creatures, in roster order
    fn fetch_roster(&self, limit: usize) -> impl Future<Output = Result<Vec<Creature>>> + Send;
}

/// Roster loaded from a JSON array of PokeAPI `/pokemon/{id}` records
#[derive(Debug, Clone, Default)]
pub struct FixtureRoster {
    creatures: Vec<Creature>,
}

impl FixtureRoster {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let records: Vec<Pokemon> = serde_json::from_str(json)?;
        let creatures = records
            .into_iter()
            .map(Creature::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(creatures))
    }

    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }
}

impl RosterProvider for FixtureRoster {
    async fn fetch_roster(&self, limit: usize) -> Result<Vec<Creature>> {
        Ok(self.creatures.iter().take(limit).cloned().collect())
    }
}
