//! Roster side of teamdex: decoding PokeAPI payloads into [`Creature`]s that
//! the coverage engine can consume, plus search and provider plumbing.

use std::path::PathBuf;

use teamdex_chart::TypeError;
use thiserror::Error;

pub mod api;
mod creature;
mod provider;
mod search;
mod verify;

#[cfg(test)]
mod tests;

pub use api::{
    NamedResource, Pokemon, PokemonListResponse, PokemonSprites, PokemonTypeSlot,
    TypeDamageRelations, TypeInfo, parse_pokemon, parse_pokemon_list, parse_type_info,
};
pub use creature::Creature;
pub use provider::{FixtureRoster, RosterProvider};
pub use search::{filter_by_name, id_from_url};
pub use verify::{ChartMismatch, chart_mismatches};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid types for {name}: {source}")]
    InvalidTypes {
        name: String,
        #[source]
        source: TypeError,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
