//! PokeAPI v2 response payloads
//!
//! Only the fields teamdex reads are modelled; everything else in the
//! responses is ignored. See <https://pokeapi.co/docs/v2>.

use serde::{Deserialize, Serialize};

use crate::RosterError;

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated list from `/pokemon?limit=..&offset=..`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Full record from `/pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonTypeSlot>,

    #[serde(default)]
    pub sprites: PokemonSprites,
}

/// Type assignment; slot 1 is the primary type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

impl PokemonSprites {
    /// Official artwork if available, otherwise the default front sprite
    pub fn preferred(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// Record from `/type/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    pub damage_relations: TypeDamageRelations,
}

/// Damage relations of one type, offensive (`_to`) and defensive (`_from`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
}

pub fn parse_pokemon(json: &str) -> Result<Pokemon, RosterError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_pokemon_list(json: &str) -> Result<PokemonListResponse, RosterError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_type_info(json: &str) -> Result<TypeInfo, RosterError> {
    Ok(serde_json::from_str(json)?)
}
