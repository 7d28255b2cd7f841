//! Creature roster entries

use serde::{Deserialize, Serialize};
use teamdex_chart::{TeamMember, TypePair};

use crate::api::Pokemon;
use crate::RosterError;

/// A roster entry as handed to the team store and coverage engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub types: TypePair,
    pub sprite_url: Option<String>,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>, types: TypePair) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            sprite_url: None,
        }
    }

    /// View of this creature for [`teamdex_chart::aggregate_team`]
    pub fn to_member(&self) -> TeamMember {
        TeamMember::new(self.id, self.name.clone(), self.types)
    }
}

impl TryFrom<Pokemon> for Creature {
    type Error = RosterError;

    fn try_from(pokemon: Pokemon) -> Result<Self, Self::Error> {
        let mut slots = pokemon.types;
        slots.sort_by_key(|slot| slot.slot);

        let types = TypePair::parse(slots.iter().map(|slot| slot.kind.name.as_str())).map_err(
            |source| RosterError::InvalidTypes {
                name: pokemon.name.clone(),
                source,
            },
        )?;

        Ok(Self {
            id: pokemon.id,
            sprite_url: pokemon.sprites.preferred().map(str::to_string),
            name: pokemon.name,
            types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NamedResource, PokemonSprites, PokemonTypeSlot};
    use teamdex_chart::{Type, TypeError};

    fn slot(slot: u8, name: &str) -> PokemonTypeSlot {
        PokemonTypeSlot {
            slot,
            kind: NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/type/{name}/"),
            },
        }
    }

    fn pokemon(id: u32, name: &str, types: Vec<PokemonTypeSlot>) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types,
            sprites: PokemonSprites::default(),
        }
    }

    #[test]
    fn test_orders_types_by_slot() {
        let raw = pokemon(6, "charizard", vec![slot(2, "flying"), slot(1, "fire")]);
        let creature = Creature::try_from(raw).unwrap();
        assert_eq!(creature.types.as_slice(), &[Type::Fire, Type::Flying]);
        assert_eq!(creature.sprite_url, None);
    }

    #[test]
    fn test_rejects_missing_types() {
        let raw = pokemon(0, "missingno", Vec::new());
        match Creature::try_from(raw) {
            Err(RosterError::InvalidTypes { name, source }) => {
                assert_eq!(name, "missingno");
                assert_eq!(source, TypeError::Empty);
            }
            other => panic!("expected InvalidTypes, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_type() {
        let raw = pokemon(1, "oddity", vec![slot(1, "stellar")]);
        assert!(matches!(
            Creature::try_from(raw),
            Err(RosterError::InvalidTypes { .. })
        ));
    }

    #[test]
    fn test_to_member() {
        let creature = Creature::new(25, "pikachu", TypePair::single(Type::Electric));
        let member = creature.to_member();
        assert_eq!(member.id, 25);
        assert_eq!(member.name, "pikachu");
        assert_eq!(member.types, creature.types);
    }
}
