use std::io::Write;

use teamdex_chart::{Type, aggregate_team};

use crate::{
    Creature, FixtureRoster, RosterError, RosterProvider, parse_pokemon, parse_pokemon_list,
    parse_type_info,
};

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "height": 4,
    "weight": 60,
    "types": [
        { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
    ],
    "sprites": {
        "front_default": "https://example.test/25.png",
        "front_shiny": null,
        "back_default": null,
        "back_shiny": null,
        "other": {
            "official-artwork": { "front_default": "https://example.test/art/25.png", "front_shiny": null },
            "showdown": { "front_default": null, "front_shiny": null }
        }
    },
    "stats": [
        { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } }
    ],
    "abilities": [
        { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 }
    ],
    "base_experience": 112
}"#;

#[test]
fn test_parse_pokemon() {
    let pokemon = parse_pokemon(PIKACHU).unwrap();
    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");

    let creature = Creature::try_from(pokemon).unwrap();
    assert_eq!(creature.types.as_slice(), &[Type::Electric]);
    assert_eq!(
        creature.sprite_url.as_deref(),
        Some("https://example.test/art/25.png")
    );
}

#[test]
fn test_sprite_falls_back_to_front_default() {
    let json = r#"{
        "id": 133, "name": "eevee",
        "types": [{ "slot": 1, "type": { "name": "normal", "url": "" } }],
        "sprites": { "front_default": "https://example.test/133.png" }
    }"#;
    let creature = Creature::try_from(parse_pokemon(json).unwrap()).unwrap();
    assert_eq!(creature.sprite_url.as_deref(), Some("https://example.test/133.png"));
}

#[test]
fn test_parse_pokemon_invalid() {
    assert!(matches!(parse_pokemon("{"), Err(RosterError::Json(_))));
    assert!(parse_pokemon(r#"{ "id": 1 }"#).is_err());
}

#[test]
fn test_parse_pokemon_list() {
    let json = r#"{
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
        "previous": null,
        "results": [
            { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
            { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
        ]
    }"#;
    let list = parse_pokemon_list(json).unwrap();
    assert_eq!(list.count, 1302);
    assert_eq!(list.previous, None);
    assert_eq!(list.results[1].name, "ivysaur");
}

#[test]
fn test_parse_type_info() {
    let json = r#"{
        "id": 10,
        "name": "fire",
        "damage_relations": {
            "double_damage_to": [{ "name": "grass", "url": "" }],
            "no_damage_from": []
        }
    }"#;
    let info = parse_type_info(json).unwrap();
    assert_eq!(info.name, "fire");
    assert_eq!(info.damage_relations.double_damage_to[0].name, "grass");
    assert!(info.damage_relations.half_damage_to.is_empty());
}

#[test]
fn test_fixture_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/kanto.json");
    let roster = FixtureRoster::from_file(&path).unwrap();
    assert_eq!(roster.creatures()[0].name, "bulbasaur");
    assert!(roster.creatures().iter().all(|c| c.sprite_url.is_some()));
}

#[test]
fn test_fixture_from_tempfile() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{PIKACHU}]").unwrap();

    let roster = FixtureRoster::from_file(file.path()).unwrap();
    assert_eq!(roster.creatures().len(), 1);
    assert_eq!(roster.creatures()[0].name, "pikachu");
}

#[test]
fn test_fixture_missing_file() {
    let result = FixtureRoster::from_file(std::path::Path::new("/nonexistent/roster.json"));
    assert!(matches!(result, Err(RosterError::Io { .. })));
}

#[tokio::test]
async fn test_fixture_provider_feeds_engine() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/kanto.json");
    let roster = FixtureRoster::from_file(&path).unwrap();

    let first_three = roster.fetch_roster(3).await.unwrap();
    let names: Vec<&str> = first_three.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "charmander", "charizard"]);

    let members: Vec<_> = first_three.iter().map(Creature::to_member).collect();
    let coverage = aggregate_team(&members);
    assert_eq!(coverage.weakness_count(Type::Rock), 2);
    assert_eq!(coverage.resistance_count(Type::Fire), 2);
    assert_eq!(coverage.immunities[&Type::Ground], vec!["charizard".to_string()]);
}
