//! Team command handlers
//!
//! Every command loads the team file, applies one change, saves it back and
//! prints the resulting team with freshly computed coverage.

use std::path::Path;

use anyhow::{Context, Result, bail};
use teamdex_client::PokeClient;
use teamdex_roster::{Creature, FixtureRoster};
use teamdex_team::Team;

use crate::cli::TeamCommand;
use crate::config::Config;
use crate::render;

pub async fn handle(config: &Config, command: TeamCommand) -> Result<()> {
    let path = config.team_path()?;

    if let TeamCommand::Show = command {
        show(&Team::load_or_default(&path));
        return Ok(());
    }

    // a team file that fails to load is never overwritten
    let mut team = Team::load(&path)
        .with_context(|| format!("Failed to load team from {}", path.display()))?;
    apply(config, &mut team, command).await?;

    team.save(&path)
        .with_context(|| format!("Failed to save team to {}", path.display()))?;
    show(&team);
    Ok(())
}

async fn apply(config: &Config, team: &mut Team, command: TeamCommand) -> Result<()> {
    match command {
        TeamCommand::Show => {}

        TeamCommand::Add { creature, fixture } => {
            let creature = resolve(config, &creature, fixture.as_deref()).await?;
            let name = creature.name.clone();
            team.add(creature)
                .with_context(|| format!("Cannot add {name}"))?;
            println!("Added {name}");
        }

        TeamCommand::Remove { id } => match team.remove(id) {
            Some(removed) => println!("Removed {}", removed.name),
            None => bail!("No team member with id {id}"),
        },

        TeamCommand::Move { from, to } => {
            let (from, to) = (slot_index(from)?, slot_index(to)?);
            team.reorder(from, to)?;
        }

        TeamCommand::Clear => team.clear(),
    }
    Ok(())
}

fn show(team: &Team) {
    print!("{}", render::team(team.members()));
    println!();
    print!("{}", render::coverage(&team.coverage(), team.len()));
}

/// Convert a 1-based slot number into an index
fn slot_index(slot: usize) -> Result<usize> {
    slot.checked_sub(1).context("Slots start at 1")
}

/// Find a creature by name or dex number
async fn resolve(config: &Config, query: &str, fixture: Option<&Path>) -> Result<Creature> {
    match fixture {
        Some(path) => {
            let roster = FixtureRoster::from_file(path)?;
            find(roster.creatures(), query)
                .cloned()
                .with_context(|| format!("{query} is not in {}", path.display()))
        }
        None => {
            let client = PokeClient::new(config.client_config())?;
            client.fetch_pokemon(query).await
        }
    }
}

fn find<'a>(creatures: &'a [Creature], query: &str) -> Option<&'a Creature> {
    let query = query.trim();
    match query.parse::<u32>() {
        Ok(id) => creatures.iter().find(|c| c.id == id),
        Err(_) => creatures.iter().find(|c| c.name.eq_ignore_ascii_case(query)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../roster/fixtures/kanto.json")
    }

    fn config_for(dir: &tempfile::TempDir) -> Config {
        Config {
            team_file: Some(dir.path().join("team.json")),
            ..Config::default()
        }
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index(1).unwrap(), 0);
        assert!(slot_index(0).is_err());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let roster = FixtureRoster::from_file(&fixture_path()).unwrap();
        assert_eq!(find(roster.creatures(), "Pikachu").unwrap().id, 25);
        assert_eq!(find(roster.creatures(), "143").unwrap().name, "snorlax");
        assert!(find(roster.creatures(), "mew").is_none());
    }

    #[tokio::test]
    async fn test_add_move_remove_persist() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir);
        let fixture = Some(fixture_path());

        for name in ["charmander", "squirtle", "bulbasaur"] {
            let command = TeamCommand::Add {
                creature: name.to_string(),
                fixture: fixture.clone(),
            };
            handle(&config, command).await.unwrap();
        }

        handle(&config, TeamCommand::Move { from: 3, to: 1 }).await.unwrap();
        handle(&config, TeamCommand::Remove { id: 7 }).await.unwrap();

        let team = Team::load(&config.team_path().unwrap()).unwrap();
        let names: Vec<&str> = team.members().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "charmander"]);
    }

    #[tokio::test]
    async fn test_add_duplicate_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir);
        let add = || TeamCommand::Add {
            creature: "25".to_string(),
            fixture: Some(fixture_path()),
        };

        handle(&config, add()).await.unwrap();
        assert!(handle(&config, add()).await.is_err());
        assert_eq!(Team::load(&config.team_path().unwrap()).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_team_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir);
        let path = config.team_path().unwrap();
        let saved = r#"[
  {"id": 1, "name": "bulbasaur", "types": ["grass", "poison"], "sprite_url": null},
  {"id": 1024, "name": "terapagos", "types": ["stellar"], "sprite_url": null}
]"#;
        std::fs::write(&path, saved).unwrap();

        for command in [
            TeamCommand::Add {
                creature: "pikachu".to_string(),
                fixture: Some(fixture_path()),
            },
            TeamCommand::Remove { id: 1 },
            TeamCommand::Move { from: 1, to: 2 },
            TeamCommand::Clear,
        ] {
            assert!(handle(&config, command).await.is_err());
            assert_eq!(std::fs::read_to_string(&path).unwrap(), saved);
        }

        handle(&config, TeamCommand::Show).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), saved);
    }

    #[tokio::test]
    async fn test_remove_missing_member_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir);
        assert!(handle(&config, TeamCommand::Remove { id: 1 }).await.is_err());
    }
}
