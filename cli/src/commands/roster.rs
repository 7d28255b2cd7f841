//! Roster browsing and chart verification

use std::path::Path;

use anyhow::{Context, Result};
use teamdex_chart::Type;
use teamdex_client::PokeClient;
use teamdex_roster::{Creature, FixtureRoster, RosterProvider, chart_mismatches, filter_by_name};

use crate::config::Config;
use crate::render;

pub async fn list(
    config: &Config,
    limit: Option<usize>,
    search: Option<&str>,
    fixture: Option<&Path>,
) -> Result<()> {
    let limit = limit.unwrap_or_else(|| config.roster_limit());
    let roster = load(config, limit, fixture).await?;
    let matches = filter_by_name(search.unwrap_or(""), &roster);

    for creature in &matches {
        println!("{}", render::creature_line(creature));
    }
    println!("{} of {} shown", matches.len(), roster.len());
    Ok(())
}

/// Load the roster from a fixture file, or from PokeAPI
pub async fn load(config: &Config, limit: usize, fixture: Option<&Path>) -> Result<Vec<Creature>> {
    match fixture {
        Some(path) => {
            let roster = FixtureRoster::from_file(path)
                .with_context(|| format!("Failed to load roster fixture {}", path.display()))?;
            roster.fetch_roster(limit).await
        }
        None => {
            let client = PokeClient::new(config.client_config())?;
            client
                .fetch_roster(limit)
                .await
                .context("Failed to load roster from PokeAPI")
        }
    }
}

pub async fn verify_chart(config: &Config, types: &[String]) -> Result<()> {
    let types = if types.is_empty() {
        Type::all().to_vec()
    } else {
        types
            .iter()
            .map(|name| name.parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let client = PokeClient::new(config.client_config())?;
    let mut total = 0;

    for t in types {
        let info = client
            .fetch_type(t.as_str())
            .await
            .with_context(|| format!("Failed to fetch type {t}"))?;

        for mismatch in chart_mismatches(&info)? {
            total += 1;
            println!(
                "{} -> {}: chart {}x, PokeAPI {}x",
                mismatch.attacker, mismatch.defender, mismatch.local, mismatch.remote
            );
        }
        tracing::info!(kind = %t, "Checked damage relations");
    }

    if total == 0 {
        println!("Chart matches PokeAPI");
    }
    Ok(())
}
