//! Offline chart, profile and ad hoc team commands

use anyhow::{Context, Result, bail};
use teamdex_chart::{TeamMember, TypePair, aggregate_team, classify, multiplier_by_name};

use crate::render;

pub fn chart(attacker: &str, defender: &str) -> Result<()> {
    let multiplier = multiplier_by_name(attacker, defender)?;
    println!("{} -> {}: {}x", attacker.trim(), defender.trim(), multiplier);
    Ok(())
}

pub fn profile(types: &[String]) -> Result<()> {
    let types = TypePair::parse(types).context("Invalid type combination")?;
    print!("{}", render::profile(&classify(&types)));
    Ok(())
}

pub fn analyze(specs: &[String]) -> Result<()> {
    let members = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| parse_member(i as u32 + 1, spec))
        .collect::<Result<Vec<_>>>()?;

    print!("{}", render::coverage(&aggregate_team(&members), members.len()));
    Ok(())
}

/// Parse `name=type[,type]`
fn parse_member(id: u32, spec: &str) -> Result<TeamMember> {
    let Some((name, types)) = spec.split_once('=') else {
        bail!("Expected name=type[,type], got {spec:?}");
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Missing member name in {spec:?}");
    }

    let types = TypePair::parse(types.split(','))
        .with_context(|| format!("Invalid types for {name}"))?;
    Ok(TeamMember::new(id, name, types))
}
