//! Plain-text rendering of engine results

use std::fmt::Write;

use teamdex_chart::{DefensiveProfile, TeamCoverage, Type, TypeTally};
use teamdex_roster::Creature;

fn multiplier_label(multiplier: f32) -> String {
    if multiplier == 0.25 {
        "¼x".to_string()
    } else if multiplier == 0.5 {
        "½x".to_string()
    } else {
        format!("{multiplier}x")
    }
}

fn type_list(types: &[Type]) -> String {
    let names: Vec<&str> = types.iter().map(Type::display_name).collect();
    names.join(", ")
}

pub fn profile(profile: &DefensiveProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", profile.types);

    let _ = writeln!(out, "Weaknesses:");
    if profile.weaknesses.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for (t, multiplier) in &profile.weaknesses {
        let _ = writeln!(out, "  {:<9} {}", t.display_name(), multiplier_label(*multiplier));
    }

    let _ = writeln!(out, "Resistances:");
    if profile.resistances.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for (t, multiplier) in &profile.resistances {
        let _ = writeln!(out, "  {:<9} {}", t.display_name(), multiplier_label(*multiplier));
    }

    if !profile.immunities.is_empty() {
        let _ = writeln!(out, "Immune to: {}", type_list(&profile.immunities));
    }

    out
}

fn tally_section(out: &mut String, title: &str, tallies: &[(Type, &TypeTally)], empty: &str) {
    let _ = writeln!(out, "{title}:");
    if tallies.is_empty() {
        let _ = writeln!(out, "  {empty}");
    }
    for (t, tally) in tallies {
        let _ = writeln!(
            out,
            "  {:<9} x{}  ({})",
            t.display_name(),
            tally.count(),
            tally.members.join(", ")
        );
    }
}

pub fn coverage(coverage: &TeamCoverage, team_size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Type Coverage ===");

    if team_size == 0 {
        let _ = writeln!(out, "Add Pokemon to see type analysis");
        return out;
    }

    tally_section(&mut out, "Weaknesses", &coverage.weaknesses_by_count(), "No weaknesses");
    tally_section(&mut out, "Resistances", &coverage.resistances_by_count(), "No resistances");

    if !coverage.immunities.is_empty() {
        let _ = writeln!(out, "Immunities:");
        for (t, members) in &coverage.immunities {
            let _ = writeln!(out, "  {:<9} ({})", t.display_name(), members.join(", "));
        }
    }

    if !coverage.coverage_gaps.is_empty() {
        let _ = writeln!(out, "Coverage gaps (no member resists these types):");
        let _ = writeln!(out, "  {}", type_list(&coverage.coverage_gaps));
    }

    out
}

pub fn creature_line(creature: &Creature) -> String {
    format!("#{:<4} {:<14} {}", creature.id, creature.name, creature.types)
}

pub fn team(members: &[Creature]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Team ({}/{}) ===", members.len(), teamdex_team::MAX_TEAM_SIZE);
    for (slot, creature) in members.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", slot + 1, creature_line(creature));
    }
    out
}
