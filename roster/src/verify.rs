//! Cross-check remote type data against the built-in chart

use teamdex_chart::{Type, multiplier};

use crate::api::{NamedResource, TypeInfo};
use crate::RosterError;

/// A chart cell that disagrees with the remote damage relations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMismatch {
    pub attacker: Type,
    pub defender: Type,
    pub local: f32,
    pub remote: f32,
}

/// Compare both the offensive row and the defensive column of `info`'s type
/// with [`teamdex_chart::TYPE_CHART`]
///
/// Relations naming types outside the 18 canonical ones are ignored.
pub fn chart_mismatches(info: &TypeInfo) -> Result<Vec<ChartMismatch>, RosterError> {
    let subject: Type = info.name.parse().map_err(|source| RosterError::InvalidTypes {
        name: info.name.clone(),
        source,
    })?;
    let relations = &info.damage_relations;
    let mut mismatches = Vec::new();

    for other in Type::all().iter().copied() {
        let offensive = remote_multiplier(
            other,
            &relations.double_damage_to,
            &relations.half_damage_to,
            &relations.no_damage_to,
        );
        push_if_mismatch(&mut mismatches, subject, other, offensive);

        let defensive = remote_multiplier(
            other,
            &relations.double_damage_from,
            &relations.half_damage_from,
            &relations.no_damage_from,
        );
        // self-matchup is already covered by the offensive pass
        if other != subject {
            push_if_mismatch(&mut mismatches, other, subject, defensive);
        }
    }

    Ok(mismatches)
}

fn remote_multiplier(
    t: Type,
    double: &[NamedResource],
    half: &[NamedResource],
    none: &[NamedResource],
) -> f32 {
    let listed = |list: &[NamedResource]| list.iter().any(|r| Type::from_name(&r.name) == Some(t));
    if listed(none) {
        0.0
    } else if listed(half) {
        0.5
    } else if listed(double) {
        2.0
    } else {
        1.0
    }
}

fn push_if_mismatch(out: &mut Vec<ChartMismatch>, attacker: Type, defender: Type, remote: f32) {
    let local = multiplier(attacker, defender);
    if local != remote {
        out.push(ChartMismatch {
            attacker,
            defender,
            local,
            remote,
        });
    }
}
