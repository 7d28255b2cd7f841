//! Roster search helpers

use crate::creature::Creature;

/// Creatures whose name contains `query`, case-insensitively, in roster order
///
/// A blank query matches everything.
pub fn filter_by_name<'a>(query: &str, creatures: &'a [Creature]) -> Vec<&'a Creature> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return creatures.iter().collect();
    }

    creatures
        .iter()
        .filter(|creature| creature.name.to_lowercase().contains(&query))
        .collect()
}

/// Extract the id from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`
pub fn id_from_url(url: &str) -> Option<u32> {
    let (prefix, id) = url.trim_end_matches('/').rsplit_once('/')?;
    if !prefix.ends_with("/pokemon") {
        return None;
    }
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamdex_chart::{Type, TypePair};

    fn roster() -> Vec<Creature> {
        vec![
            Creature::new(4, "charmander", TypePair::single(Type::Fire)),
            Creature::new(5, "charmeleon", TypePair::single(Type::Fire)),
            Creature::new(7, "squirtle", TypePair::single(Type::Water)),
        ]
    }

    #[test]
    fn test_filter_substring() {
        let roster = roster();
        let names: Vec<&str> = filter_by_name("CHARM", &roster)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["charmander", "charmeleon"]);

        let names: Vec<&str> = filter_by_name("tle", &roster)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["squirtle"]);
    }

    #[test]
    fn test_filter_blank_query_returns_all() {
        let roster = roster();
        assert_eq!(filter_by_name("", &roster).len(), 3);
        assert_eq!(filter_by_name("   ", &roster).len(), 3);
    }

    #[test]
    fn test_filter_no_match() {
        let roster = roster();
        assert!(filter_by_name("pika", &roster).is_empty());
    }

    #[test]
    fn test_id_from_url() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/151"), Some(151));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/type/10/"), None);
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/pikachu/"), None);
        assert_eq!(id_from_url(""), None);
    }
}
