//! Domain types for type matchups

mod member;
mod pokemon_type;
mod type_pair;

pub use member::TeamMember;
pub use pokemon_type::{TYPE_CHART, TYPE_COUNT, Type, multiplier, multiplier_by_name};
pub use type_pair::TypePair;
