//! Validated one- or two-type assignments

use std::fmt;

use super::pokemon_type::Type;
use crate::TypeError;

/// The 1 or 2 distinct types of a creature, in slot order
///
/// Slot order has no effect on matchups but is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Type>", into = "Vec<Type>")
)]
pub struct TypePair {
    types: [Type; 2],
    len: usize,
}

impl TypePair {
    /// Pure single-typed pair
    pub fn single(primary: Type) -> Self {
        Self {
            types: [primary, primary],
            len: 1,
        }
    }

    /// Dual-typed pair; both slots must differ
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, TypeError> {
        if primary == secondary {
            return Err(TypeError::Duplicate(primary));
        }
        Ok(Self {
            types: [primary, secondary],
            len: 2,
        })
    }

    /// Build from an ordered slice of 1 or 2 types
    pub fn from_types(types: &[Type]) -> Result<Self, TypeError> {
        match types {
            [] => Err(TypeError::Empty),
            [primary] => Ok(Self::single(*primary)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            _ => Err(TypeError::TooMany(types.len())),
        }
    }

    /// Build from raw type tags such as `["grass", "poison"]`
    pub fn parse<I, S>(names: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_types(&types)
    }

    pub fn primary(&self) -> Type {
        self.types[0]
    }

    pub fn secondary(&self) -> Option<Type> {
        (self.len == 2).then_some(self.types[1])
    }

    pub fn as_slice(&self) -> &[Type] {
        &self.types[..self.len]
    }

    pub fn contains(&self, t: Type) -> bool {
        self.as_slice().contains(&t)
    }
}

impl From<Type> for TypePair {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl TryFrom<Vec<Type>> for TypePair {
    type Error = TypeError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::from_types(&types)
    }
}

impl From<TypePair> for Vec<Type> {
    fn from(pair: TypePair) -> Self {
        pair.as_slice().to_vec()
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary() {
            Some(secondary) => write!(f, "{}/{}", self.primary(), secondary),
            None => write!(f, "{}", self.primary()),
        }
    }
}
