//! Single-or-set parameter values
//!
//! Parameters such as `transport_types`, `cities` and `location_types`
//! accept either one token or several tokens joined with `|`. Members of a
//! set are kept in canonical (`Ord`) order so the joined form is
//! deterministic regardless of insertion order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::WireValue;
use crate::errors::DomainError;

/// Separator between members of a set on the wire
pub const SET_SEPARATOR: &str = "|";

/// One parameter value, or a set of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    /// Exactly one value
    Single(T),
    /// Any number of distinct values, possibly none
    Set(BTreeSet<T>),
}

impl<T: WireValue> Selection<T> {
    /// Build a set selection from any collection of values
    pub fn set(values: impl IntoIterator<Item = T>) -> Self {
        Self::Set(values.into_iter().collect())
    }

    /// True for an empty set; a `Single` is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::Set(values) => values.is_empty(),
        }
    }

    /// Whether `value` is selected
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Single(single) => single == value,
            Self::Set(values) => values.contains(value),
        }
    }

    /// Selected values in canonical order
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        match self {
            Self::Single(single) => vec![*single],
            Self::Set(values) => values.iter().copied().collect(),
        }
    }

    /// Wire form: the single token, or the set's tokens joined with `|`
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Single(single) => single.as_wire().to_string(),
            Self::Set(values) => values
                .iter()
                .map(WireValue::as_wire)
                .collect::<Vec<_>>()
                .join(SET_SEPARATOR),
        }
    }
}

impl<T: WireValue> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Single(value)
    }
}

impl<T: WireValue> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::set(iter)
    }
}

impl<T: WireValue + Default> Default for Selection<T> {
    fn default() -> Self {
        Self::Single(T::default())
    }
}

impl<T: WireValue> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Parses `bus` as `Single(Bus)` and `bus|train` as a set
impl<T: WireValue> FromStr for Selection<T> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(SET_SEPARATOR) {
            return T::parse_wire(s).map(Self::Single);
        }
        s.split(SET_SEPARATOR)
            .map(T::parse_wire)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self::Set)
    }
}
