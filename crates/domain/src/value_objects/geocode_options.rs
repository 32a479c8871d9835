//! Geocode query options: city filter and location type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WireValue;
use crate::errors::DomainError;

/// City a geocode search is restricted to (`cities`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Espoo,
    Helsinki,
}

impl WireValue for City {
    const KIND: &'static str = "city";
    const ALL: &'static [Self] = &[Self::Espoo, Self::Helsinki];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Espoo => "espoo",
            Self::Helsinki => "helsinki",
        }
    }
}

/// Kind of location a geocode search returns (`location_types`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Public transport stop, looked up by name or stop number
    Stop,
    /// Street address
    Address,
}

impl WireValue for LocationType {
    const KIND: &'static str = "location type";
    const ALL: &'static [Self] = &[Self::Stop, Self::Address];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl FromStr for LocationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_tokens() {
        assert_eq!(City::Espoo.as_wire(), "espoo");
        assert_eq!(City::Helsinki.as_wire(), "helsinki");
    }

    #[test]
    fn test_parse_city() {
        assert_eq!("Helsinki".parse::<City>(), Ok(City::Helsinki));
        assert!("vantaa".parse::<City>().is_err());
    }

    #[test]
    fn test_parse_location_type() {
        assert_eq!("stop".parse::<LocationType>(), Ok(LocationType::Stop));
        assert_eq!("ADDRESS".parse::<LocationType>(), Ok(LocationType::Address));
        assert!("poi".parse::<LocationType>().is_err());
    }
}
