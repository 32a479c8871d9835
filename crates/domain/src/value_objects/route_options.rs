//! Route query options: time type, transport type and detail level

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WireValue;
use crate::errors::DomainError;

/// Whether the requested time is a departure or an arrival time (`timetype`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeType {
    /// Leave at the given time
    #[default]
    Departure,
    /// Arrive by the given time
    Arrival,
}

impl WireValue for TimeType {
    const KIND: &'static str = "time type";
    const ALL: &'static [Self] = &[Self::Departure, Self::Arrival];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Arrival => "arrival",
        }
    }
}

/// Mode of transport a route may use (`transport_types`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// Any mode
    #[default]
    All,
    Bus,
    Train,
    Metro,
    Tram,
    /// Service line (palvelulinja)
    Service,
    /// U-line (regional bus)
    Uline,
    Ferry,
    /// Walking only
    Walk,
}

impl WireValue for TransportType {
    const KIND: &'static str = "transport type";
    const ALL: &'static [Self] = &[
        Self::All,
        Self::Bus,
        Self::Train,
        Self::Metro,
        Self::Tram,
        Self::Service,
        Self::Uline,
        Self::Ferry,
        Self::Walk,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Metro => "metro",
            Self::Tram => "tram",
            Self::Service => "service",
            Self::Uline => "uline",
            Self::Ferry => "ferry",
            Self::Walk => "walk",
        }
    }
}

/// Verbosity of the returned itinerary (`detail`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Limited,
    #[default]
    Normal,
    Full,
}

impl WireValue for DetailLevel {
    const KIND: &'static str = "detail level";
    const ALL: &'static [Self] = &[Self::Limited, Self::Normal, Self::Full];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Normal => "normal",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for TimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for TimeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl FromStr for TransportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl FromStr for DetailLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}
