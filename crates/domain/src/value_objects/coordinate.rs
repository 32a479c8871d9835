//! Projected map coordinate value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A point in the journey planner's projected coordinate system
///
/// Values are integer metres (easting, northing). No range validation is
/// performed; any pair is accepted and formatted verbatim as
/// `<easting>,<northing>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    easting: i64,
    northing: i64,
}

impl Coordinate {
    /// Create a coordinate from easting and northing
    #[must_use]
    pub const fn new(easting: i64, northing: i64) -> Self {
        Self { easting, northing }
    }

    /// Get the easting (x)
    #[must_use]
    pub const fn easting(&self) -> i64 {
        self.easting
    }

    /// Get the northing (y)
    #[must_use]
    pub const fn northing(&self) -> i64 {
        self.northing
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((easting, northing): (i64, i64)) -> Self {
        Self::new(easting, northing)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.easting, self.northing)
    }
}

impl FromStr for Coordinate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCoordinate(s.to_string());

        let (easting, northing) = s.split_once(',').ok_or_else(invalid)?;
        let easting = easting.trim().parse().map_err(|_| invalid())?;
        let northing = northing.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(easting, northing))
    }
}
