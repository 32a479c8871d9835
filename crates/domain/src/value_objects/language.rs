//! Response language value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WireValue;
use crate::errors::DomainError;

/// Language of names and instructions in responses (`lang` parameter)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Finnish
    #[default]
    Fi,
    /// Swedish
    Sv,
    /// English
    En,
    /// Helsinki slang
    Slangi,
}

impl WireValue for Language {
    const KIND: &'static str = "language";
    const ALL: &'static [Self] = &[Self::Fi, Self::Sv, Self::En, Self::Slangi];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Fi => "fi",
            Self::Sv => "sv",
            Self::En => "en",
            Self::Slangi => "slangi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}
