//! Response format value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WireValue;
use crate::errors::DomainError;

/// Body format requested from the journey planner (`format` parameter)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON body, decoded into a tree
    #[default]
    Json,
    /// XML body (recognized by the API, no decoder available)
    Xml,
    /// Plain text body, passed through undecoded
    Txt,
}

impl ResponseFormat {
    /// Whether a response in this format can be decoded
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Xml)
    }
}

impl WireValue for ResponseFormat {
    const KIND: &'static str = "format";
    const ALL: &'static [Self] = &[Self::Json, Self::Xml, Self::Txt];

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ResponseFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}
