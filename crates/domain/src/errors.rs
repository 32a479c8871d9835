//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A token does not name any member of the expected parameter set
    #[error("Invalid {kind}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        /// Parameter kind (e.g. "language")
        kind: &'static str,
        /// The rejected input
        value: String,
        /// Accepted tokens, comma-separated
        expected: String,
    },

    /// Coordinate text is not of the form `<easting>,<northing>`
    #[error("Invalid coordinate: '{0}' (expected <easting>,<northing>)")]
    InvalidCoordinate(String),
}

impl DomainError {
    /// Create an invalid value error listing the accepted tokens
    pub fn invalid_value(kind: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}
