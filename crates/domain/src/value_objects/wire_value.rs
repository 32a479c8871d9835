//! Shared behavior of query-parameter enums

use crate::errors::DomainError;

/// An enum whose members map one-to-one onto query-string tokens
///
/// `ALL` lists the members in canonical order. That order is also the
/// `Ord` order of the implementing type, so sets of members serialize
/// deterministically.
pub trait WireValue: Copy + Ord + 'static {
    /// Parameter kind, used in error messages
    const KIND: &'static str;

    /// All members in canonical order
    const ALL: &'static [Self];

    /// The token sent on the wire
    fn as_wire(&self) -> &'static str;

    /// Parse a wire token (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if no member matches.
    fn parse_wire(input: &str) -> Result<Self, DomainError> {
        let token = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_wire().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(Self::as_wire).collect();
                DomainError::invalid_value(Self::KIND, input, &expected)
            })
    }
}
