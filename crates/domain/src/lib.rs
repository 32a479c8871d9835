//! Domain layer for reittiolainen
//!
//! Value objects for the Reittiopas journey planner: projected coordinates,
//! the enumerated query parameters and their single-or-set selections.
//! This layer does no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
