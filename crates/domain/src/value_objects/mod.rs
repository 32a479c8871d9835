//! Value objects for the journey planner's query parameters

mod coordinate;
mod geocode_options;
mod language;
mod response_format;
mod route_options;
mod selection;
mod wire_value;

pub use coordinate::Coordinate;
pub use geocode_options::{City, LocationType};
pub use language::Language;
pub use response_format::ResponseFormat;
pub use route_options::{DetailLevel, TimeType, TransportType};
pub use selection::{SET_SEPARATOR, Selection};
pub use wire_value::WireValue;
