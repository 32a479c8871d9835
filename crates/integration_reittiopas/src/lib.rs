//! Reittiopas journey planner integration
//!
//! Client for the [Reittiopas](http://api.reittiopas.fi) HSL journey
//! planner API: route lookup between projected coordinates and
//! address/stop geocoding.
//!
//! # Architecture
//!
//! Requests are plain values ([`RouteRequest`], [`GeocodeRequest`]). The
//! [`query`] module turns a request plus a [`ClientConfig`] into the final
//! URL without any I/O. [`ReittiopasClient`] implements [`JourneyPlanner`]:
//! it performs one GET per call and decodes the body into an
//! [`ApiResponse`] according to the configured [`ResponseFormat`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_reittiopas::{ClientConfig, GeocodeRequest, JourneyPlanner, ReittiopasClient};
//!
//! let config = ClientConfig::new("http://api.reittiopas.fi/hsl/prod/", "user", "pass");
//! let client = ReittiopasClient::new(config)?;
//!
//! let locations = client
//!     .geocode(&GeocodeRequest::new("Tekniikantie 14, Espoo"))
//!     .await?
//!     .locations()?;
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod query;
mod request;

pub use client::{JourneyPlanner, ReittiopasClient};
pub use config::ClientConfig;
pub use domain::{
    City, Coordinate, DetailLevel, Language, LocationType, ResponseFormat, Selection, TimeType,
    TransportType, WireValue,
};
pub use error::ReittiopasError;
pub use models::{ApiResponse, Itinerary, Leg, Location, RouteSegment};
pub use request::{GeocodeRequest, PlannerRequest, RouteRequest, infer_location_type};
