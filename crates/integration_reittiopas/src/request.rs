//! Route and geocode request descriptions
//!
//! A request knows which query parameters it contributes; the shared
//! parameters (`user`, `pass`, `request`, `format`, `lang`) and the
//! percent-encoding are added by [`crate::query`].

use std::sync::LazyLock;

use domain::{
    City, Coordinate, DetailLevel, LocationType, Selection, TimeType, TransportType, WireValue,
};
use regex::Regex;

/// Search terms shaped like a stop number: an optional word character
/// followed by digits, and nothing else (e.g. `1234`, `E4270`)
#[allow(clippy::expect_used)] // Infallible with a valid static pattern
static STOP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w?\d+$").expect("Failed to compile stop number pattern"));

/// A request the journey planner understands
pub trait PlannerRequest {
    /// Value of the `request` parameter
    const KIND: &'static str;

    /// Request-specific parameters in wire order, not yet encoded
    fn params(&self) -> Vec<(&'static str, String)>;
}

/// Itinerary query between two coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Start point
    pub from: Coordinate,
    /// End point
    pub to: Coordinate,
    /// Optional intermediate point
    pub via: Option<Coordinate>,
    /// Date, passed through unvalidated (API format `YYYYMMDD`)
    pub date: Option<String>,
    /// Time, passed through unvalidated (API format `HHMM`)
    pub time: Option<String>,
    /// Whether `time` is a departure or arrival time
    pub time_type: TimeType,
    /// Allowed modes; an empty set is sent as `all`
    pub transport_types: Selection<TransportType>,
    /// Itinerary verbosity
    pub detail: DetailLevel,
}

impl RouteRequest {
    /// Route from `from` to `to` with default options
    #[must_use]
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            via: None,
            date: None,
            time: None,
            time_type: TimeType::default(),
            transport_types: Selection::default(),
            detail: DetailLevel::default(),
        }
    }

    #[must_use]
    pub fn with_via(mut self, via: Coordinate) -> Self {
        self.via = Some(via);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub const fn with_time_type(mut self, time_type: TimeType) -> Self {
        self.time_type = time_type;
        self
    }

    /// Accepts a single `TransportType` or a `Selection`
    #[must_use]
    pub fn with_transport_types(mut self, transport_types: impl Into<Selection<TransportType>>) -> Self {
        self.transport_types = transport_types.into();
        self
    }

    #[must_use]
    pub const fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }
}

impl PlannerRequest for RouteRequest {
    const KIND: &'static str = "route";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("from", self.from.to_string()), ("to", self.to.to_string())];

        if let Some(via) = self.via {
            params.push(("via", via.to_string()));
        }

        if let Some(date) = non_empty(self.date.as_deref()) {
            params.push(("date", date.to_string()));
        }

        if let Some(time) = non_empty(self.time.as_deref()) {
            params.push(("time", time.to_string()));
        }

        params.push(("timetype", self.time_type.as_wire().to_string()));
        params.push(("detail", self.detail.as_wire().to_string()));

        let transport_types = if self.transport_types.is_empty() {
            TransportType::All.as_wire().to_string()
        } else {
            self.transport_types.to_wire()
        };
        params.push(("transport_types", transport_types));

        params
    }
}

/// Address or stop lookup by free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Address, stop name or stop number
    pub search_term: String,
    /// Restrict results to these cities; `None` or empty means no filter
    pub cities: Option<Selection<City>>,
    /// Kinds of location to return; inferred from `search_term` when
    /// `None` or empty
    pub location_types: Option<Selection<LocationType>>,
}

impl GeocodeRequest {
    /// Lookup of `search_term` with no filters
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            cities: None,
            location_types: None,
        }
    }

    /// Accepts a single `City` or a `Selection`
    #[must_use]
    pub fn with_cities(mut self, cities: impl Into<Selection<City>>) -> Self {
        self.cities = Some(cities.into());
        self
    }

    /// Accepts a single `LocationType` or a `Selection`
    #[must_use]
    pub fn with_location_types(mut self, location_types: impl Into<Selection<LocationType>>) -> Self {
        self.location_types = Some(location_types.into());
        self
    }

    /// Location types that will be sent: the supplied ones, or the
    /// inferred one when none were supplied
    #[must_use]
    pub fn effective_location_types(&self) -> Selection<LocationType> {
        match &self.location_types {
            Some(types) if !types.is_empty() => types.clone(),
            _ => Selection::Single(infer_location_type(&self.search_term)),
        }
    }
}

impl PlannerRequest for GeocodeRequest {
    const KIND: &'static str = "geocode";

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("key", self.search_term.clone())];

        if let Some(cities) = self.cities.as_ref().filter(|cities| !cities.is_empty()) {
            params.push(("cities", cities.to_wire()));
        }

        params.push(("location_types", self.effective_location_types().to_wire()));

        params
    }
}

/// Guess whether a search term names a stop (by number) or an address
#[must_use]
pub fn infer_location_type(search_term: &str) -> LocationType {
    if STOP_NUMBER.is_match(search_term) {
        LocationType::Stop
    } else {
        LocationType::Address
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
