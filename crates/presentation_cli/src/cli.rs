//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use integration_reittiopas::{
    City, DetailLevel, Language, LocationType, ResponseFormat, Selection, TransportType,
    WireValue,
};

/// reittiolainen
#[derive(Debug, Parser)]
#[command(name = "reittiolainen")]
#[command(author, version, about = "Command line client for the Reittiopas journey planner", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: reittiolainen.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Response format: json, xml or txt (overrides the configuration)
    #[arg(short, long, global = true)]
    pub format: Option<ResponseFormat>,

    /// Response language: fi, sv, en or slangi (overrides the configuration)
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up addresses or stops matching a search term
    ///
    /// Example: reittiolainen geocode "Tekniikantie 14, Espoo"
    Geocode {
        /// Address, stop name or stop number
        term: String,

        /// Restrict to a city (repeatable): espoo, helsinki
        #[arg(long = "city")]
        cities: Vec<City>,

        /// Location type (repeatable): stop, address. Inferred when omitted.
        #[arg(long = "location-type")]
        location_types: Vec<LocationType>,
    },

    /// Print the coordinate of the best match for a search term
    Coords {
        /// Address, stop name or stop number
        term: String,
    },

    /// Find routes between two points
    ///
    /// Points are either coordinates (`2545972,6674578`) or search terms,
    /// which are geocoded first.
    /// Example: reittiolainen route --from "Tekniikantie 14, Espoo" --to 2551796,6673513
    Route {
        /// Start point
        #[arg(long)]
        from: String,

        /// End point
        #[arg(long)]
        to: String,

        /// Intermediate point
        #[arg(long)]
        via: Option<String>,

        /// Date as YYYYMMDD (API default when omitted)
        #[arg(long)]
        date: Option<String>,

        /// Time as HHMM (API default when omitted)
        #[arg(long)]
        time: Option<String>,

        /// Treat --time as the arrival time instead of the departure time
        #[arg(long)]
        arrival: bool,

        /// Allowed transport type (repeatable): all, bus, train, metro, tram, service, uline, ferry, walk
        #[arg(long = "transport")]
        transport_types: Vec<TransportType>,

        /// Itinerary detail: limited, normal, full
        #[arg(long, default_value = "normal")]
        detail: DetailLevel,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// No values means "not given", one value is a single token, more form a set
pub fn selection_from<T: WireValue>(values: Vec<T>) -> Option<Selection<T>> {
    if values.len() > 1 {
        Some(Selection::set(values))
    } else {
        values.first().copied().map(Selection::Single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn selection_from_empty_is_none() {
        assert_eq!(selection_from::<City>(vec![]), None);
    }

    #[test]
    fn selection_from_one_is_single() {
        assert_eq!(
            selection_from(vec![TransportType::Bus]),
            Some(Selection::Single(TransportType::Bus))
        );
    }

    #[test]
    fn selection_from_many_is_set() {
        let selection = selection_from(vec![TransportType::Train, TransportType::Bus]).unwrap();
        assert_eq!(selection.to_wire(), "bus|train");
    }
}
