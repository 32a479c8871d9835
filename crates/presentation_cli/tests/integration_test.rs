//! Integration tests for CLI
//!
//! These tests verify argument parsing without running any commands.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use integration_reittiopas::{
    City, DetailLevel, Language, LocationType, ResponseFormat, TransportType,
};
use presentation_cli::cli::{Cli, Commands, selection_from};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_geocode_command() {
    let cli = parse_args(&["reittiolainen", "geocode", "Tekniikantie 14, Espoo"]).unwrap();
    if let Commands::Geocode {
        term,
        cities,
        location_types,
    } = cli.command
    {
        assert_eq!(term, "Tekniikantie 14, Espoo");
        assert!(cities.is_empty());
        assert!(location_types.is_empty());
    } else {
        panic!("Expected Geocode command");
    }
}

#[test]
fn cli_parses_geocode_filters() {
    let cli = parse_args(&[
        "reittiolainen",
        "geocode",
        "Kamppi",
        "--city",
        "helsinki",
        "--city",
        "espoo",
        "--location-type",
        "stop",
    ])
    .unwrap();
    if let Commands::Geocode {
        cities,
        location_types,
        ..
    } = cli.command
    {
        assert_eq!(cities, vec![City::Helsinki, City::Espoo]);
        assert_eq!(location_types, vec![LocationType::Stop]);
        assert_eq!(selection_from(cities).unwrap().to_wire(), "espoo|helsinki");
    } else {
        panic!("Expected Geocode command");
    }
}

#[test]
fn cli_rejects_unknown_city() {
    let result = parse_args(&["reittiolainen", "geocode", "Kamppi", "--city", "tampere"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_coords_command() {
    let cli = parse_args(&["reittiolainen", "coords", "1234"]).unwrap();
    if let Commands::Coords { term } = cli.command {
        assert_eq!(term, "1234");
    } else {
        panic!("Expected Coords command");
    }
}

#[test]
fn cli_parses_route_defaults() {
    let cli = parse_args(&[
        "reittiolainen",
        "route",
        "--from",
        "2545972,6674578",
        "--to",
        "Kamppi",
    ])
    .unwrap();
    if let Commands::Route {
        from,
        to,
        via,
        date,
        time,
        arrival,
        transport_types,
        detail,
    } = cli.command
    {
        assert_eq!(from, "2545972,6674578");
        assert_eq!(to, "Kamppi");
        assert_eq!(via, None);
        assert_eq!(date, None);
        assert_eq!(time, None);
        assert!(!arrival);
        assert!(transport_types.is_empty());
        assert_eq!(detail, DetailLevel::Normal);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_parses_route_options() {
    let cli = parse_args(&[
        "reittiolainen",
        "route",
        "--from",
        "1,2",
        "--to",
        "3,4",
        "--via",
        "Pasila",
        "--date",
        "20240115",
        "--time",
        "0830",
        "--arrival",
        "--transport",
        "bus",
        "--transport",
        "METRO",
        "--detail",
        "full",
    ])
    .unwrap();
    if let Commands::Route {
        via,
        date,
        time,
        arrival,
        transport_types,
        detail,
        ..
    } = cli.command
    {
        assert_eq!(via.as_deref(), Some("Pasila"));
        assert_eq!(date.as_deref(), Some("20240115"));
        assert_eq!(time.as_deref(), Some("0830"));
        assert!(arrival);
        assert_eq!(transport_types, vec![TransportType::Bus, TransportType::Metro]);
        assert_eq!(detail, DetailLevel::Full);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_route_requires_endpoints() {
    assert!(parse_args(&["reittiolainen", "route", "--from", "1,2"]).is_err());
    assert!(parse_args(&["reittiolainen", "route", "--to", "1,2"]).is_err());
}

#[test]
fn cli_parses_global_options() {
    let cli = parse_args(&[
        "reittiolainen",
        "coords",
        "Kamppi",
        "--format",
        "txt",
        "--lang",
        "sv",
        "--config",
        "/etc/reittiolainen.toml",
    ])
    .unwrap();
    assert_eq!(cli.format, Some(ResponseFormat::Txt));
    assert_eq!(cli.lang, Some(Language::Sv));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/reittiolainen.toml")));
}

#[test]
fn cli_global_options_default_to_none() {
    let cli = parse_args(&["reittiolainen", "coords", "Kamppi"]).unwrap();
    assert_eq!(cli.format, None);
    assert_eq!(cli.lang, None);
    assert_eq!(cli.config, None);
}

#[test]
fn cli_accepts_xml_format() {
    // Rejected by the client before any request, not by the parser
    let cli = parse_args(&["reittiolainen", "-f", "xml", "coords", "Kamppi"]).unwrap();
    assert_eq!(cli.format, Some(ResponseFormat::Xml));
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(parse_args(&["reittiolainen", "--format", "yaml", "coords", "Kamppi"]).is_err());
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["reittiolainen", "-v", "coords", "Kamppi"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["reittiolainen", "coords", "Kamppi", "-vvv"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_requires_subcommand() {
    let result = parse_args(&["reittiolainen"]);
    assert!(result.is_err());
}

#[test]
fn cli_geocode_requires_term() {
    let result = parse_args(&["reittiolainen", "geocode"]);
    assert!(result.is_err());
}

#[test]
fn cli_help_flag() {
    let result = parse_args(&["reittiolainen", "--help"]);
    assert!(result.is_err()); // clap returns Err for --help
}

#[test]
fn cli_version_flag() {
    let result = parse_args(&["reittiolainen", "--version"]);
    assert!(result.is_err()); // clap returns Err for --version
}

#[test]
fn cli_route_help_leaves_date_and_time_defaults_to_the_api() {
    let help = parse_args(&["reittiolainen", "route", "--help"])
        .unwrap_err()
        .to_string();
    assert!(help.contains("API default when omitted"));
    assert!(!help.contains("default: today"));
    assert!(!help.contains("default: now"));
}
