//! Subcommand handlers
//!
//! Handlers take any [`JourneyPlanner`] and write to any [`Write`], so they
//! run the same against the live API, a mock, or a buffer.

use std::io::Write;

use anyhow::{Context, anyhow};
use integration_reittiopas::{
    ApiResponse, Coordinate, GeocodeRequest, Itinerary, JourneyPlanner, RouteRequest,
};
use tracing::{debug, info};

/// Resolve a route point given as `e,n` or as a search term
///
/// # Errors
///
/// Fails if geocoding fails or nothing matches the search term.
pub async fn resolve_point<P: JourneyPlanner + ?Sized>(
    planner: &P,
    input: &str,
) -> anyhow::Result<Coordinate> {
    if let Ok(coord) = input.parse::<Coordinate>() {
        return Ok(coord);
    }

    let coord = planner
        .geocode_coords(input)
        .await
        .with_context(|| format!("failed to geocode '{input}'"))?
        .ok_or_else(|| anyhow!("no location found for '{input}'"))?;

    info!(%coord, input, "Resolved route point");
    Ok(coord)
}

/// Build a route request, geocoding any point that is not a coordinate
///
/// # Errors
///
/// Fails if any of the points cannot be resolved.
pub async fn resolve_route<P: JourneyPlanner + ?Sized>(
    planner: &P,
    from: &str,
    to: &str,
    via: Option<&str>,
) -> anyhow::Result<RouteRequest> {
    let from = resolve_point(planner, from).await?;
    let to = resolve_point(planner, to).await?;

    let mut request = RouteRequest::new(from, to);
    if let Some(via) = via {
        request = request.with_via(resolve_point(planner, via).await?);
    }
    Ok(request)
}

/// `geocode`: print the decoded response
///
/// # Errors
///
/// Fails if the request fails or output cannot be written.
pub async fn run_geocode<P: JourneyPlanner + ?Sized, W: Write>(
    planner: &P,
    request: &GeocodeRequest,
    out: &mut W,
) -> anyhow::Result<()> {
    let response = planner
        .geocode(request)
        .await
        .context("geocode request failed")?;
    write_response(&response, out)
}

/// `coords`: print the best match as `e,n`
///
/// # Errors
///
/// Fails if the request fails or nothing matched.
pub async fn run_coords<P: JourneyPlanner + ?Sized, W: Write>(
    planner: &P,
    term: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let coord = planner
        .geocode_coords(term)
        .await
        .context("geocode request failed")?
        .ok_or_else(|| anyhow!("no location found for '{term}'"))?;

    writeln!(out, "{coord}")?;
    Ok(())
}

/// `route`: print one summary line per alternative
///
/// Text responses are printed as-is. With `verbose`, the JSON tree follows
/// the summary.
///
/// # Errors
///
/// Fails if the request fails, the JSON is not a list of itineraries, or
/// output cannot be written.
pub async fn run_route<P: JourneyPlanner + ?Sized, W: Write>(
    planner: &P,
    request: &RouteRequest,
    verbose: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let response = planner
        .route(request)
        .await
        .context("route request failed")?;

    if response.as_bytes().is_some() {
        return write_response(&response, out);
    }

    let itineraries = response.itineraries()?;
    debug!(alternatives = itineraries.len(), "Route response decoded");
    if itineraries.is_empty() {
        writeln!(out, "No routes found")?;
    }
    for (index, itinerary) in itineraries.iter().enumerate() {
        writeln!(out, "{}", format_itinerary(index + 1, itinerary))?;
    }

    if verbose {
        write_response(&response, out)?;
    }
    Ok(())
}

/// One line per alternative, e.g. `1. 22 min, 6.2 km: walk -> 2 -> walk`
#[must_use]
pub fn format_itinerary(number: usize, itinerary: &Itinerary) -> String {
    let seconds: f64 = itinerary.iter().filter_map(|s| s.duration).sum();
    let metres: f64 = itinerary.iter().filter_map(|s| s.length).sum();
    let legs = itinerary
        .iter()
        .flat_map(|segment| segment.leg_types())
        .collect::<Vec<_>>()
        .join(" -> ");

    format!(
        "{number}. {:.0} min, {:.1} km: {legs}",
        seconds / 60.0,
        metres / 1000.0
    )
}

fn write_response<W: Write>(response: &ApiResponse, out: &mut W) -> anyhow::Result<()> {
    match response {
        ApiResponse::Json(value) => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        ApiResponse::Text(body) => out.write_all(body)?,
    }
    Ok(())
}
