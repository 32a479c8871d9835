//! reittiolainen CLI
//!
//! Route lookup and geocoding against the Reittiopas journey planner.

use std::io;

use anyhow::Context;
use clap::Parser;
use integration_reittiopas::{GeocodeRequest, ReittiopasClient, TimeType};
use presentation_cli::cli::{Cli, Commands, log_filter_from_verbosity, selection_from};
use presentation_cli::commands;
use presentation_cli::config::AppConfig;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let app_config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let mut client_config = app_config.to_client_config();
    if let Some(format) = cli.format {
        client_config = client_config.with_format(format);
    }
    if let Some(language) = cli.lang {
        client_config = client_config.with_language(language);
    }
    debug!(config = ?client_config, "Configuration loaded");

    let client = ReittiopasClient::new(client_config)?;
    let mut out = io::stdout();

    match cli.command {
        Commands::Geocode {
            term,
            cities,
            location_types,
        } => {
            let mut request = GeocodeRequest::new(term);
            if let Some(cities) = selection_from(cities) {
                request = request.with_cities(cities);
            }
            if let Some(location_types) = selection_from(location_types) {
                request = request.with_location_types(location_types);
            }
            commands::run_geocode(&client, &request, &mut out).await?;
        },

        Commands::Coords { term } => {
            commands::run_coords(&client, &term, &mut out).await?;
        },

        Commands::Route {
            from,
            to,
            via,
            date,
            time,
            arrival,
            transport_types,
            detail,
        } => {
            let mut request = commands::resolve_route(&client, &from, &to, via.as_deref())
                .await?
                .with_detail(detail);
            if let Some(date) = date {
                request = request.with_date(date);
            }
            if let Some(time) = time {
                request = request.with_time(time);
            }
            if arrival {
                request = request.with_time_type(TimeType::Arrival);
            }
            if let Some(transport_types) = selection_from(transport_types) {
                request = request.with_transport_types(transport_types);
            }
            commands::run_route(&client, &request, cli.verbose > 0, &mut out).await?;
        },
    }

    Ok(())
}
