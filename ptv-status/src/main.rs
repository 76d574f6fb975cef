use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ptv_status::config::{
    ConfigError, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEZONE, PtvConfig, parse_timezone,
};
use ptv_status::departures::SelectError;
use ptv_status::output::{DepartureRow, to_fields, to_json};
use ptv_status::ptv::{PtvClient, PtvError};
use ptv_status::service::{
    DeparturesQuery, ServiceError, find_directions, find_routes, find_stops, next_departures,
};

/// Next departures from the PTV Timetable API.
#[derive(Parser, Debug)]
#[command(name = "ptv-status", version, about)]
struct Cli {
    /// PTV developer ID
    #[arg(long, env = "PTV_DEVID", hide_env_values = true)]
    dev_id: Option<String>,

    /// PTV developer key
    #[arg(long, env = "PTV_KEY", hide_env_values = true)]
    key: Option<String>,

    /// API origin
    #[arg(long, env = "PTV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log signed request URLs at debug level
    #[arg(
        long,
        env = "PTV_LOG_URLS",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    log_urls: bool,

    /// Print only these fields, e.g. "route_id route_name"
    #[arg(long, global = true)]
    format: Option<String>,

    /// Separator between formatted fields
    #[arg(long, global = true, default_value = " ")]
    delimiter: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List train routes, optionally filtered by name
    Routes {
        /// Text contained in the route name
        name: Option<String>,
    },

    /// List stops on a route
    Stops {
        /// Route name
        route: String,

        /// Text contained in the stop name
        #[arg(long)]
        stop: Option<String>,
    },

    /// List directions of travel on a route
    Directions {
        /// Route name
        route: String,
    },

    /// Show the next departures from a stop in one direction
    Departures {
        /// Route name, e.g. Belgrave
        #[arg(long)]
        route: String,

        /// Stop name, e.g. Bayswater
        #[arg(long)]
        stop: String,

        /// Direction name, e.g. City
        #[arg(long)]
        direction: String,

        /// Number of departures; all remaining if omitted
        #[arg(long)]
        count: Option<usize>,

        /// IANA timezone for displayed times
        #[arg(long, default_value = DEFAULT_TIMEZONE)]
        timezone: String,

        /// Extra query string for the departures request, e.g. "?expand=All"
        #[arg(long, default_value = "")]
        extra_query: String,

        /// File overwritten with the raw departures on every run
        #[arg(long, default_value = "output.json")]
        snapshot: PathBuf,

        /// Skip writing the raw departures snapshot
        #[arg(long)]
        no_snapshot: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ptv(#[from] PtvError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let credentials = Credentials::from_parts(cli.dev_id, cli.key)?;
    let config = PtvConfig::new(credentials)
        .with_base_url(cli.base_url)
        .with_signed_url_logging(cli.log_urls);
    let client = PtvClient::new(config)?;

    let format = cli.format.as_deref().filter(|f| !f.trim().is_empty());

    match cli.command {
        Command::Routes { name } => {
            let routes = find_routes(&client, name.as_deref().unwrap_or("")).await?;
            Ok(render_items(&routes, format, &cli.delimiter)?)
        }
        Command::Stops { route, stop } => {
            let stops = find_stops(&client, &route, stop.as_deref().unwrap_or("")).await?;
            Ok(render_items(&stops, format, &cli.delimiter)?)
        }
        Command::Directions { route } => {
            let directions = find_directions(&client, &route).await?;
            Ok(render_items(&directions, format, &cli.delimiter)?)
        }
        Command::Departures {
            route,
            stop,
            direction,
            count,
            timezone,
            extra_query,
            snapshot,
            no_snapshot,
        } => {
            let tz = parse_timezone(&timezone)?;

            let mut query = DeparturesQuery::new(route, stop, direction, count.unwrap_or(usize::MAX))
                .with_extra_query(extra_query);
            if !no_snapshot {
                query = query.with_snapshot(snapshot);
            }

            let selected = next_departures(&client, &query, Utc::now()).await?;
            info!(count = selected.len(), "Selected departures");

            let rows = selected
                .iter()
                .map(|s| DepartureRow::localize(s, tz))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(render_items(&rows, format, &cli.delimiter)?)
        }
    }
}

fn render_items<T: serde::Serialize>(
    items: &[T],
    format: Option<&str>,
    delimiter: &str,
) -> Result<String, serde_json::Error> {
    match format {
        Some(format) => to_fields(items, format, delimiter),
        None => to_json(items),
    }
}
