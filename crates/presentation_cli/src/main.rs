//! poiscout CLI
//!
//! Harvests points of interest around transit stops from the search-results
//! API into SQLite, and runs one-shot Places nearby searches.

#![allow(clippy::print_stdout)]

mod export;
mod logging;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{BatchSummary, PaginationDriver, sequence_with_locale};
use clap::{Parser, Subcommand};
use domain::GeoLocation;
use infrastructure::{
    AppConfig, SerpApiTransportAdapter, SqlitePoiStore, TracingProgressLog, create_pool,
};
use integration_places::{DEFAULT_FIELDS, NearbyRequest, PlacesClient};
use tracing::info;

/// poiscout CLI
#[derive(Debug, Parser)]
#[command(name = "poiscout")]
#[command(author, version, about = "Points-of-interest harvester", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: conf-serpapi.json if present)
    #[arg(short, long, global = true, env = "POISCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every stop x keyword query, following pagination, into SQLite
    Serp {
        /// Only use the first N stops
        #[arg(long)]
        limit_stops: Option<usize>,

        /// Only use the first N keywords
        #[arg(long)]
        limit_types: Option<usize>,

        /// Stop following next-page cursors after N pages per query
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: Option<u32>,
    },

    /// Search places around a point (one request, no pagination)
    ///
    /// Example: poiscout --config conf.json nearby --lat 35.4996 --lon 139.4115 --output data
    Nearby {
        /// Latitude of the circle center
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the circle center
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Radius in meters (default from configuration)
        #[arg(long)]
        radius: Option<f64>,

        /// Place types to include, comma separated (default: all)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Maximum number of places (default from configuration)
        #[arg(long)]
        max_results: Option<u32>,

        /// Field mask entries, comma separated
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Directory to write `query-<timestamp>.json` into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Drop and recreate the response and poi tables
    InitDb,

    /// Show row counts of the response and poi tables
    Stats,
}

/// Apply `--limit-*` options to a list
fn take_limited<T: Clone>(items: &[T], limit: Option<usize>) -> Vec<T> {
    let end = limit.map_or(items.len(), |n| n.min(items.len()));
    items[..end].to_vec()
}

fn open_store(config: &AppConfig) -> anyhow::Result<SqlitePoiStore> {
    let pool = create_pool(&config.database())
        .with_context(|| format!("Failed to open database {}", config.sqlite))?;
    Ok(SqlitePoiStore::new(Arc::new(pool)))
}

async fn run_serp(
    config: &AppConfig,
    limit_stops: Option<usize>,
    limit_types: Option<usize>,
    max_pages: Option<u32>,
) -> anyhow::Result<BatchSummary> {
    config.validate()?;

    let stops = take_limited(&config.stops()?, limit_stops);
    let keywords = take_limited(&config.include_types, limit_types);
    info!(stops = stops.len(), keywords = keywords.len(), "Starting batch");

    let store = open_store(config)?;
    let transport = SerpApiTransportAdapter::new(&config.serpapi())?;
    let mut pagination = config.pagination();
    if max_pages.is_some() {
        pagination.max_pages = max_pages;
    }

    let driver = PaginationDriver::new(
        Arc::new(transport),
        Arc::new(store),
        Arc::new(TracingProgressLog::new()),
        pagination,
    );
    let queries = sequence_with_locale(&stops, &keywords, config.api_key(), config.locale());
    Ok(driver.run(queries).await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serp {
            limit_stops,
            limit_types,
            max_pages,
        } => {
            let summary = run_serp(&config, limit_stops, limit_types, max_pages).await?;
            println!("✅ Done: {summary}");
        },

        Commands::Nearby {
            lat,
            lon,
            radius,
            types,
            max_results,
            fields,
            output,
        } => {
            let places_config = config.places_with_overrides(radius, max_results)?;

            let request = NearbyRequest::new(GeoLocation::new(lat, lon)?, places_config.radius)
                .with_included_types(types)
                .with_max_result_count(places_config.max_results);

            let fields: Vec<&str> = if fields.is_empty() {
                DEFAULT_FIELDS.to_vec()
            } else {
                fields.iter().map(String::as_str).collect()
            };

            let client = PlacesClient::new(&places_config, config.api_key())?;
            let places = client.search_nearby(&request, &fields).await?;

            println!("📍 {} place(s) around {}", places.len(), request.center);
            for place in &places {
                println!("   {} [{}]", place.display_name, place.types);
            }

            if let Some(dir) = output {
                let path = export::write_places(&dir, &places)?;
                println!("📁 Written to {}", path.display());
            }
        },

        Commands::InitDb => {
            let store = open_store(&config)?;
            store.reset().await?;
            println!("🗄️  Recreated response and poi tables in {}", config.sqlite);
        },

        Commands::Stats => {
            let store = open_store(&config)?;
            println!("📊 {}", config.sqlite);
            println!("   response: {}", store.count_metadata().await?);
            println!("   poi:      {}", store.count_poi().await?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_serp_with_limits() {
        let cli = Cli::try_parse_from([
            "poiscout",
            "-vv",
            "--config",
            "conf-serpapi.json",
            "serp",
            "--limit-stops",
            "2",
            "--limit-types",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("conf-serpapi.json")));
        match cli.command {
            Commands::Serp {
                limit_stops,
                limit_types,
                max_pages,
            } => {
                assert_eq!(limit_stops, Some(2));
                assert_eq!(limit_types, Some(2));
                assert!(max_pages.is_none());
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_nearby_with_types() {
        let cli = Cli::try_parse_from([
            "poiscout",
            "nearby",
            "--lat",
            "35.4996",
            "--lon",
            "139.4115",
            "--types",
            "restaurant,cafe",
            "--output",
            "data",
        ])
        .unwrap();

        match cli.command {
            Commands::Nearby {
                lat, types, output, ..
            } => {
                assert!((lat - 35.4996).abs() < f64::EPSILON);
                assert_eq!(types, ["restaurant", "cafe"]);
                assert_eq!(output, Some(PathBuf::from("data")));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_serp_rejects_zero_max_pages() {
        assert!(Cli::try_parse_from(["poiscout", "serp", "--max-pages", "0"]).is_err());

        let cli = Cli::try_parse_from(["poiscout", "serp", "--max-pages", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serp {
                max_pages: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn parse_nearby_requires_coordinates() {
        assert!(Cli::try_parse_from(["poiscout", "nearby", "--lat", "35.0"]).is_err());
    }

    #[test]
    fn parse_global_log_file_after_subcommand() {
        let cli = Cli::try_parse_from(["poiscout", "stats", "--log-file", "logs/serp-api.log"])
            .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("logs/serp-api.log")));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn take_limited_caps_at_length() {
        let items = vec![1, 2, 3];
        assert_eq!(take_limited(&items, None), [1, 2, 3]);
        assert_eq!(take_limited(&items, Some(2)), [1, 2]);
        assert_eq!(take_limited(&items, Some(10)), [1, 2, 3]);
        assert!(take_limited(&items, Some(0)).is_empty());
    }

    #[tokio::test]
    async fn serp_rejects_config_without_key() {
        let err = run_serp(&AppConfig::default(), None, None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("apikey"));
    }
}
