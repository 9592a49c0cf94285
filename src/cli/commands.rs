use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};

use crate::error::IsochroneError;
use crate::geocode::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::geocode::{GeocodeConfig, NominatimClient};
use crate::history_store::{HistoryRepository, HistoryStore, JsonFileBackend, SystemClock};
use crate::isochrone::{Planner, format_radius, radius_for};
use crate::map::{GeoJsonMapView, MapSession, TextMapView};
use crate::models::{HistoryEntry, Isochrone, RawQuery};
use crate::parsers::{format_duration, parse_time};
use crate::utils::{
    DATA_DIR_ENV, format_path_with_tilde, format_timestamp_millis, resolve_data_dir,
    sanitize_line, truncate_chars,
};

type FileStore = HistoryStore<JsonFileBackend, SystemClock>;

#[derive(Parser)]
#[command(name = "isochrone-viewer")]
#[command(version)]
#[command(
    about = "Estimate how far you can travel from a place within a time budget",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the search history
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Geocode a location and compute the reachable radius around it
    Search(SearchArgs),
    /// Compute the reachable radius without geocoding
    Radius {
        /// walking, cycling, driving or bus
        #[arg(short, long, default_value = "walking")]
        transport: String,
        /// Time budget, e.g. 10m, 1.5h or 30s
        #[arg(short = 'T', long)]
        time: String,
    },
    /// Show or manage past searches
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// City, address or "lat,lon"
    pub location: String,

    /// walking, cycling, driving or bus
    #[arg(short, long, default_value = "walking")]
    pub transport: String,

    /// Time budget, e.g. 10m, 1.5h or 30s
    #[arg(short = 'T', long)]
    pub time: String,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Do not record this search in history
    #[arg(long)]
    pub no_history: bool,

    #[command(flatten)]
    pub geocode: GeocodeArgs,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Also write the result as a GeoJSON FeatureCollection
    #[arg(long, value_name = "FILE")]
    pub geojson: Option<PathBuf>,
}

#[derive(Args)]
pub struct GeocodeArgs {
    /// Nominatim base URL
    #[arg(long, env = "ISOCHRONE_GEOCODE_URL", default_value = DEFAULT_BASE_URL)]
    pub geocode_url: String,

    /// Prefix for routing geocode requests through a CORS proxy
    #[arg(long, env = "API_CORS_PROXY")]
    pub cors_proxy: Option<String>,

    /// Geocode request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl GeocodeArgs {
    fn to_config(&self) -> GeocodeConfig {
        GeocodeConfig::default()
            .with_base_url(self.geocode_url.clone())
            .with_timeout_secs(self.timeout)
            .with_cors_proxy(self.cors_proxy.clone())
    }
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List recent searches, newest first
    List,
    /// Delete searches by timestamp
    Delete {
        #[arg(required = true)]
        timestamps: Vec<i64>,
    },
    /// Delete every search
    Clear,
    /// Run a past search again
    Rerun {
        timestamp: i64,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        geocode: GeocodeArgs,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Search(args)) => {
            let store = open_store(cli.data_dir.as_deref())?;
            let raw = RawQuery::new(&args.location, &args.transport, &args.time);
            let history = if args.no_history { None } else { Some(&store) };
            run_search(&raw, &args.geocode, &args.output, history)?;
        }
        Some(Commands::Radius { transport, time }) => {
            show_radius(transport, time)?;
        }
        Some(Commands::History { command }) => {
            let store = open_store(cli.data_dir.as_deref())?;
            run_history(command, &store)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_store(data_dir: Option<&Path>) -> Result<FileStore> {
    let data_dir = resolve_data_dir(data_dir)?;
    Ok(HistoryStore::new(JsonFileBackend::new(&data_dir)))
}

/// Converts a core error for display, adding a retry hint where it helps
fn report(err: IsochroneError) -> anyhow::Error {
    if err.is_retryable() {
        anyhow!("{} (check the location and try again)", err)
    } else {
        anyhow!(err)
    }
}

fn run_search(
    raw: &RawQuery,
    geocode: &GeocodeArgs,
    output: &OutputArgs,
    history: Option<&FileStore>,
) -> Result<()> {
    let client =
        NominatimClient::new(geocode.to_config()).map_err(|e| report(IsochroneError::from(e)))?;

    let mut planner = Planner::new(&client);
    if let Some(store) = history {
        planner = planner.with_history(store);
    }

    let isochrone = planner.plan(raw).map_err(report)?;
    print_isochrone(&isochrone);

    if let Some(path) = &output.geojson {
        write_geojson(&isochrone, path)?;
    }

    Ok(())
}

fn print_isochrone(isochrone: &Isochrone) {
    let mut session = MapSession::new(TextMapView::new());
    session.show(isochrone);
    println!("{}", session.view().render());
}

fn write_geojson(isochrone: &Isochrone, path: &Path) -> Result<()> {
    let mut session = MapSession::new(GeoJsonMapView::new());
    session.show(isochrone);
    let geojson = session.view().to_geojson_string()?;

    fs::write(path, geojson)
        .with_context(|| format!("Failed to write GeoJSON file: {}", path.display()))?;
    println!("GeoJSON written to {}", format_path_with_tilde(path));
    Ok(())
}

fn show_radius(transport: &str, time: &str) -> Result<()> {
    let seconds = parse_time(time).map_err(report)?;
    let meters = radius_for(transport, seconds).map_err(report)?;

    println!("{} for {}: {}", transport, format_duration(seconds), format_radius(meters));
    println!("Radius: {:.1} m", meters);
    Ok(())
}

fn run_history(command: &HistoryCommand, store: &FileStore) -> Result<()> {
    match command {
        HistoryCommand::List => list_history(store),
        HistoryCommand::Delete { timestamps } => delete_history(store, timestamps),
        HistoryCommand::Clear => {
            store.clear_all()?;
            println!("Search history cleared");
            Ok(())
        }
        HistoryCommand::Rerun { timestamp, output, geocode } => {
            let Some(entry) = store.find(*timestamp)? else {
                bail!("No history entry with timestamp {}", timestamp);
            };
            let raw = RawQuery::new(entry.location, entry.transport, entry.time);
            run_search(&raw, geocode, output, Some(store))
        }
    }
}

fn delete_history(store: &FileStore, timestamps: &[i64]) -> Result<()> {
    let mut deleted = 0;
    for &timestamp in timestamps {
        if store.find(timestamp)?.is_none() {
            println!("No history entry with timestamp {}", timestamp);
            continue;
        }
        store.delete_one(timestamp)?;
        deleted += 1;
        println!("Deleted history entry {}", timestamp);
    }

    println!("{}", deleted_summary(deleted));
    Ok(())
}

fn deleted_summary(count: usize) -> String {
    match count {
        1 => "1 search deleted from history".to_string(),
        n => format!("{} searches deleted from history", n),
    }
}

fn list_history(store: &FileStore) -> Result<()> {
    let entries = store.list()?;

    println!("Search History");
    println!("==============");
    if entries.is_empty() {
        println!("No recent searches");
    } else {
        let now = chrono::Utc::now().timestamp_millis();
        for entry in &entries {
            println!("{}", format_history_row(entry, now));
        }
    }
    println!();
    println!("History file: {}", format_path_with_tilde(store.backend().path()));

    Ok(())
}

fn format_history_row(entry: &HistoryEntry, now_millis: i64) -> String {
    format!(
        "{:<14} {:>9}  {:<40} {:<8} {}",
        entry.timestamp,
        format_timestamp_millis(entry.timestamp, now_millis),
        truncate_chars(&sanitize_line(&entry.location), 40),
        sanitize_line(&entry.transport),
        sanitize_line(&entry.time)
    )
}
