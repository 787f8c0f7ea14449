use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pokedex::api::http::format_api_error;
use pokedex::resource::{get_all_endpoint_names, Interval, Request, ResourceKey};
use pokedex::{Pokedex, PokedexConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Query the PokeAPI from the terminal
///
/// With only an endpoint, prints one page of its collection. With keys,
/// prints the matching record, or an array of records for several keys.
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about, long_about = None)]
struct Args {
    /// Endpoint name, e.g. berry or pokemon-species
    endpoint: Option<String>,

    /// Names or ids to look up
    keys: Vec<String>,

    /// Page size for collection listings
    #[arg(long)]
    limit: Option<u32>,

    /// Page offset for collection listings
    #[arg(long)]
    offset: Option<u32>,

    /// Fetch raw paths or URLs instead of an endpoint
    #[arg(long, num_args = 1.., conflicts_with_all = ["endpoint", "endpoints", "encounters"])]
    resource: Vec<String>,

    /// Print the endpoints advertised by the service
    #[arg(long, conflicts_with_all = ["endpoint", "encounters"])]
    endpoints: bool,

    /// Print the endpoint names this client knows about
    #[arg(long)]
    names: bool,

    /// Print the location areas a Pokémon can be encountered in
    #[arg(long, value_name = "POKEMON", conflicts_with = "endpoint")]
    encounters: Option<String>,

    /// Service origin, e.g. http://localhost:8000
    #[arg(long)]
    host: Option<String>,

    /// Bypass the response cache
    #[arg(long)]
    no_cache: bool,

    /// Config file (defaults to <config dir>/pokedex/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

/// Environment variable holding a full filter, e.g. `pokedex=trace,reqwest=debug`
const LOG_ENV: &str = "POKEDEX_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Client events at `level`, dependencies at warn and above
///
/// A non-empty override replaces the whole filter.
fn log_filter(level: LogLevel, overrides: Option<&str>) -> Option<EnvFilter> {
    if let Some(directives) = overrides.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Some(filter),
            Err(e) => eprintln!("Ignoring {}: {}", LOG_ENV, e),
        }
    }

    let level = LevelFilter::from(level);
    if level == LevelFilter::OFF {
        return None;
    }
    Some(EnvFilter::new(format!("warn,pokedex={}", level)))
}

/// Log file beside the config file
fn log_path() -> PathBuf {
    PokedexConfig::config_path()
        .and_then(|config| config.parent().map(|dir| dir.join("pokedex.log")))
        .unwrap_or_else(|| std::env::temp_dir().join("pokedex.log"))
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = log_filter(level, std::env::var(LOG_ENV).ok().as_deref())?;
    let log_path = log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("pokedex {} logging to {:?}", env!("CARGO_PKG_VERSION"), log_path);

    Some(guard)
}

/// Effective configuration (CLI > config file > defaults)
fn effective_config(args: &Args) -> PokedexConfig {
    let mut config = match &args.config {
        Some(path) => PokedexConfig::load_from(path),
        None => PokedexConfig::load(),
    };

    if let Some(host) = &args.host {
        config = config.with_origin(host);
    }
    if args.no_cache {
        config.cache = false;
    }

    config
}

/// Numeric keys are looked up as ids, everything else as names
fn parse_key(raw: &str) -> ResourceKey {
    match raw.parse::<i64>() {
        Ok(id) => ResourceKey::Id(id),
        Err(_) => ResourceKey::Name(raw.to_string()),
    }
}

fn build_request(args: &Args) -> Request {
    match args.keys.as_slice() {
        [] => Request::List(Interval {
            limit: args.limit,
            offset: args.offset,
        }),
        [key] => Request::Single(parse_key(key)),
        keys => Request::Batch(keys.iter().map(|k| parse_key(k)).collect()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}

async fn run(args: &Args, client: &Pokedex) -> pokedex::Result<Option<serde_json::Value>> {
    if !args.resource.is_empty() {
        let mut values = client.resources(&args.resource).await?;
        return Ok(Some(if values.len() == 1 {
            values.remove(0)
        } else {
            serde_json::Value::Array(values)
        }));
    }

    if args.endpoints {
        let endpoints = client.get_endpoints_list().await?;
        return Ok(Some(serde_json::json!(endpoints)));
    }

    if let Some(pokemon) = &args.encounters {
        let areas = client.get_pokemon_encounter_areas_by_name(parse_key(pokemon)).await?;
        return Ok(Some(serde_json::json!(areas)));
    }

    match &args.endpoint {
        Some(endpoint) => {
            let request = build_request(args);
            tracing::info!("{} {:?}", endpoint, request);
            let result = client.get_by_endpoint_name(endpoint, &request).await?;
            Ok(Some(result.into_value()))
        }
        None => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    if args.names {
        for name in get_all_endpoint_names() {
            println!("{}", name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = effective_config(&args);
    tracing::info!("Using {}", config.base_url());

    let client = Pokedex::new(config).context("Failed to initialize client")?;

    match run(&args, &client).await {
        Ok(Some(value)) => {
            print_json(&value)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            eprintln!("Nothing to do. Pass an endpoint name, or --names to list them.");
            Ok(ExitCode::from(2))
        }
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {}", format_api_error(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}
