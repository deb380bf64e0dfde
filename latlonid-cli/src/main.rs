use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Latitude/longitude cell identifier tool
#[derive(Parser)]
#[command(name = "latlonid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output results as JSON
    #[arg(
        short,
        long,
        env = "LATLONID_JSON",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identifier of the cell containing a coordinate
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Coordinate of an identifier
    Decode {
        /// Identifier (1 to 65341)
        id: String,
    },

    /// Append an identifier column to a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (defaults to <input>_latlonid.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "lon")]
        lon_col: String,
    },

    /// Describe the identifier grid
    Info,
}

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "LATLONID_LOG";

/// Log filter used when `LATLONID_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { lat, lon } => commands::encode::run(lat, lon, cli.json),
        Commands::Decode { id } => commands::decode::run(&id, cli.json),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
        } => commands::batch::run(input, output, lat_col, lon_col),
        Commands::Info => commands::info::run(cli.json),
    }
}
