use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use move_bcs::commands;
use move_bcs::config::LOG_LEVELS;
use move_bcs::{Config, LogConfig};

#[derive(Parser)]
#[command(name = "move-bcs")]
#[command(about = "Convert Move u256 values between decimal, BCS and JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short, long, global = true, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal u256 as 32 BCS bytes
    Encode {
        /// Decimal value
        value: String,
    },

    /// Decode 32 BCS bytes into a decimal u256
    Decode {
        /// Hex-encoded bytes, 0x prefix optional
        hex: String,
    },

    /// Encode decimal values as a BCS vector<u256>
    EncodeSeq {
        /// Decimal values
        values: Vec<String>,
    },

    /// Decode a BCS vector<u256>, one decimal per line
    DecodeSeq {
        /// Hex-encoded bytes, 0x prefix optional
        hex: String,
    },

    /// Print the JSON string form of a decimal u256
    Json {
        /// Decimal value
        value: String,
    },

    /// Parse the JSON string form of a u256
    FromJson {
        /// JSON document holding a single u256
        json: String,
    },
}

fn init_logging(log: &LogConfig, cli_level: Option<&str>) {
    let level = cli_level.unwrap_or(log.level.as_str());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.log, cli.log_level.as_deref());

    if let Some(path) = &cli.config {
        info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Encode { value } => {
            debug!("Encoding {}", value);
            println!("{}", commands::encode_value(&value, &config.output)?);
        }

        Commands::Decode { hex } => {
            debug!("Decoding {}", hex);
            println!("{}", commands::decode_value(&hex)?);
        }

        Commands::EncodeSeq { values } => {
            debug!("Encoding sequence of {} values", values.len());
            println!("{}", commands::encode_sequence(&values, &config.output)?);
        }

        Commands::DecodeSeq { hex } => {
            debug!("Decoding sequence {}", hex);
            for value in commands::decode_sequence(&hex)? {
                println!("{}", value);
            }
        }

        Commands::Json { value } => {
            println!("{}", commands::to_json(&value)?);
        }

        Commands::FromJson { json } => {
            println!("{}", commands::from_json(&json)?);
        }
    }

    Ok(())
}
