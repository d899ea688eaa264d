//! # Sectorgen Entry Point
//!
//! Generates a sector from command line options and writes it as a
//! tab-separated listing or as JSON.

use clap::{Parser, ValueEnum};
use sectorgen::{export, generate_in_background, utils, GenerationConfig, Sector, SectorgenResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[cfg(feature = "dev-tools")]
use tracing::{error, info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tab-separated sector listing
    Tsv,
    /// The full sector as JSON
    Json,
}

/// Command line arguments for the sector generator.
#[derive(Parser, Debug)]
#[command(name = "sectorgen")]
#[command(about = "Procedural Traveller sector generator")]
#[command(version)]
struct Args {
    /// Random seed for reproducible sectors
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of hex columns
    #[arg(long)]
    width: Option<u32>,

    /// Number of hex rows
    #[arg(long)]
    height: Option<u32>,

    /// A hex is occupied when 1d20 rolls below this value
    #[arg(long)]
    occupancy: Option<i32>,

    /// Allegiance code stamped on every world
    #[arg(long)]
    allegiance: Option<String>,

    /// JSON generation config; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn generation_config(&self) -> SectorgenResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(occupancy) = self.occupancy {
            config.occupancy_threshold = occupancy;
        }
        if let Some(allegiance) = &self.allegiance {
            config.allegiance = allegiance.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting sectorgen v{}", sectorgen::VERSION);

    if let Err(e) = run(&args).await {
        error!("Sector generation failed: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .target(env_logger::Target::Stderr)
            .init();
    }
}

async fn run(args: &Args) -> SectorgenResult<()> {
    let config = args.generation_config()?;
    match config.seed {
        Some(seed) => info!("Generating {}x{} sector with seed {}", config.width, config.height, seed),
        None => info!("Generating {}x{} sector", config.width, config.height),
    }

    let names = utils::default_names(&config);
    let sector = generate_in_background(config, names).await??;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        OutputFormat::Tsv => export::write_sector(&sector, out)?,
        OutputFormat::Json => write_json(&sector, out)?,
    }

    if let Some(path) = &args.output {
        info!("Wrote {} worlds of {} to {}", sector.len(), sector.name(), path.display());
    }

    Ok(())
}

fn write_json(sector: &Sector, mut out: impl Write) -> SectorgenResult<()> {
    serde_json::to_writer_pretty(&mut out, sector)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
