mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitsphot", about = "Source detection and photometry for FITS images, plus satellite orbit propagation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show FITS primary header summary
    Info(commands::info::InfoArgs),
    /// Detect and measure objects in a single FITS file
    Detect(commands::detect::DetectArgs),
    /// Process a directory of FITS files into a CSV catalog
    Run(commands::pipeline::RunArgs),
    /// Print or save the default pipeline config
    Config(commands::config::ConfigArgs),
    /// Propagate satellite orbits from TLE records
    Orbits(commands::orbits::OrbitsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Orbits(args) => commands::orbits::run(args),
    }
}
