use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::Args;
use fitsphot_core::consts::{
    DEFAULT_ORBIT_DURATION_MINUTES, DEFAULT_ORBIT_INTERVAL_SECONDS, DEFAULT_ORBIT_OUTPUT_PATH,
};
use fitsphot_core::io::{plot_orbits, write_orbit_csv};
use fitsphot_core::orbits::{parse_tle_set, propagate_orbit, OrbitConfig};

#[derive(Args)]
pub struct OrbitsArgs {
    /// TLE file: optional name line, then element lines 1 and 2, per satellite
    pub tle: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_ORBIT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Start time in UTC (e.g. 2024-12-20T10:00:00); defaults to now
    #[arg(long)]
    pub start: Option<NaiveDateTime>,

    /// Propagation window in minutes
    #[arg(long, default_value_t = DEFAULT_ORBIT_DURATION_MINUTES)]
    pub duration: u32,

    /// Seconds between samples
    #[arg(long, default_value_t = DEFAULT_ORBIT_INTERVAL_SECONDS)]
    pub interval: u32,

    /// Render the trajectories to a PNG
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

pub fn run(args: &OrbitsArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.tle)
        .with_context(|| format!("Failed to read {}", args.tle.display()))?;
    let satellites = parse_tle_set(&text)?;
    let config = OrbitConfig {
        duration_minutes: args.duration,
        interval_seconds: args.interval,
    };
    let start = args.start.unwrap_or_else(|| Utc::now().naive_utc());

    let mut tracks = Vec::with_capacity(satellites.len());
    for satellite in &satellites {
        println!("Propagating {}...", satellite.name);
        let track = propagate_orbit(satellite, start, &config)?;
        if track.samples.is_empty() {
            println!("No positions calculated for {}", satellite.name);
        }
        tracks.push(track);
    }

    write_orbit_csv(&tracks, &args.output)?;
    println!("Positions saved to {}", args.output.display());

    if let Some(ref path) = args.plot {
        plot_orbits(&tracks, path)?;
        println!("Trajectory plot saved to {}", path.display());
    }

    println!("Propagated orbits for {} satellite(s)", tracks.len());
    Ok(())
}
