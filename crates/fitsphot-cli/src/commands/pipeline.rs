use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::Style;
use fitsphot_core::consts::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
use fitsphot_core::error::FitsPhotError;
use fitsphot_core::pipeline::{
    run_pipeline_reported, FailurePolicy, FileOrdering, PipelineConfig, ProgressReporter,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::detect::DetectionArgs;
use crate::summary::print_pipeline_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Name,
    Listing,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnErrorArg {
    Abort,
    Skip,
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory containing .fits files
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Pipeline config file (TOML); overrides all other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// File processing order
    #[arg(long, value_enum, default_value = "name")]
    pub order: OrderArg,

    /// Behaviour when a file cannot be loaded or thresholded
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: OnErrorArg,

    #[command(flatten)]
    pub detection: DetectionArgs,
}

/// Prints per-file progress lines above an indicatif bar.
struct ConsoleReporter {
    pb: ProgressBar,
    warn: Style,
}

impl ConsoleReporter {
    fn new() -> Result<Self> {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:24} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self {
            pb,
            warn: Style::new().yellow(),
        })
    }
}

impl ProgressReporter for ConsoleReporter {
    fn begin_run(&self, total_files: usize) {
        self.pb.set_length(total_files as u64);
    }

    fn begin_file(&self, index: usize, name: &str) {
        self.pb.println(format!("Processing file {}: {}...", index, name));
        self.pb.set_message(name.to_string());
    }

    fn finish_file(&self, _index: usize, _objects: usize) {
        self.pb.inc(1);
    }

    fn skip_file(&self, index: usize, name: &str, error: &FitsPhotError) {
        self.pb.println(format!(
            "{}",
            self.warn
                .apply_to(format!("Skipped file {}: {} ({})", index, name, error))
        ));
        self.pb.inc(1);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    debug!(?config, "Resolved pipeline config");
    print_pipeline_summary(&config);

    let reporter = ConsoleReporter::new()?;
    let summary = run_pipeline_reported(&config, &reporter)?;
    reporter.pb.finish_with_message("Done");

    println!(
        "\nPipeline executed successfully: {} file(s), {} object(s)",
        summary.files_processed, summary.objects
    );
    if summary.files_skipped > 0 {
        println!("Skipped {} file(s)", summary.files_skipped);
    }
    println!("Results saved to {}", summary.output_path.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<PipelineConfig> {
    let ordering = match args.order {
        OrderArg::Name => FileOrdering::Name,
        OrderArg::Listing => FileOrdering::Listing,
    };
    let on_error = match args.on_error {
        OnErrorArg::Abort => FailurePolicy::Abort,
        OnErrorArg::Skip => FailurePolicy::Skip,
    };

    Ok(PipelineConfig {
        input_dir: args.input_dir.clone(),
        output_path: args.output.clone(),
        ordering,
        on_error,
        detection: args.detection.to_config()?,
    })
}
