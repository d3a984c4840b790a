use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use fitsphot_core::consts::DEFAULT_SIGMA_MULTIPLIER;
use fitsphot_core::detection::{detect_objects, Connectivity, DetectionConfig, ThresholdMethod};
use fitsphot_core::features::extract_features;
use fitsphot_core::io::{load_fits, save_label_png};

#[derive(Clone, Copy, ValueEnum)]
pub enum ThresholdArg {
    Otsu,
    MeanSigma,
    Fixed,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConnectivityArg {
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

/// Detection flags shared by `detect` and `run`.
#[derive(Args)]
pub struct DetectionArgs {
    /// Thresholding method
    #[arg(long, value_enum, default_value = "otsu")]
    pub threshold: ThresholdArg,

    /// Sigma multiplier for mean-sigma thresholding
    #[arg(long, default_value_t = DEFAULT_SIGMA_MULTIPLIER)]
    pub sigma: f64,

    /// Threshold value for fixed thresholding
    #[arg(long)]
    pub fixed_value: Option<f64>,

    /// Pixel connectivity for grouping objects
    #[arg(long, value_enum, default_value = "8")]
    pub connectivity: ConnectivityArg,
}

impl DetectionArgs {
    pub fn to_config(&self) -> Result<DetectionConfig> {
        let threshold_method = match (self.threshold, self.fixed_value) {
            (ThresholdArg::Otsu, _) => ThresholdMethod::Otsu,
            (ThresholdArg::MeanSigma, _) => ThresholdMethod::MeanPlusSigma,
            (ThresholdArg::Fixed, Some(v)) => ThresholdMethod::Fixed(v),
            (ThresholdArg::Fixed, None) => bail!("--threshold fixed requires --fixed-value"),
        };
        let connectivity = match self.connectivity {
            ConnectivityArg::Four => Connectivity::Four,
            ConnectivityArg::Eight => Connectivity::Eight,
        };
        Ok(DetectionConfig {
            threshold_method,
            sigma_multiplier: self.sigma,
            connectivity,
        })
    }
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input FITS file
    pub file: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Save the label map as a PNG preview
    #[arg(long)]
    pub mask: Option<PathBuf>,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = args.detection.to_config()?;
    let image = load_fits(&args.file)?;
    let labels = detect_objects(&image.data, image.sample_kind(), &config)
        .with_context(|| format!("Detection failed for {}", args.file.display()))?;

    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let objects = extract_features(&labels, &image.data, 1, &name);

    println!(
        "{} objects in {} ({}x{}, {}, {})",
        objects.len(),
        name,
        image.width(),
        image.height(),
        config.threshold_method,
        config.connectivity
    );
    println!(
        "{:>6}  {:>10}  {:>10}  {:>8}  {:>16}",
        "ID", "X", "Y", "Size", "Luminosity"
    );
    println!("{}", "-".repeat(58));
    for obj in &objects {
        println!(
            "{:>6}  {:>10.3}  {:>10.3}  {:>8}  {:>16.4}",
            obj.object_id, obj.x, obj.y, obj.size, obj.luminosity
        );
    }

    if let Some(ref path) = args.mask {
        save_label_png(&labels, path)
            .with_context(|| format!("Failed to write mask {}", path.display()))?;
        println!("\nMask saved to {}", path.display());
    }

    Ok(())
}
