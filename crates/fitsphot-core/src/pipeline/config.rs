use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
use crate::detection::{DetectionConfig, ThresholdMethod};
use crate::error::{FitsPhotError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned for `.fits` files (not recursive).
    pub input_dir: PathBuf,
    /// CSV catalog path; overwritten on every run.
    pub output_path: PathBuf,
    #[serde(default)]
    pub ordering: FileOrdering,
    #[serde(default)]
    pub on_error: FailurePolicy,
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            ordering: FileOrdering::default(),
            on_error: FailurePolicy::default(),
            detection: DetectionConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Reject settings that would fail only after every file was processed,
    /// or that make the threshold meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.is_dir() {
            return Err(FitsPhotError::Config(format!(
                "output path {} is a directory",
                self.output_path.display()
            )));
        }
        if !self.detection.sigma_multiplier.is_finite() {
            return Err(FitsPhotError::Config(
                "sigma_multiplier must be finite".into(),
            ));
        }
        if let ThresholdMethod::Fixed(v) = self.detection.threshold_method {
            if !v.is_finite() {
                return Err(FitsPhotError::Config(
                    "fixed threshold must be finite".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Order in which input files are processed and numbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOrdering {
    /// Sorted by file name (byte-wise). Reproducible across platforms.
    #[default]
    Name,
    /// Whatever order the OS directory listing yields.
    Listing,
}

impl std::fmt::Display for FileOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "By name"),
            Self::Listing => write!(f, "Directory listing"),
        }
    }
}

/// What to do when one input file fails to load or yields no threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop the run; no catalog is written.
    #[default]
    Abort,
    /// Log the error, leave the file out of the catalog and continue.
    Skip,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "Abort"),
            Self::Skip => write!(f, "Skip and log"),
        }
    }
}
