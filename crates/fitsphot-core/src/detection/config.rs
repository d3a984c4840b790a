use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SIGMA_MULTIPLIER;

/// Method used to separate sources from the sky background.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Otsu's method: minimizes intra-class variance of the intensity histogram.
    #[default]
    Otsu,
    /// Threshold = mean + sigma_multiplier * stddev.
    MeanPlusSigma,
    /// User-specified fixed threshold in physical pixel units.
    Fixed(f64),
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Otsu => write!(f, "Otsu"),
            Self::MeanPlusSigma => write!(f, "Mean + Sigma"),
            Self::Fixed(v) => write!(f, "Fixed ({v})"),
        }
    }
}

/// Pixel adjacency used when grouping foreground pixels into objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Edge neighbours only.
    Four,
    /// Edge and corner neighbours.
    #[default]
    Eight,
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Four => write!(f, "4-connected"),
            Self::Eight => write!(f, "8-connected"),
        }
    }
}

/// Configuration for object detection in a single image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Thresholding method.
    #[serde(default)]
    pub threshold_method: ThresholdMethod,
    /// Sigma multiplier for MeanPlusSigma method.
    #[serde(default = "default_sigma_multiplier")]
    pub sigma_multiplier: f64,
    /// Neighbourhood used for connected-component labeling.
    #[serde(default)]
    pub connectivity: Connectivity,
}

fn default_sigma_multiplier() -> f64 {
    DEFAULT_SIGMA_MULTIPLIER
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold_method: ThresholdMethod::default(),
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
            connectivity: Connectivity::default(),
        }
    }
}
