use ndarray::Array2;
use tracing::debug;

use crate::error::Result;

use super::components::{label_components, LabelMap};
use super::config::DetectionConfig;
use super::threshold::{compute_threshold, SampleKind};

/// Detect bright objects in an image.
///
/// Pipeline: global threshold -> binary mask (strictly above threshold) ->
/// connected-component labeling. `kind` selects how Otsu bins the samples.
pub fn detect_objects(
    data: &Array2<f64>,
    kind: SampleKind,
    config: &DetectionConfig,
) -> Result<LabelMap> {
    let threshold = compute_threshold(data, kind, &config.threshold_method, config.sigma_multiplier)?;
    let mask = foreground_mask(data, threshold);
    let labels = label_components(&mask, config.connectivity);

    debug!(
        threshold,
        ?kind,
        method = %config.threshold_method,
        connectivity = %config.connectivity,
        components = labels.count,
        "Labeled foreground"
    );

    Ok(labels)
}

/// Pixels strictly brighter than `threshold`. NaN samples are background.
pub fn foreground_mask(data: &Array2<f64>, threshold: f64) -> Array2<bool> {
    data.mapv(|v| v > threshold)
}
