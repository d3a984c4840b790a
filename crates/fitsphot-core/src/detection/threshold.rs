use ndarray::Array2;

use crate::consts::{OTSU_HISTOGRAM_BINS, OTSU_MAX_INTEGER_LEVELS};
use crate::error::{FitsPhotError, Result};

use super::config::ThresholdMethod;

/// Numeric domain of the pixel values handed to detection.
///
/// Integer images are thresholded on their exact levels; float images on a
/// fixed-size histogram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleKind {
    Integer,
    #[default]
    Float,
}

/// Compute the threshold value using the configured method.
///
/// Fails for empty images and images whose finite samples are all equal,
/// since no method can separate foreground from background there.
pub fn compute_threshold(
    data: &Array2<f64>,
    kind: SampleKind,
    method: &ThresholdMethod,
    sigma_mul: f64,
) -> Result<f64> {
    let range = check_separable(data)?;
    match method {
        ThresholdMethod::Otsu => Ok(otsu_in_range(data, kind, range)),
        ThresholdMethod::MeanPlusSigma => {
            let (mean, std) = compute_mean_stddev(data);
            Ok(mean + sigma_mul * std)
        }
        ThresholdMethod::Fixed(v) => Ok(*v),
    }
}

/// Minimum and maximum of the finite samples, or `None` if there are none.
pub fn finite_range(data: &Array2<f64>) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Compute mean and standard deviation of the finite pixel values.
pub fn compute_mean_stddev(data: &Array2<f64>) -> (f64, f64) {
    let finite = || data.iter().copied().filter(|v| v.is_finite());
    let n = finite().count() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean = finite().sum::<f64>() / n;
    let var = finite().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Otsu's thresholding: find the value that minimizes intra-class variance.
///
/// Integer data gets one histogram bin per level in `[min, max]`, so the
/// returned value is itself a level. Float data (and integer data spanning
/// more than `OTSU_MAX_INTEGER_LEVELS`) uses `OTSU_HISTOGRAM_BINS` equal bins
/// and returns a bin centre. Ties go to the lowest bin.
pub fn otsu_threshold(data: &Array2<f64>, kind: SampleKind) -> Result<f64> {
    let range = check_separable(data)?;
    Ok(otsu_in_range(data, kind, range))
}

fn otsu_in_range(data: &Array2<f64>, kind: SampleKind, (min, max): (f64, f64)) -> f64 {
    let span = max - min;
    let finite = data.iter().copied().filter(|v| v.is_finite());

    if kind == SampleKind::Integer && span < OTSU_MAX_INTEGER_LEVELS as f64 {
        let bins = span as usize + 1;
        let mut histogram = vec![0u64; bins];
        for v in finite {
            histogram[((v - min) as usize).min(bins - 1)] += 1;
        }
        return min + otsu_best_bin(&histogram, |i| min + i as f64) as f64;
    }

    let bins = OTSU_HISTOGRAM_BINS;
    let bin_width = span / bins as f64;
    let center = |i: usize| min + (i as f64 + 0.5) * bin_width;

    let mut histogram = vec![0u64; bins];
    for v in finite {
        histogram[(((v - min) / bin_width) as usize).min(bins - 1)] += 1;
    }
    center(otsu_best_bin(&histogram, center))
}

/// Index of the last background bin of the split with the largest
/// between-class variance.
fn otsu_best_bin(histogram: &[u64], center: impl Fn(usize) -> f64) -> usize {
    let total: f64 = histogram.iter().map(|&c| c as f64).sum();
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| center(i) * c as f64)
        .sum();

    let mut weight_bg = 0.0_f64;
    let mut sum_bg = 0.0_f64;
    let mut best_variance = -1.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate().take(histogram.len() - 1) {
        weight_bg += count as f64;
        sum_bg += center(i) * count as f64;
        let weight_fg = total - weight_bg;
        if weight_bg == 0.0 || weight_fg == 0.0 {
            continue;
        }
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    best_bin
}

fn check_separable(data: &Array2<f64>) -> Result<(f64, f64)> {
    let (min, max) = finite_range(data).ok_or(FitsPhotError::EmptyImage)?;
    if min == max {
        return Err(FitsPhotError::UniformImage(min));
    }
    Ok((min, max))
}
