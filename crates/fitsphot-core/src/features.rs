use ndarray::{Array2, Zip};

use crate::catalog::DetectedObject;
use crate::detection::LabelMap;

#[derive(Clone, Copy, Debug, Default)]
struct RegionSums {
    area: usize,
    sum_row: f64,
    sum_col: f64,
    sum_intensity: f64,
}

/// Measure every labeled region of an image.
///
/// Returns one record per positive label in ascending label order. Centroids
/// are unweighted pixel means; luminosity is the intensity sum, i.e. mean
/// intensity times area.
///
/// # Panics
///
/// Panics if `labels` and `data` differ in shape.
pub fn extract_features(
    labels: &LabelMap,
    data: &Array2<f64>,
    file_index: usize,
    file_name: &str,
) -> Vec<DetectedObject> {
    let mut regions = vec![RegionSums::default(); labels.count as usize + 1];

    Zip::indexed(&labels.labels)
        .and(data)
        .for_each(|(row, col), &lbl, &value| {
            if lbl == 0 {
                return;
            }
            let region = &mut regions[lbl as usize];
            region.area += 1;
            region.sum_row += row as f64;
            region.sum_col += col as f64;
            region.sum_intensity += value;
        });

    regions
        .iter()
        .skip(1)
        .filter(|r| r.area > 0)
        .enumerate()
        .map(|(rank, r)| {
            let area = r.area as f64;
            DetectedObject {
                file_index,
                file_name: file_name.to_string(),
                object_id: rank + 1,
                x: r.sum_col / area,
                y: r.sum_row / area,
                size: r.area,
                luminosity: r.sum_intensity,
            }
        })
        .collect()
}
