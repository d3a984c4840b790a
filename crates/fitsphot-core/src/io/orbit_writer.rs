use std::path::Path;

use serde::Serialize;

use crate::error::{FitsPhotError, Result};
use crate::orbits::OrbitTrack;

/// Column titles of the orbit table.
pub const ORBIT_HEADER: [&str; 5] = [
    "Satellite name",
    "Time",
    "X Coordinate",
    "Y Coordinate",
    "Z Coordinate",
];

#[derive(Serialize)]
struct OrbitRow<'a> {
    satellite: &'a str,
    time: String,
    x: f64,
    y: f64,
    z: f64,
}

/// Write every track as CSV rows, satellites in the given order, replacing
/// any existing file.
pub fn write_orbit_csv(tracks: &[OrbitTrack], path: &Path) -> Result<()> {
    let wrap = |source: csv::Error| FitsPhotError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;

    writer.write_record(ORBIT_HEADER).map_err(wrap)?;
    for track in tracks {
        for sample in &track.samples {
            let [x, y, z] = sample.position;
            writer
                .serialize(OrbitRow {
                    satellite: &track.name,
                    time: sample.time.to_string(),
                    x,
                    y,
                    z,
                })
                .map_err(wrap)?;
        }
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    Ok(())
}
