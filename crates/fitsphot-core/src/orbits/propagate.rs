use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{DEFAULT_ORBIT_DURATION_MINUTES, DEFAULT_ORBIT_INTERVAL_SECONDS};
use crate::error::{FitsPhotError, Result};

use super::tle::SatelliteTle;

/// Sampling window for orbit propagation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub duration_minutes: u32,
    pub interval_seconds: u32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_ORBIT_DURATION_MINUTES,
            interval_seconds: DEFAULT_ORBIT_INTERVAL_SECONDS,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_seconds == 0 {
            return Err(FitsPhotError::Config(
                "orbit sampling interval must be at least one second".into(),
            ));
        }
        Ok(())
    }

    /// Offsets from the start time in seconds: `0, interval, ...` while
    /// below the window length.
    pub fn sample_offsets(&self) -> impl Iterator<Item = u32> {
        (0..self.duration_minutes.saturating_mul(60)).step_by(self.interval_seconds.max(1) as usize)
    }
}

/// Satellite position at one instant, TEME frame, kilometres.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSample {
    pub time: NaiveDateTime,
    pub position: [f64; 3],
}

#[derive(Clone, Debug)]
pub struct OrbitTrack {
    pub name: String,
    pub samples: Vec<OrbitSample>,
}

/// Propagate one satellite with SGP4 from `start` (UTC) over the configured
/// window. Instants where the model fails are logged and left out.
pub fn propagate_orbit(
    tle: &SatelliteTle,
    start: NaiveDateTime,
    config: &OrbitConfig,
) -> Result<OrbitTrack> {
    config.validate()?;
    let invalid = |reason: String| FitsPhotError::Tle {
        name: tle.name.clone(),
        reason,
    };

    let elements = sgp4::Elements::from_tle(
        Some(tle.name.clone()),
        tle.line1.as_bytes(),
        tle.line2.as_bytes(),
    )
    .map_err(|e| invalid(e.to_string()))?;
    let constants =
        sgp4::Constants::from_elements(&elements).map_err(|e| invalid(e.to_string()))?;

    let mut samples = Vec::new();
    for offset in config.sample_offsets() {
        let time = start + Duration::seconds(i64::from(offset));
        let minutes = (time - elements.datetime).num_milliseconds() as f64 / 60_000.0;
        match constants.propagate(sgp4::MinutesSinceEpoch(minutes)) {
            Ok(prediction) => samples.push(OrbitSample {
                time,
                position: prediction.position,
            }),
            Err(e) => warn!(satellite = %tle.name, %time, error = %e, "Propagation failed"),
        }
    }

    debug!(satellite = %tle.name, samples = samples.len(), "Propagated orbit");
    Ok(OrbitTrack {
        name: tle.name.clone(),
        samples,
    })
}
