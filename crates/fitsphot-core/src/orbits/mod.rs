pub mod propagate;
pub mod tle;

pub use propagate::{propagate_orbit, OrbitConfig, OrbitSample, OrbitTrack};
pub use tle::{parse_tle_set, SatelliteTle};
