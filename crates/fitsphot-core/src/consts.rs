/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Widest integer range thresholded with one histogram bin per level.
pub const OTSU_MAX_INTEGER_LEVELS: usize = 1 << 20;

/// Default sigma multiplier for MeanPlusSigma thresholding.
pub const DEFAULT_SIGMA_MULTIPLIER: f64 = 3.0;

/// File-name suffix recognized by the pipeline driver.
pub const FITS_EXTENSION: &str = ".fits";

/// Input directory used when none is given.
pub const DEFAULT_INPUT_DIR: &str = "Sample Files";

/// Catalog path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "output_results.csv";

/// Orbit propagation window used when none is given.
pub const DEFAULT_ORBIT_DURATION_MINUTES: u32 = 100;

/// Spacing between propagated orbit samples.
pub const DEFAULT_ORBIT_INTERVAL_SECONDS: u32 = 60;

/// Orbit table path used when none is given.
pub const DEFAULT_ORBIT_OUTPUT_PATH: &str = "satellite_positions.csv";

/// Equatorial Earth radius (WGS-84), kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;
