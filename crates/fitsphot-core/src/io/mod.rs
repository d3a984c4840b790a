pub mod catalog_writer;
pub mod fits;
pub mod mask_preview;
pub mod orbit_plot;
pub mod orbit_writer;

pub use catalog_writer::{write_catalog, CATALOG_HEADER};
pub use fits::{load_fits, FitsHeader, FitsImage};
pub use mask_preview::save_label_png;
pub use orbit_plot::plot_orbits;
pub use orbit_writer::{write_orbit_csv, ORBIT_HEADER};
