use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{FitsPhotError, Result};

/// Column titles of the output table, in record field order.
pub const CATALOG_HEADER: [&str; 7] = [
    "File_no.",
    "File_name",
    "Object_ID",
    "X Coordinate",
    "Y Coordinate",
    "Size (pixels^2)",
    "Luminosity (pixel intensity * pixels)",
];

/// Write the catalog as CSV, replacing any existing file.
///
/// The header row is always written, so an empty catalog yields a
/// header-only file.
pub fn write_catalog(catalog: Catalog, path: &Path) -> Result<()> {
    let wrap = |source: csv::Error| FitsPhotError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;

    writer.write_record(CATALOG_HEADER).map_err(wrap)?;
    for object in catalog {
        writer.serialize(&object).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    Ok(())
}
