use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::{Catalog, DetectedObject};
use crate::consts::FITS_EXTENSION;
use crate::detection::{detect_objects, DetectionConfig};
use crate::error::{FitsPhotError, Result};
use crate::features::extract_features;
use crate::io::{load_fits, write_catalog};

use super::config::{FailurePolicy, FileOrdering, PipelineConfig};
use super::types::{NoOpReporter, PipelineSummary, ProgressReporter};

/// A discovered input file and its position in the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    /// 1-based, assigned in processing order.
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

/// List the regular files in `input_dir` whose name ends with `.fits`,
/// numbered in the requested order.
pub fn list_input_files(input_dir: &Path, ordering: FileOrdering) -> Result<Vec<InputFile>> {
    let entries =
        fs::read_dir(input_dir).map_err(|e| FitsPhotError::load(input_dir, e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(FITS_EXTENSION) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        files.push((name, path));
    }

    if ordering == FileOrdering::Name {
        files.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Ok(files
        .into_iter()
        .enumerate()
        .map(|(i, (name, path))| InputFile {
            index: i + 1,
            name,
            path,
        })
        .collect())
}

/// Load, detect and measure a single file.
pub fn process_file(file: &InputFile, detection: &DetectionConfig) -> Result<Vec<DetectedObject>> {
    let image = load_fits(&file.path)?;
    let labels = detect_objects(&image.data, image.sample_kind(), detection)?;
    Ok(extract_features(&labels, &image.data, file.index, &file.name))
}

/// Run the full pipeline with a progress reporter.
///
/// Files are processed one at a time; the catalog is written once, after the
/// last file. Under `FailurePolicy::Abort` the first per-file error is
/// returned and nothing is written.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineSummary> {
    config.validate()?;
    let files = list_input_files(&config.input_dir, config.ordering)?;
    info!(
        input_dir = %config.input_dir.display(),
        files = files.len(),
        ordering = %config.ordering,
        "Scanning input directory"
    );
    reporter.begin_run(files.len());

    let mut catalog = Catalog::new();
    let mut files_skipped = 0;

    for file in &files {
        reporter.begin_file(file.index, &file.name);
        info!(index = file.index, name = %file.name, "Processing file");

        match process_file(file, &config.detection) {
            Ok(objects) => {
                info!(index = file.index, objects = objects.len(), "Extracted features");
                reporter.finish_file(file.index, objects.len());
                catalog.extend(objects);
            }
            Err(e) if config.on_error == FailurePolicy::Skip => {
                warn!(index = file.index, name = %file.name, error = %e, "Skipping file");
                reporter.skip_file(file.index, &file.name, &e);
                files_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let objects = catalog.len();
    write_catalog(catalog, &config.output_path)?;
    info!(
        output = %config.output_path.display(),
        objects,
        "Catalog written"
    );

    Ok(PipelineSummary {
        files_processed: files.len() - files_skipped,
        files_skipped,
        objects,
        output_path: config.output_path.clone(),
    })
}

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    run_pipeline_reported(config, &NoOpReporter)
}
