use std::path::PathBuf;

use crate::error::FitsPhotError;

/// Progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// Input files have been enumerated.
    fn begin_run(&self, _total_files: usize) {}

    /// Processing of file `index` (1-based) has started.
    fn begin_file(&self, _index: usize, _name: &str) {}

    /// File `index` produced `objects` records.
    fn finish_file(&self, _index: usize, _objects: usize) {}

    /// File `index` failed and was left out of the catalog.
    fn skip_file(&self, _index: usize, _name: &str, _error: &FitsPhotError) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub objects: usize,
    pub output_path: PathBuf,
}
