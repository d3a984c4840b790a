pub mod config;
mod orchestrator;
mod types;

pub use config::{FailurePolicy, FileOrdering, PipelineConfig};
pub use orchestrator::{
    list_input_files, process_file, run_pipeline, run_pipeline_reported, InputFile,
};
pub use types::{NoOpReporter, PipelineSummary, ProgressReporter};
