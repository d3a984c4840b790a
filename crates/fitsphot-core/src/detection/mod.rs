pub mod components;
pub mod config;
pub mod objects;
pub mod threshold;

pub use components::{label_components, LabelMap};
pub use config::{Connectivity, DetectionConfig, ThresholdMethod};
pub use objects::{detect_objects, foreground_mask};
pub use threshold::{compute_threshold, otsu_threshold, SampleKind};
