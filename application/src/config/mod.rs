//! Application-level configuration.
//!
//! - [`ArtifactPaths`]: where the classifier and scaler files live

pub mod artifact_paths;

pub use artifact_paths::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE};
