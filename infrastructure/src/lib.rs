//! Infrastructure layer for diabetes-risk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifacts;
pub mod config;
pub mod schema;

// Re-export commonly used types
pub use artifacts::JsonArtifactStore;
pub use config::{
    ConfigLoader, FileArtifactsConfig, FileConfig, FileEncoderConfig, FileFormConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use schema::{SchemaFileError, SchemaLoader};
