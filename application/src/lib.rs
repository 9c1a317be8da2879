//! Application layer for diabetes-risk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod context;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ArtifactPaths;
pub use context::{InferenceContext, InferenceError};
pub use ports::artifact_store::{ArtifactKind, ArtifactStore, LoadError};
pub use use_cases::assess_risk::{AssessRiskError, AssessRiskUseCase};
pub use use_cases::load_artifacts::{LoadArtifactsInput, LoadArtifactsUseCase};
