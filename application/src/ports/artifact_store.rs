//! Artifact store port
//!
//! Defines how the application obtains the pre-trained classifier and the
//! fitted scaler. Adapters decide where the bytes come from and how they
//! are decoded; the use case validates what they return.

use risk_domain::{ClassifierArtifact, ModelError, ScalerArtifact, SchemaError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which of the two artifacts an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Classifier,
    Scaler,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Classifier => write!(f, "classifier"),
            ArtifactKind::Scaler => write!(f, "scaler"),
        }
    }
}

/// Errors that prevent the artifacts from being loaded.
///
/// All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{artifact} file not found: {}", path.display())]
    NotFound { artifact: ArtifactKind, path: PathBuf },

    #[error("Failed to read {artifact} file {}: {source}", path.display())]
    Io {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {artifact} file {}: {message}", path.display())]
    Malformed {
        artifact: ArtifactKind,
        path: PathBuf,
        message: String,
    },

    #[error("Invalid {artifact} in {}: {source}", path.display())]
    Invalid {
        artifact: ArtifactKind,
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    #[error("Classifier and scaler are incompatible: {0}")]
    Incompatible(String),

    #[error("Schema '{name}' is invalid: {source}")]
    Schema {
        name: String,
        #[source]
        source: SchemaError,
    },

    #[error("Schema columns not known to the classifier: {}", columns.join(", "))]
    SchemaDrift { columns: Vec<String> },
}

impl LoadError {
    /// Check if this error means a file was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// Port for reading model artifacts
pub trait ArtifactStore: Send + Sync {
    /// Read and decode the classifier at `path`
    fn load_classifier(&self, path: &Path) -> Result<ClassifierArtifact, LoadError>;

    /// Read and decode the scaler at `path`
    fn load_scaler(&self, path: &Path) -> Result<ScalerArtifact, LoadError>;
}
