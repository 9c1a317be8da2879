//! JSON artifact store
//!
//! Reads each artifact as a single JSON document. Decoding only checks
//! the document's shape; semantic checks (version, lengths, finite values)
//! are left to the use case so every store gets them.

use risk_application::{ArtifactKind, ArtifactStore, LoadError};
use risk_domain::{ClassifierArtifact, ScalerArtifact};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// [`ArtifactStore`] reading JSON files from the local file system
#[derive(Debug, Clone, Default)]
pub struct JsonArtifactStore;

impl JsonArtifactStore {
    pub fn new() -> Self {
        Self
    }

    fn read<T: DeserializeOwned>(artifact: ArtifactKind, path: &Path) -> Result<T, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::NotFound {
                    artifact,
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    artifact,
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
            artifact,
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl ArtifactStore for JsonArtifactStore {
    fn load_classifier(&self, path: &Path) -> Result<ClassifierArtifact, LoadError> {
        Self::read(ArtifactKind::Classifier, path)
    }

    fn load_scaler(&self, path: &Path) -> Result<ScalerArtifact, LoadError> {
        Self::read(ArtifactKind::Scaler, path)
    }
}
