//! Artifact file locations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default classifier file name, relative to the working directory
pub const DEFAULT_MODEL_FILE: &str = "diabetes_prediction_model_final.json";

/// Default scaler file name, relative to the working directory
pub const DEFAULT_SCALER_FILE: &str = "diabetes_scaler_final.json";

/// Where the two artifacts live on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, scaler: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            scaler: scaler.into(),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.model, PathBuf::from(DEFAULT_MODEL_FILE));
        assert_eq!(paths.scaler, PathBuf::from(DEFAULT_SCALER_FILE));
    }
}
