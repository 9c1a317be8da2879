//! Artifact location configuration from TOML (`[artifacts]` section)

use risk_application::config::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE};
use risk_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw artifact paths from TOML
///
/// # Example
///
/// ```toml
/// [artifacts]
/// model = "models/diabetes_prediction_model_final.json"
/// scaler = "models/diabetes_scaler_final.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileArtifactsConfig {
    /// Serialized classifier
    pub model: String,
    /// Serialized feature scaler
    pub scaler: String,
}

impl Default for FileArtifactsConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_FILE.to_string(),
            scaler: DEFAULT_SCALER_FILE.to_string(),
        }
    }
}

impl FileArtifactsConfig {
    pub fn to_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.model, &self.scaler)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        [("artifacts.model", &self.model), ("artifacts.scaler", &self.scaler)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyPath {
                    field: field.to_string(),
                },
                message: format!("{}: path cannot be empty", field),
            })
            .collect()
    }
}
