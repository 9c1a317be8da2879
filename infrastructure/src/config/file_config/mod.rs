//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod artifacts;
mod encoder;
mod form;
mod output;

pub use artifacts::FileArtifactsConfig;
pub use encoder::FileEncoderConfig;
pub use form::FileFormConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use risk_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classifier and scaler locations
    pub artifacts: FileArtifactsConfig,
    /// Schema selection and drift policy
    pub encoder: FileEncoderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive form settings
    pub form: FileFormConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty artifact paths
    /// 2. Unknown schema names and schema/schema_file conflicts
    /// 3. Unknown drift policies
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.artifacts.validate());
        issues.extend(self.encoder.parse_schema().1);
        issues.extend(self.encoder.parse_drift().1);

        issues
    }
}
