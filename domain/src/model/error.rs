//! Model artifact errors

use thiserror::Error;

/// Problems with a loaded artifact or with the data fed to it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unsupported artifact format version {found} (this build reads version {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Artifact has no parameters")]
    Empty,

    #[error("Parameter '{name}' has {found} entries, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Parameter '{name}' has a non-finite value at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("Scale for feature {index} is zero")]
    ZeroScale { index: usize },

    #[error("Feature name '{0}' appears more than once")]
    DuplicateFeature(String),

    #[error("Expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
