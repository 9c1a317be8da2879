//! Pre-trained model artifacts
//!
//! Both artifacts are produced by the training pipeline and read as JSON
//! documents. Each carries a `format_version`; a file written for another
//! version is refused rather than guessed at.
//!
//! - [`classifier::ClassifierArtifact`]: linear binary classifier
//! - [`scaler::ScalerArtifact`]: per-feature scaling fitted on the training set

pub mod classifier;
pub mod error;
pub mod scaler;

pub use classifier::{ClassifierArtifact, LinearModel};
pub use error::ModelError;
pub use scaler::{ScalerArtifact, Scaling};

/// Artifact format version this build reads
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

fn check_version(found: u32) -> Result<(), ModelError> {
    if found == ARTIFACT_FORMAT_VERSION {
        Ok(())
    } else {
        Err(ModelError::UnsupportedVersion {
            found,
            supported: ARTIFACT_FORMAT_VERSION,
        })
    }
}

fn check_finite(name: &'static str, values: &[f64]) -> Result<(), ModelError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ModelError::NonFinite { name, index }),
        None => Ok(()),
    }
}

fn check_feature_names(names: Option<&[String]>, expected: usize) -> Result<(), ModelError> {
    let Some(names) = names else {
        return Ok(());
    };
    if names.len() != expected {
        return Err(ModelError::LengthMismatch {
            name: "feature_names_in",
            expected,
            found: names.len(),
        });
    }
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ModelError::DuplicateFeature(name.clone()));
        }
    }
    Ok(())
}
