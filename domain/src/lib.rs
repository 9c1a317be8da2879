//! Domain layer for diabetes-risk
//!
//! This crate contains the form model, the declarative feature schema,
//! the encoder and the pre-trained model artifacts. It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Feature schema
//!
//! A [`FeatureSchema`] lists the form fields in column order and says how
//! each is encoded (ordinal code, one-hot indicators, flag, count). Both
//! built-in form variants are just schemas ([`SchemaVariant`]).
//!
//! ## Encoding
//!
//! [`FeatureEncoder`] turns a [`RawInput`] into a [`FeatureVector`] aligned
//! to the column order the classifier was trained on. Columns the input
//! does not produce are zero; columns the classifier does not know are
//! handled by the [`DriftPolicy`].
//!
//! ## Artifacts
//!
//! [`ScalerArtifact`] and [`ClassifierArtifact`] are fitted elsewhere and
//! only ever read here.

pub mod config;
pub mod encoding;
pub mod form;
pub mod model;
pub mod prediction;
pub mod schema;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use encoding::{DriftPolicy, EncodeError, FeatureEncoder, FeatureVector};
pub use form::{FieldValue, RawInput};
pub use model::{
    ARTIFACT_FORMAT_VERSION, ClassifierArtifact, LinearModel, ModelError, ScalerArtifact, Scaling,
};
pub use prediction::{PredictionResult, RiskLabel};
pub use schema::{FeatureSchema, FieldKind, FieldSpec, OrdinalChoice, SchemaError, SchemaVariant};
