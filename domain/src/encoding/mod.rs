//! Feature encoding
//!
//! - [`encoder::FeatureEncoder`]: schema-driven encoding and column alignment
//! - [`feature_vector::FeatureVector`]: the aligned numeric row
//! - [`error::EncodeError`]: rejected input

pub mod encoder;
pub mod error;
pub mod feature_vector;

pub use encoder::{DriftPolicy, FeatureEncoder};
pub use error::EncodeError;
pub use feature_vector::FeatureVector;
