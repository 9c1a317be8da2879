//! Feature schema files
//!
//! Custom schemas are TOML documents deserialized straight into
//! [`FeatureSchema`](risk_domain::FeatureSchema).

mod loader;

pub use loader::{SchemaFileError, SchemaLoader};
