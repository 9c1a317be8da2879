//! Use cases
//!
//! - [`load_artifacts`]: read and cross-check the model artifacts at startup
//! - [`assess_risk`]: score one form submission

pub mod assess_risk;
pub mod load_artifacts;
