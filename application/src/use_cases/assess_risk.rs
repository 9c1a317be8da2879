//! Assess Risk use case
//!
//! One form submission: encode the input, scale it, classify it.

use crate::context::{InferenceContext, InferenceError};
use risk_domain::{EncodeError, PredictionResult, RawInput};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors that can occur while assessing one submission
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessRiskError {
    #[error("Invalid input: {0}")]
    Encode(#[from] EncodeError),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Use case for scoring a single form submission
#[derive(Clone)]
pub struct AssessRiskUseCase {
    context: Arc<InferenceContext>,
}

impl AssessRiskUseCase {
    pub fn new(context: Arc<InferenceContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &InferenceContext {
        &self.context
    }

    pub fn execute(&self, input: &RawInput) -> Result<PredictionResult, AssessRiskError> {
        trace!("Assessing input: {:?}", input);

        let vector = self.context.encode(input)?;
        if !vector.dropped().is_empty() {
            warn!(
                "Dropped column(s) unknown to the classifier: {}",
                vector.dropped().join(", ")
            );
        }
        debug!("Encoded {} features", vector.len());

        Ok(self.context.predict(&vector)?)
    }
}
