//! Fitted binary classifier

use super::error::ModelError;
use super::{ARTIFACT_FORMAT_VERSION, check_feature_names, check_finite, check_version};
use crate::prediction::{PredictionResult, RiskLabel};
use serde::{Deserialize, Serialize};

/// Fitted linear model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinearModel {
    /// Probabilistic: `sigmoid(w·x + b)`
    LogisticRegression { coef: Vec<f64>, intercept: f64 },
    /// Margin only, no probability
    LinearSvc { coef: Vec<f64>, intercept: f64 },
}

impl LinearModel {
    fn coef(&self) -> &[f64] {
        match self {
            LinearModel::LogisticRegression { coef, .. } | LinearModel::LinearSvc { coef, .. } => {
                coef
            }
        }
    }

    fn intercept(&self) -> f64 {
        match self {
            LinearModel::LogisticRegression { intercept, .. }
            | LinearModel::LinearSvc { intercept, .. } => *intercept,
        }
    }
}

/// A pre-trained classifier (Entity, immutable after load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    /// Column names seen at training time, in training order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
    #[serde(flatten)]
    pub model: LinearModel,
}

impl ClassifierArtifact {
    pub fn logistic(coef: Vec<f64>, intercept: f64) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names_in: None,
            model: LinearModel::LogisticRegression { coef, intercept },
        }
    }

    pub fn linear_svc(coef: Vec<f64>, intercept: f64) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names_in: None,
            model: LinearModel::LinearSvc { coef, intercept },
        }
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names_in = Some(names);
        self
    }

    pub fn kind(&self) -> &'static str {
        match self.model {
            LinearModel::LogisticRegression { .. } => "logistic_regression",
            LinearModel::LinearSvc { .. } => "linear_svc",
        }
    }

    pub fn n_features(&self) -> usize {
        self.model.coef().len()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }

    pub fn supports_probability(&self) -> bool {
        matches!(self.model, LinearModel::LogisticRegression { .. })
    }

    /// Check version and internal consistency
    pub fn validate(&self) -> Result<(), ModelError> {
        check_version(self.format_version)?;

        let coef = self.model.coef();
        if coef.is_empty() {
            return Err(ModelError::Empty);
        }
        check_finite("coef", coef)?;
        if !self.model.intercept().is_finite() {
            return Err(ModelError::NonFinite {
                name: "intercept",
                index: 0,
            });
        }
        check_feature_names(self.feature_names(), coef.len())
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, row: &[f64]) -> Result<f64, ModelError> {
        let coef = self.model.coef();
        if row.len() != coef.len() {
            return Err(ModelError::ShapeMismatch {
                expected: coef.len(),
                actual: row.len(),
            });
        }
        let dot: f64 = coef.iter().zip(row).map(|(w, x)| w * x).sum();
        Ok(dot + self.model.intercept())
    }

    /// Predicted class: high iff the decision value is positive
    pub fn predict(&self, row: &[f64]) -> Result<RiskLabel, ModelError> {
        let decision = self.decision_function(row)?;
        Ok(RiskLabel::from_decision(decision))
    }

    /// Probability of the high-risk class, when the model provides one
    pub fn predict_proba(&self, row: &[f64]) -> Result<Option<f64>, ModelError> {
        let decision = self.decision_function(row)?;
        Ok(match self.model {
            LinearModel::LogisticRegression { .. } => Some(sigmoid(decision)),
            LinearModel::LinearSvc { .. } => None,
        })
    }

    /// Label and probability from a single pass
    pub fn classify(&self, row: &[f64]) -> Result<PredictionResult, ModelError> {
        let decision = self.decision_function(row)?;
        let label = RiskLabel::from_decision(decision);
        Ok(match self.model {
            LinearModel::LogisticRegression { .. } => {
                PredictionResult::with_probability(label, sigmoid(decision))
            }
            LinearModel::LinearSvc { .. } => PredictionResult::new(label),
        })
    }
}

/// Logistic function, split by sign to stay finite for large |z|
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
