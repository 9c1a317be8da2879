//! Prediction outcome (Value Objects)

use serde::{Deserialize, Serialize};

/// Binary risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    /// `High` iff the decision value is strictly positive
    pub fn from_decision(decision: f64) -> Self {
        if decision > 0.0 {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }

    /// Class code used at training time
    pub fn code(&self) -> u8 {
        match self {
            RiskLabel::Low => 0,
            RiskLabel::High => 1,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLabel::High)
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLabel::Low => write!(f, "low"),
            RiskLabel::High => write!(f, "high"),
        }
    }
}

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// Probability of [`RiskLabel::High`], when the classifier provides one
    pub probability: Option<f64>,
}

impl PredictionResult {
    pub fn new(label: RiskLabel) -> Self {
        Self {
            label,
            probability: None,
        }
    }

    pub fn with_probability(label: RiskLabel, probability: f64) -> Self {
        Self {
            label,
            probability: Some(probability),
        }
    }

    /// Probability of the predicted label, as a percentage
    pub fn confidence_percent(&self) -> Option<f64> {
        self.probability.map(|p| match self.label {
            RiskLabel::High => p * 100.0,
            RiskLabel::Low => 100.0 - p * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_codes() {
        assert_eq!(RiskLabel::Low.code(), 0);
        assert_eq!(RiskLabel::High.code(), 1);
    }

    #[test]
    fn test_from_decision() {
        assert_eq!(RiskLabel::from_decision(0.01), RiskLabel::High);
        assert_eq!(RiskLabel::from_decision(0.0), RiskLabel::Low);
        assert_eq!(RiskLabel::from_decision(-3.0), RiskLabel::Low);
    }

    #[test]
    fn test_confidence_percent() {
        let high = PredictionResult::with_probability(RiskLabel::High, 0.75);
        assert_eq!(high.confidence_percent(), Some(75.0));

        let low = PredictionResult::with_probability(RiskLabel::Low, 0.25);
        assert_eq!(low.confidence_percent(), Some(75.0));

        assert_eq!(PredictionResult::new(RiskLabel::Low).confidence_percent(), None);
    }

    #[test]
    fn test_serialize_lowercase_label() {
        let json = serde_json::to_string(&PredictionResult::new(RiskLabel::High)).unwrap();
        assert_eq!(json, r#"{"label":"high","probability":null}"#);
    }
}
