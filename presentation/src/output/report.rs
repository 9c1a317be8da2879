//! Risk report
//!
//! Fixed advisory text for a prediction. Pure: the same result always
//! renders the same report.

use risk_domain::{PredictionResult, RiskLabel};
use serde::Serialize;

const HIGH_RISK_ADVICE: [&str; 4] = [
    "Maintain a low-sugar diet (less rice, sweets)",
    "Walk 30 minutes daily",
    "Regular A1C and glucose checkups",
    "Reduce processed and oily food",
];

const LOW_RISK_ADVICE: [&str; 2] = [
    "Stay active and keep your diet balanced",
    "Keep up routine checkups",
];

/// Rendered outcome of one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub label: RiskLabel,
    /// Probability of high risk, when the classifier provides one
    pub probability: Option<f64>,
    pub headline: String,
    pub advice: Vec<String>,
}

impl RiskReport {
    pub fn from_result(result: &PredictionResult) -> Self {
        let percent = result
            .confidence_percent()
            .map(|p| format!("{:.2}%", p));

        let (headline, advice) = match result.label {
            RiskLabel::High => (
                match percent {
                    Some(p) => format!(
                        "High risk of requiring diabetes medication ({} probability).",
                        p
                    ),
                    None => "High risk of requiring diabetes medication.".to_string(),
                },
                &HIGH_RISK_ADVICE[..],
            ),
            RiskLabel::Low => (
                match percent {
                    Some(p) => format!(
                        "You are currently at low risk ({} confidence). Keep up your lifestyle!",
                        p
                    ),
                    None => "You are currently at low risk. Keep up your lifestyle!".to_string(),
                },
                &LOW_RISK_ADVICE[..],
            ),
        };

        Self {
            label: result.label,
            probability: result.probability,
            headline,
            advice: advice.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_high(&self) -> bool {
        self.label.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_headline() {
        let report =
            RiskReport::from_result(&PredictionResult::with_probability(RiskLabel::High, 0.73214));
        assert_eq!(
            report.headline,
            "High risk of requiring diabetes medication (73.21% probability)."
        );
        assert_eq!(report.advice.len(), 4);
        assert_eq!(report.advice[1], "Walk 30 minutes daily");
    }

    #[test]
    fn test_low_risk_reports_complement() {
        let report =
            RiskReport::from_result(&PredictionResult::with_probability(RiskLabel::Low, 0.19));
        assert_eq!(
            report.headline,
            "You are currently at low risk (81.00% confidence). Keep up your lifestyle!"
        );
        assert!(!report.is_high());
    }

    #[test]
    fn test_no_probability_omits_percentage() {
        let high = RiskReport::from_result(&PredictionResult::new(RiskLabel::High));
        assert_eq!(high.headline, "High risk of requiring diabetes medication.");

        let low = RiskReport::from_result(&PredictionResult::new(RiskLabel::Low));
        assert!(!low.headline.contains('%'));
    }

    #[test]
    fn test_rendering_is_stable() {
        let result = PredictionResult::with_probability(RiskLabel::High, 0.5000001);
        assert_eq!(RiskReport::from_result(&result), RiskReport::from_result(&result));
    }

    #[test]
    fn test_json_shape() {
        let report = RiskReport::from_result(&PredictionResult::new(RiskLabel::Low));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["label"], "low");
        assert!(value["probability"].is_null());
        assert_eq!(value["advice"].as_array().unwrap().len(), 2);
    }
}
