//! Fitted feature scaler

use super::error::ModelError;
use super::{ARTIFACT_FORMAT_VERSION, check_feature_names, check_finite, check_version};
use serde::{Deserialize, Serialize};

/// Fitted scaling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaling {
    /// `(x - mean) / scale`
    StandardScaler { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMaxScaler { min: Vec<f64>, scale: Vec<f64> },
}

/// A pre-fitted scaler (Entity, immutable after load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub format_version: u32,
    /// Column names seen at fit time, if the scaler recorded them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
    #[serde(flatten)]
    pub scaling: Scaling,
}

impl ScalerArtifact {
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names_in: None,
            scaling: Scaling::StandardScaler { mean, scale },
        }
    }

    pub fn min_max(min: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names_in: None,
            scaling: Scaling::MinMaxScaler { min, scale },
        }
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names_in = Some(names);
        self
    }

    pub fn kind(&self) -> &'static str {
        match self.scaling {
            Scaling::StandardScaler { .. } => "standard_scaler",
            Scaling::MinMaxScaler { .. } => "min_max_scaler",
        }
    }

    pub fn n_features(&self) -> usize {
        match &self.scaling {
            Scaling::StandardScaler { mean, .. } => mean.len(),
            Scaling::MinMaxScaler { min, .. } => min.len(),
        }
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }

    /// Check version and internal consistency
    pub fn validate(&self) -> Result<(), ModelError> {
        check_version(self.format_version)?;

        let (offset_name, offset, scale) = match &self.scaling {
            Scaling::StandardScaler { mean, scale } => ("mean", mean, scale),
            Scaling::MinMaxScaler { min, scale } => ("min", min, scale),
        };
        if offset.is_empty() {
            return Err(ModelError::Empty);
        }
        if scale.len() != offset.len() {
            return Err(ModelError::LengthMismatch {
                name: "scale",
                expected: offset.len(),
                found: scale.len(),
            });
        }
        check_finite(offset_name, offset)?;
        check_finite("scale", scale)?;
        if let Scaling::StandardScaler { scale, .. } = &self.scaling
            && let Some(index) = scale.iter().position(|s| *s == 0.0)
        {
            return Err(ModelError::ZeroScale { index });
        }
        check_feature_names(self.feature_names(), offset.len())
    }

    /// Scale one row
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        if row.len() != self.n_features() {
            return Err(ModelError::ShapeMismatch {
                expected: self.n_features(),
                actual: row.len(),
            });
        }

        let scaled = match &self.scaling {
            Scaling::StandardScaler { mean, scale } => row
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            Scaling::MinMaxScaler { min, scale } => row
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_transform() {
        let scaler = ScalerArtifact::standard(vec![1.0, 10.0], vec![2.0, 5.0]);
        assert_eq!(scaler.transform(&[3.0, 0.0]).unwrap(), vec![1.0, -2.0]);
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = ScalerArtifact::min_max(vec![0.0, -0.5], vec![0.1, 0.05]);
        let out = scaler.transform(&[5.0, 10.0]).unwrap();
        assert!((out[0] - 0.5).abs() < 1e-12);
        assert!((out[1] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_shape_mismatch() {
        let scaler = ScalerArtifact::standard(vec![0.0; 3], vec![1.0; 3]);
        assert_eq!(
            scaler.transform(&[1.0, 2.0]).unwrap_err(),
            ModelError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_validate_zero_scale() {
        let scaler = ScalerArtifact::standard(vec![0.0, 0.0], vec![1.0, 0.0]);
        assert_eq!(scaler.validate(), Err(ModelError::ZeroScale { index: 1 }));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let scaler = ScalerArtifact::standard(vec![0.0, 0.0], vec![1.0]);
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::LengthMismatch { name: "scale", .. })
        ));
    }

    #[test]
    fn test_validate_version() {
        let mut scaler = ScalerArtifact::standard(vec![0.0], vec![1.0]);
        scaler.format_version = 7;
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::UnsupportedVersion { found: 7, .. })
        ));
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{
            "format_version": 1,
            "kind": "standard_scaler",
            "mean": [4.5, 1.0],
            "scale": [2.0, 0.5],
            "feature_names_in": ["age", "gender"]
        }"#;
        let scaler: ScalerArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(scaler.kind(), "standard_scaler");
        assert_eq!(scaler.n_features(), 2);
        assert_eq!(
            scaler.feature_names(),
            Some(&["age".to_string(), "gender".to_string()][..])
        );
        assert!(scaler.validate().is_ok());
    }
}
