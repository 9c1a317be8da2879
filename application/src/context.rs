//! Inference context
//!
//! [`InferenceContext`] bundles everything a prediction needs: the schema,
//! the fitted scaler and classifier, and the column order they agree on.
//! It is built once at startup and never mutated, so it can be shared
//! behind an `Arc` by every form session.

use crate::ports::artifact_store::LoadError;
use risk_domain::{
    ClassifierArtifact, DriftPolicy, EncodeError, FeatureEncoder, FeatureSchema, FeatureVector,
    ModelError, PredictionResult, RawInput, ScalerArtifact,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while scoring a single feature vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Scaler expects {expected} features, got {actual}")]
    ScalerShape { expected: usize, actual: usize },

    #[error("Classifier expects {expected} features, got {actual}")]
    ClassifierShape { expected: usize, actual: usize },

    #[error("Model error: {0}")]
    Model(ModelError),
}

/// Loaded, cross-checked artifacts plus the schema that feeds them
#[derive(Debug, Clone)]
pub struct InferenceContext {
    schema: FeatureSchema,
    classifier: ClassifierArtifact,
    scaler: ScalerArtifact,
    expected_columns: Vec<String>,
    drift: DriftPolicy,
}

impl InferenceContext {
    /// Assemble a context from individually valid artifacts.
    ///
    /// Checks that the scaler and classifier agree with each other and
    /// resolves the column order: the classifier's recorded feature names,
    /// then the scaler's, then the schema's natural order when neither
    /// recorded any.
    pub fn from_parts(
        schema: FeatureSchema,
        classifier: ClassifierArtifact,
        scaler: ScalerArtifact,
        drift: DriftPolicy,
    ) -> Result<Self, LoadError> {
        schema.validate().map_err(|source| LoadError::Schema {
            name: schema.name.clone(),
            source,
        })?;

        if scaler.n_features() != classifier.n_features() {
            return Err(LoadError::Incompatible(format!(
                "scaler has {} features, classifier has {}",
                scaler.n_features(),
                classifier.n_features()
            )));
        }

        if let (Some(scaler_names), Some(model_names)) =
            (scaler.feature_names(), classifier.feature_names())
        {
            if scaler_names.len() != model_names.len() {
                return Err(LoadError::Incompatible(format!(
                    "scaler records {} feature names, classifier records {}",
                    scaler_names.len(),
                    model_names.len()
                )));
            }
            if let Some(i) = (0..model_names.len()).find(|&i| scaler_names[i] != model_names[i]) {
                return Err(LoadError::Incompatible(format!(
                    "feature {} is '{}' in the scaler but '{}' in the classifier",
                    i, scaler_names[i], model_names[i]
                )));
            }
        }

        let expected_columns = match (classifier.feature_names(), scaler.feature_names()) {
            (Some(names), _) => names.to_vec(),
            // Scaler fitted on named columns, classifier on a bare matrix
            (None, Some(names)) => {
                if names.len() != classifier.n_features() {
                    return Err(LoadError::Incompatible(format!(
                        "scaler records {} feature names, classifier expects {} features",
                        names.len(),
                        classifier.n_features()
                    )));
                }
                debug!("Classifier records no feature names; using the scaler's");
                names.to_vec()
            }
            (None, None) => {
                let columns = schema.columns();
                if columns.len() != classifier.n_features() {
                    return Err(LoadError::Incompatible(format!(
                        "classifier records no feature names and expects {} features, \
                         but schema '{}' produces {}",
                        classifier.n_features(),
                        schema.name,
                        columns.len()
                    )));
                }
                columns
            }
        };

        let drifted = schema.drift_against(&expected_columns);
        if !drifted.is_empty() {
            match drift {
                DriftPolicy::Reject => return Err(LoadError::SchemaDrift { columns: drifted }),
                DriftPolicy::Drop => warn!(
                    "Schema '{}' produces {} column(s) the classifier does not know; \
                     they will be dropped: {}",
                    schema.name,
                    drifted.len(),
                    drifted.join(", ")
                ),
            }
        }

        let schema_columns = schema.columns();
        let unfed = expected_columns
            .iter()
            .filter(|c| !schema_columns.contains(c))
            .count();
        if unfed > 0 {
            info!(
                "{} classifier column(s) are not produced by schema '{}' and stay zero",
                unfed, schema.name
            );
        }

        Ok(Self {
            schema,
            classifier,
            scaler,
            expected_columns,
            drift,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn classifier(&self) -> &ClassifierArtifact {
        &self.classifier
    }

    pub fn scaler(&self) -> &ScalerArtifact {
        &self.scaler
    }

    /// Column order every feature vector must follow
    pub fn expected_columns(&self) -> &[String] {
        &self.expected_columns
    }

    pub fn drift_policy(&self) -> DriftPolicy {
        self.drift
    }

    pub fn encoder(&self) -> FeatureEncoder<'_> {
        FeatureEncoder::new(&self.schema).with_drift_policy(self.drift)
    }

    /// Encode form input into the classifier's column order
    pub fn encode(&self, input: &RawInput) -> Result<FeatureVector, EncodeError> {
        self.encoder().encode(input, &self.expected_columns)
    }

    /// Scale, then classify
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        let scaled = self
            .scaler
            .transform(vector.values())
            .map_err(|e| match e {
                ModelError::ShapeMismatch { expected, actual } => {
                    InferenceError::ScalerShape { expected, actual }
                }
                other => InferenceError::Model(other),
            })?;

        let result = self.classifier.classify(&scaled).map_err(|e| match e {
            ModelError::ShapeMismatch { expected, actual } => {
                InferenceError::ClassifierShape { expected, actual }
            }
            other => InferenceError::Model(other),
        })?;

        debug!(
            "Predicted {} (probability {:?})",
            result.label, result.probability
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_domain::{FieldSpec, FieldValue, RiskLabel, SchemaVariant};

    fn two_field_schema() -> FeatureSchema {
        FeatureSchema::new(
            "tiny",
            vec![
                FieldSpec::one_hot("A1Cresult", "A1C", &["None", "Norm", ">7"], Some("None")),
                FieldSpec::count("num_medications", "Meds", 0, 50, 10),
            ],
        )
    }

    fn names(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expected_columns_from_classifier_names() {
        let classifier = ClassifierArtifact::logistic(vec![1.0, 0.5, 0.1], 0.0)
            .with_feature_names(names(&["num_medications", "A1Cresult_>7", "A1Cresult_Norm"]));
        let scaler = ScalerArtifact::standard(vec![0.0; 3], vec![1.0; 3]);

        let ctx =
            InferenceContext::from_parts(two_field_schema(), classifier, scaler, DriftPolicy::Drop)
                .unwrap();
        assert_eq!(
            ctx.expected_columns(),
            names(&["num_medications", "A1Cresult_>7", "A1Cresult_Norm"]).as_slice()
        );
    }

    #[test]
    fn test_expected_columns_fall_back_to_schema() {
        let schema = SchemaVariant::Medication.schema();
        let classifier = ClassifierArtifact::logistic(vec![0.1; 8], 0.0);
        let scaler = ScalerArtifact::standard(vec![0.0; 8], vec![1.0; 8]);

        let ctx =
            InferenceContext::from_parts(schema.clone(), classifier, scaler, DriftPolicy::Drop)
                .unwrap();
        assert_eq!(ctx.expected_columns(), schema.columns().as_slice());
    }

    #[test]
    fn test_unnamed_classifier_with_wrong_width_is_incompatible() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 5], 0.0);
        let scaler = ScalerArtifact::standard(vec![0.0; 5], vec![1.0; 5]);

        let err = InferenceContext::from_parts(
            SchemaVariant::Medication.schema(),
            classifier,
            scaler,
            DriftPolicy::Drop,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Incompatible(_)));
    }

    #[test]
    fn test_scaler_width_mismatch_is_incompatible() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 3], 0.0);
        let scaler = ScalerArtifact::standard(vec![0.0; 2], vec![1.0; 2]);

        let err =
            InferenceContext::from_parts(two_field_schema(), classifier, scaler, DriftPolicy::Drop)
                .unwrap_err();
        assert!(matches!(err, LoadError::Incompatible(_)));
    }

    #[test]
    fn test_scaler_names_must_match_classifier_names() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 3], 0.0)
            .with_feature_names(names(&["A1Cresult_Norm", "A1Cresult_>7", "num_medications"]));
        let scaler = ScalerArtifact::standard(vec![0.0; 3], vec![1.0; 3])
            .with_feature_names(names(&["A1Cresult_>7", "A1Cresult_Norm", "num_medications"]));

        let err =
            InferenceContext::from_parts(two_field_schema(), classifier, scaler, DriftPolicy::Drop)
                .unwrap_err();
        assert!(matches!(err, LoadError::Incompatible(ref m) if m.contains("feature 0")));
    }

    #[test]
    fn test_scaler_names_used_when_classifier_unnamed() {
        let schema = FeatureSchema::new(
            "pair",
            vec![
                FieldSpec::count("a", "A", 0, 100, 0),
                FieldSpec::count("b", "B", 0, 100, 0),
            ],
        );
        let classifier = ClassifierArtifact::logistic(vec![1.0, 0.0], 0.0);
        let scaler = ScalerArtifact::standard(vec![50.0, 0.0], vec![1.0, 1.0])
            .with_feature_names(names(&["b", "a"]));

        let ctx = InferenceContext::from_parts(schema, classifier, scaler, DriftPolicy::Drop)
            .unwrap();
        assert_eq!(ctx.expected_columns(), names(&["b", "a"]).as_slice());

        // b = 50 centres to 0 in the first (weighted) column
        let input = RawInput::new()
            .with("a", FieldValue::Count(90))
            .with("b", FieldValue::Count(50));
        let vector = ctx.encode(&input).unwrap();
        assert_eq!(vector.values(), &[50.0, 90.0]);
        assert_eq!(ctx.predict(&vector).unwrap().label, RiskLabel::Low);
    }

    #[test]
    fn test_drift_rejected_at_load_when_strict() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 2], 0.0)
            .with_feature_names(names(&["A1Cresult_Norm", "num_medications"]));
        let scaler = ScalerArtifact::standard(vec![0.0; 2], vec![1.0; 2]);

        let err = InferenceContext::from_parts(
            two_field_schema(),
            classifier,
            scaler,
            DriftPolicy::Reject,
        )
        .unwrap_err();
        match err {
            LoadError::SchemaDrift { columns } => assert_eq!(columns, names(&["A1Cresult_>7"])),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_drift_tolerated_by_default() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 2], 0.0)
            .with_feature_names(names(&["A1Cresult_Norm", "num_medications"]));
        let scaler = ScalerArtifact::standard(vec![0.0; 2], vec![1.0; 2]);

        let ctx =
            InferenceContext::from_parts(two_field_schema(), classifier, scaler, DriftPolicy::Drop)
                .unwrap();
        let input = RawInput::new()
            .with("A1Cresult", FieldValue::choice(">7"))
            .with("num_medications", FieldValue::Count(3));
        let vector = ctx.encode(&input).unwrap();
        assert_eq!(vector.values(), &[0.0, 3.0]);
        assert_eq!(vector.dropped(), &["A1Cresult_>7".to_string()]);
    }

    #[test]
    fn test_predict_scales_before_classifying() {
        let classifier = ClassifierArtifact::logistic(vec![2.0], 0.0)
            .with_feature_names(names(&["num_medications"]));
        // (x - 10) / 5: 5 meds -> -1.0, 20 meds -> 2.0
        let scaler = ScalerArtifact::standard(vec![10.0], vec![5.0]);
        let schema = FeatureSchema::new(
            "meds",
            vec![FieldSpec::count("num_medications", "Meds", 0, 50, 10)],
        );
        let ctx = InferenceContext::from_parts(schema, classifier, scaler, DriftPolicy::Drop)
            .unwrap();

        let low = ctx
            .predict(&ctx.encode(&RawInput::new().with("num_medications", FieldValue::Count(5))).unwrap())
            .unwrap();
        assert_eq!(low.label, RiskLabel::Low);

        let high = ctx
            .predict(&ctx.encode(&RawInput::new().with("num_medications", FieldValue::Count(20))).unwrap())
            .unwrap();
        assert_eq!(high.label, RiskLabel::High);
        let p = high.probability.unwrap();
        assert!((p - 1.0 / (1.0 + (-4.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let classifier = ClassifierArtifact::logistic(vec![0.1; 8], 0.0);
        let scaler = ScalerArtifact::standard(vec![0.0; 8], vec![1.0; 8]);
        let ctx = InferenceContext::from_parts(
            SchemaVariant::Medication.schema(),
            classifier,
            scaler,
            DriftPolicy::Drop,
        )
        .unwrap();

        let short = FeatureVector::new(names(&["age"]), vec![1.0]);
        assert_eq!(
            ctx.predict(&short).unwrap_err(),
            InferenceError::ScalerShape {
                expected: 8,
                actual: 1
            }
        );
    }

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InferenceContext>();
    }
}
