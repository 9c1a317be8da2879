//! Load Artifacts use case
//!
//! Reads the classifier and scaler through an [`ArtifactStore`], validates
//! each one, and assembles the shared [`InferenceContext`].

use crate::config::ArtifactPaths;
use crate::context::InferenceContext;
use crate::ports::artifact_store::{ArtifactKind, ArtifactStore, LoadError};
use risk_domain::{DriftPolicy, FeatureSchema};
use std::sync::Arc;
use tracing::info;

/// Input for the LoadArtifacts use case
#[derive(Debug, Clone)]
pub struct LoadArtifactsInput {
    pub paths: ArtifactPaths,
    pub schema: FeatureSchema,
    pub drift: DriftPolicy,
}

impl LoadArtifactsInput {
    pub fn new(paths: ArtifactPaths, schema: FeatureSchema) -> Self {
        Self {
            paths,
            schema,
            drift: DriftPolicy::default(),
        }
    }

    pub fn with_drift_policy(mut self, drift: DriftPolicy) -> Self {
        self.drift = drift;
        self
    }
}

/// Use case for loading the model artifacts once at startup
pub struct LoadArtifactsUseCase<S: ArtifactStore> {
    store: Arc<S>,
}

impl<S: ArtifactStore> LoadArtifactsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn execute(&self, input: LoadArtifactsInput) -> Result<InferenceContext, LoadError> {
        let LoadArtifactsInput {
            paths,
            schema,
            drift,
        } = input;

        info!("Loading classifier from {}", paths.model.display());
        let classifier = self.store.load_classifier(&paths.model)?;
        classifier.validate().map_err(|source| LoadError::Invalid {
            artifact: ArtifactKind::Classifier,
            path: paths.model.clone(),
            source,
        })?;

        info!("Loading scaler from {}", paths.scaler.display());
        let scaler = self.store.load_scaler(&paths.scaler)?;
        scaler.validate().map_err(|source| LoadError::Invalid {
            artifact: ArtifactKind::Scaler,
            path: paths.scaler.clone(),
            source,
        })?;

        info!(
            "Loaded {} ({} features) and {} for schema '{}'",
            classifier.kind(),
            classifier.n_features(),
            scaler.kind(),
            schema.name
        );

        InferenceContext::from_parts(schema, classifier, scaler, drift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_domain::{ClassifierArtifact, ModelError, ScalerArtifact, SchemaVariant};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Store backed by a map; records every path it is asked for
    #[derive(Default)]
    struct MapStore {
        classifiers: HashMap<PathBuf, ClassifierArtifact>,
        scalers: HashMap<PathBuf, ScalerArtifact>,
        requested: Mutex<Vec<PathBuf>>,
    }

    impl ArtifactStore for MapStore {
        fn load_classifier(&self, path: &Path) -> Result<ClassifierArtifact, LoadError> {
            self.requested.lock().unwrap().push(path.to_path_buf());
            self.classifiers
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::NotFound {
                    artifact: ArtifactKind::Classifier,
                    path: path.to_path_buf(),
                })
        }

        fn load_scaler(&self, path: &Path) -> Result<ScalerArtifact, LoadError> {
            self.requested.lock().unwrap().push(path.to_path_buf());
            self.scalers
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::NotFound {
                    artifact: ArtifactKind::Scaler,
                    path: path.to_path_buf(),
                })
        }
    }

    fn paths() -> ArtifactPaths {
        ArtifactPaths::new("model.json", "scaler.json")
    }

    fn medication_store() -> MapStore {
        let mut store = MapStore::default();
        store.classifiers.insert(
            PathBuf::from("model.json"),
            ClassifierArtifact::logistic(vec![0.1; 8], -0.3),
        );
        store.scalers.insert(
            PathBuf::from("scaler.json"),
            ScalerArtifact::standard(vec![0.0; 8], vec![1.0; 8]),
        );
        store
    }

    #[test]
    fn test_load_success() {
        let use_case = LoadArtifactsUseCase::new(Arc::new(medication_store()));
        let ctx = use_case
            .execute(LoadArtifactsInput::new(
                paths(),
                SchemaVariant::Medication.schema(),
            ))
            .unwrap();
        assert_eq!(ctx.expected_columns().len(), 8);
        assert_eq!(ctx.drift_policy(), DriftPolicy::Drop);
    }

    #[test]
    fn test_missing_model_fails_before_scaler_is_read() {
        let store = Arc::new(MapStore::default());
        let use_case = LoadArtifactsUseCase::new(Arc::clone(&store));

        let err = use_case
            .execute(LoadArtifactsInput::new(
                paths(),
                SchemaVariant::Medication.schema(),
            ))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            *store.requested.lock().unwrap(),
            vec![PathBuf::from("model.json")]
        );
    }

    #[test]
    fn test_invalid_classifier_is_reported_with_path() {
        let mut store = medication_store();
        store.classifiers.insert(
            PathBuf::from("model.json"),
            ClassifierArtifact::logistic(vec![], 0.0),
        );
        let use_case = LoadArtifactsUseCase::new(Arc::new(store));

        let err = use_case
            .execute(LoadArtifactsInput::new(
                paths(),
                SchemaVariant::Medication.schema(),
            ))
            .unwrap_err();

        match err {
            LoadError::Invalid {
                artifact, source, ..
            } => {
                assert_eq!(artifact, ArtifactKind::Classifier);
                assert_eq!(source, ModelError::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_scaler_version() {
        let mut store = medication_store();
        let mut scaler = ScalerArtifact::standard(vec![0.0; 8], vec![1.0; 8]);
        scaler.format_version = 2;
        store.scalers.insert(PathBuf::from("scaler.json"), scaler);
        let use_case = LoadArtifactsUseCase::new(Arc::new(store));

        let err = use_case
            .execute(LoadArtifactsInput::new(
                paths(),
                SchemaVariant::Medication.schema(),
            ))
            .unwrap_err();

        assert!(matches!(
            err,
            LoadError::Invalid {
                artifact: ArtifactKind::Scaler,
                source: ModelError::UnsupportedVersion { found: 2, .. },
                ..
            }
        ));
    }
}
