//! DelayModel: preprocessing, training, prediction, and model lifecycle
//!
//! The model readiness is an explicit tagged state: Unloaded (no usable
//! classifier), Loaded (restored from disk at construction), or Trained
//! (fit during this process). A bootstrap-training policy flag controls
//! whether a first prediction on an Unloaded model may train itself from
//! the canonical on-disk dataset.

use crate::classifier::LogisticClassifier;
use crate::dataset;
use crate::error::ModelError;
use crate::models::{FeatureMatrix, LabelVector, RawFlightRecord};
use crate::preprocessing;
use crate::store::ModelStore;
use parking_lot::RwLock;
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration for the delay model lifecycle
#[derive(Debug, Clone)]
pub struct DelayModelConfig {
    /// Where the trained classifier artifact lives
    pub model_path: PathBuf,
    /// Canonical raw dataset used by bootstrap training
    pub dataset_path: PathBuf,
    /// Train from the canonical dataset on first predict when no model exists
    pub bootstrap_training: bool,
}

impl Default for DelayModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("data/model.bin"),
            dataset_path: PathBuf::from("data/data.csv"),
            bootstrap_training: true,
        }
    }
}

/// Model readiness, for logs and status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelReadiness {
    Unloaded,
    Loaded,
    Trained,
}

enum ModelState {
    Unloaded,
    Loaded(LogisticClassifier),
    Trained(LogisticClassifier),
}

impl ModelState {
    fn classifier(&self) -> Option<&LogisticClassifier> {
        match self {
            ModelState::Unloaded => None,
            ModelState::Loaded(classifier) | ModelState::Trained(classifier) => Some(classifier),
        }
    }
}

/// Orchestrates the feature pipeline and the classifier lifecycle.
///
/// Constructed once at process start and shared by handle; the classifier
/// slot is behind an `RwLock`, concurrent fits are last-write-wins.
pub struct DelayModel {
    config: DelayModelConfig,
    store: ModelStore,
    state: RwLock<ModelState>,
}

impl DelayModel {
    /// Construct the model, restoring a persisted classifier if one exists
    pub fn new(config: DelayModelConfig) -> Self {
        let store = ModelStore::new(&config.model_path);
        let state = match store.load() {
            Some(classifier) => ModelState::Loaded(classifier),
            None => ModelState::Unloaded,
        };
        Self {
            config,
            store,
            state: RwLock::new(state),
        }
    }

    pub fn readiness(&self) -> ModelReadiness {
        match &*self.state.read() {
            ModelState::Unloaded => ModelReadiness::Unloaded,
            ModelState::Loaded(_) => ModelReadiness::Loaded,
            ModelState::Trained(_) => ModelReadiness::Trained,
        }
    }

    /// Derive temporal features and encode a batch for prediction
    pub fn preprocess(&self, records: &[RawFlightRecord]) -> Result<FeatureMatrix, ModelError> {
        preprocessing::preprocess(records)
    }

    /// Derive temporal features and labels, then encode a batch for training
    pub fn preprocess_with_labels(
        &self,
        records: &[RawFlightRecord],
    ) -> Result<(FeatureMatrix, LabelVector), ModelError> {
        preprocessing::preprocess_with_labels(records)
    }

    /// Train the balanced classifier, transition to Trained, and persist.
    ///
    /// The in-memory model transitions before the save, so a persistence
    /// failure is logged but does not discard the trained classifier.
    pub fn fit(&self, features: &FeatureMatrix, labels: &LabelVector) -> Result<(), ModelError> {
        let classifier = LogisticClassifier::fit(features, labels)?;
        info!(
            rows = features.nrows(),
            iterations = classifier.iterations_run(),
            "Classifier trained"
        );
        *self.state.write() = ModelState::Trained(classifier.clone());
        if let Err(e) = self.store.save(&classifier) {
            warn!(error = %e, "Trained model could not be persisted");
        }
        Ok(())
    }

    /// Predict one label per input row, in input order.
    ///
    /// On an Unloaded model this either fails with `NotTrained` or, when
    /// bootstrap training is enabled, trains from the canonical dataset
    /// first. Any bootstrap failure is folded into `NotTrained` so callers
    /// see a single client-recoverable kind.
    pub fn predict(&self, features: &FeatureMatrix) -> Result<Vec<i32>, ModelError> {
        {
            let state = self.state.read();
            if let Some(classifier) = state.classifier() {
                return classifier.predict(features);
            }
        }

        if !self.config.bootstrap_training {
            return Err(ModelError::NotTrained {
                reason: "no persisted model and bootstrap training is disabled".to_string(),
            });
        }

        self.bootstrap().map_err(|e| ModelError::NotTrained {
            reason: e.to_string(),
        })?;

        let state = self.state.read();
        match state.classifier() {
            Some(classifier) => classifier.predict(features),
            None => Err(ModelError::NotTrained {
                reason: "bootstrap training did not produce a model".to_string(),
            }),
        }
    }

    /// Train from the canonical on-disk dataset
    fn bootstrap(&self) -> Result<(), ModelError> {
        info!(
            path = %self.config.dataset_path.display(),
            "No model available, bootstrapping from canonical dataset"
        );
        let records = dataset::load_flight_records(&self.config.dataset_path)?;
        let (features, labels) = self.preprocess_with_labels(&records)?;
        self.fit(&features, &labels)
    }

    /// Re-save the current classifier; a no-op when untrained
    pub fn persist(&self) -> Result<(), ModelError> {
        let state = self.state.read();
        match state.classifier() {
            Some(classifier) => self.store.save(classifier),
            None => Ok(()),
        }
    }
}
