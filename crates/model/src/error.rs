//! Typed errors for the delay model core

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by preprocessing, training, prediction, and persistence
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed timestamp in a raw record. This is a data contract
    /// violation from upstream, not a user input problem.
    #[error("invalid timestamp {value:?}: expected format {expected}")]
    InvalidTimestamp {
        value: String,
        expected: &'static str,
    },

    /// Prediction requested with no usable model.
    #[error("model is not trained: {reason}")]
    NotTrained { reason: String },

    /// Feature matrix width does not match the trained model.
    #[error("feature matrix has {actual} columns, expected {expected}")]
    FeatureWidth { expected: usize, actual: usize },

    /// Feature and label row counts disagree at fit time.
    #[error("feature matrix has {features} rows but label vector has {labels}")]
    LabelCount { features: usize, labels: usize },

    /// Training data contains a single class; balanced weights are undefined.
    #[error("training data contains only class {class}; both classes are required to fit")]
    SingleClass { class: i32 },

    /// Dataset file could not be read or parsed.
    #[error("failed to load dataset {path}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model artifact could not be serialized.
    #[error("failed to encode model artifact")]
    Encode(#[from] bincode::Error),
}
