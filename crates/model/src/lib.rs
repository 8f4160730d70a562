//! Core library for the flight delay prediction service
//!
//! This crate provides:
//! - Temporal feature derivation from raw flight timestamps
//! - One-hot encoding against a fixed 10-column feature schema
//! - A balanced-class logistic classifier with fit/predict
//! - Model persistence and the training/inference lifecycle

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod model;
pub mod models;
pub mod observability;
pub mod preprocessing;
pub mod store;

pub use classifier::LogisticClassifier;
pub use error::ModelError;
pub use model::{DelayModel, DelayModelConfig, ModelReadiness};
pub use models::{FeatureMatrix, FlightType, LabelVector, RawFlightRecord};
pub use observability::ServiceMetrics;
pub use store::ModelStore;
