//! Observability infrastructure for the delay prediction service
//!
//! Prometheus metrics for prediction latency, request/flight counters,
//! and model readiness. Logging itself is plain `tracing`, initialized
//! by the service binary.

use crate::model::ModelReadiness;
use prometheus::{
    register_histogram, register_int_counter, register_int_gauge, Histogram, IntCounter, IntGauge,
};
use std::sync::OnceLock;

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ServiceMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct ServiceMetricsInner {
    prediction_latency_seconds: Histogram,
    predictions_total: IntCounter,
    flights_scored_total: IntCounter,
    prediction_errors_total: IntCounter,
    validation_failures_total: IntCounter,
    trainings_total: IntCounter,
    model_readiness: IntGauge,
}

impl ServiceMetricsInner {
    fn new() -> Self {
        Self {
            prediction_latency_seconds: register_histogram!(
                "delay_predictor_prediction_latency_seconds",
                "Time spent preprocessing and scoring a prediction request",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register prediction_latency_seconds"),

            predictions_total: register_int_counter!(
                "delay_predictor_predictions_total",
                "Total number of prediction requests served"
            )
            .expect("Failed to register predictions_total"),

            flights_scored_total: register_int_counter!(
                "delay_predictor_flights_scored_total",
                "Total number of individual flights scored"
            )
            .expect("Failed to register flights_scored_total"),

            prediction_errors_total: register_int_counter!(
                "delay_predictor_prediction_errors_total",
                "Total number of prediction failures"
            )
            .expect("Failed to register prediction_errors_total"),

            validation_failures_total: register_int_counter!(
                "delay_predictor_validation_failures_total",
                "Total number of requests rejected by input validation"
            )
            .expect("Failed to register validation_failures_total"),

            trainings_total: register_int_counter!(
                "delay_predictor_trainings_total",
                "Total number of model training runs"
            )
            .expect("Failed to register trainings_total"),

            model_readiness: register_int_gauge!(
                "delay_predictor_model_readiness",
                "Model readiness: 0 unloaded, 1 loaded from disk, 2 trained in-process"
            )
            .expect("Failed to register model_readiness"),
        }
    }
}

/// Service metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct ServiceMetrics {
    _private: (),
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServiceMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ServiceMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a prediction latency observation
    pub fn observe_prediction_latency(&self, duration_secs: f64) {
        self.inner().prediction_latency_seconds.observe(duration_secs);
    }

    /// Increment the served-predictions counter
    pub fn inc_predictions(&self) {
        self.inner().predictions_total.inc();
    }

    /// Add to the scored-flights counter
    pub fn add_flights_scored(&self, count: u64) {
        self.inner().flights_scored_total.inc_by(count);
    }

    /// Increment the prediction-errors counter
    pub fn inc_prediction_errors(&self) {
        self.inner().prediction_errors_total.inc();
    }

    /// Increment the validation-failures counter
    pub fn inc_validation_failures(&self) {
        self.inner().validation_failures_total.inc();
    }

    /// Increment the training-runs counter
    pub fn inc_trainings(&self) {
        self.inner().trainings_total.inc();
    }

    /// Update the model readiness gauge
    pub fn set_model_readiness(&self, readiness: ModelReadiness) {
        let value = match readiness {
            ModelReadiness::Unloaded => 0,
            ModelReadiness::Loaded => 1,
            ModelReadiness::Trained => 2,
        };
        self.inner().model_readiness.set(value);
    }
}
