//! HTTP API for delay predictions, health checks, and Prometheus metrics

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use delay_model::{DelayModel, FlightType, ModelError, ModelReadiness, RawFlightRecord, ServiceMetrics};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Operators recognized by the prediction endpoint
const KNOWN_OPERATORS: [&str; 23] = [
    "Grupo LATAM",
    "Sky Airline",
    "Aerolineas Argentinas",
    "Copa Air",
    "Latin American Wings",
    "Avianca",
    "JetSmart SPA",
    "Gol Trans",
    "American Airlines",
    "Air Canada",
    "Iberia",
    "Delta Air",
    "United Airlines",
    "Oceanair Linhas Aereas",
    "Alitalia",
    "K.L.M.",
    "Air France",
    "British Airways",
    "Qantas Airways",
    "Lacsa",
    "Austral",
    "Plus Ultra Lineas Aereas",
    "Aerolineas Galapagos (Aerogal)",
];

/// Placeholder timestamps attached to prediction input. The one-hot schema
/// carries no temporal columns, so the derived values never reach the model;
/// the record just needs parseable dates.
const PLACEHOLDER_SCHEDULED: &str = "2022-01-01 10:00:00";
const PLACEHOLDER_ACTUAL: &str = "2022-01-01 10:30:00";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<DelayModel>,
    pub metrics: ServiceMetrics,
}

impl AppState {
    pub fn new(model: Arc<DelayModel>, metrics: ServiceMetrics) -> Self {
        Self { model, metrics }
    }
}

/// One flight in a prediction request
#[derive(Debug, Deserialize)]
pub struct Flight {
    #[serde(rename = "OPERA")]
    pub opera: String,
    #[serde(rename = "TIPOVUELO")]
    pub tipovuelo: String,
    #[serde(rename = "MES")]
    pub mes: i64,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub flights: Vec<Flight>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predict: Vec<i32>,
}

/// API failure modes, mapped to status codes with a `detail` body
enum ApiError {
    /// Malformed or out-of-range input; generic detail, specifics go to logs
    Validation,
    /// No usable model; client-recoverable, distinct from infrastructure failure
    NotTrained(String),
    /// Anything else; never leaks internals
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation => (StatusCode::BAD_REQUEST, "Validation error".to_string()),
            ApiError::NotTrained(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Validate one flight against the enumerated sets before it reaches the core
fn validate_flight(flight: &Flight) -> Result<RawFlightRecord, String> {
    if !KNOWN_OPERATORS.contains(&flight.opera.as_str()) {
        return Err(format!("unrecognized operator {:?}", flight.opera));
    }
    let flight_type = match flight.tipovuelo.as_str() {
        "N" => FlightType::National,
        "I" => FlightType::International,
        other => return Err(format!("unrecognized flight type {:?}", other)),
    };
    if !(1..=12).contains(&flight.mes) {
        return Err(format!("month {} outside 1-12", flight.mes));
    }
    Ok(RawFlightRecord {
        operator: flight.opera.clone(),
        flight_type,
        month: flight.mes as u32,
        scheduled_departure: PLACEHOLDER_SCHEDULED.to_string(),
        actual_departure: PLACEHOLDER_ACTUAL.to_string(),
    })
}

/// Health check response
async fn get_health() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}

/// Prediction endpoint
async fn post_predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed predict request body");
        state.metrics.inc_validation_failures();
        ApiError::Validation
    })?;

    let mut records = Vec::with_capacity(request.flights.len());
    for flight in &request.flights {
        match validate_flight(flight) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(reason = %reason, "Rejected predict request");
                state.metrics.inc_validation_failures();
                return Err(ApiError::Validation);
            }
        }
    }

    let readiness_before = state.model.readiness();
    let start = Instant::now();
    let result = state
        .model
        .preprocess(&records)
        .and_then(|features| state.model.predict(&features));

    let predictions = match result {
        Ok(predictions) => predictions,
        Err(ModelError::NotTrained { reason }) => {
            warn!(reason = %reason, "Prediction requested without a usable model");
            state.metrics.inc_prediction_errors();
            return Err(ApiError::NotTrained(format!("model is not trained: {}", reason)));
        }
        Err(e) => {
            error!(error = %e, "Prediction failed");
            state.metrics.inc_prediction_errors();
            return Err(ApiError::Internal);
        }
    };

    let readiness_after = state.model.readiness();
    if readiness_before != ModelReadiness::Trained && readiness_after == ModelReadiness::Trained {
        state.metrics.inc_trainings();
    }
    state.metrics.set_model_readiness(readiness_after);
    state
        .metrics
        .observe_prediction_latency(start.elapsed().as_secs_f64());
    state.metrics.inc_predictions();
    state.metrics.add_flights_scored(predictions.len() as u64);
    info!(flights = predictions.len(), "Prediction completed");

    Ok(Json(PredictResponse {
        predict: predictions,
    }))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/predict", post(post_predict))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
