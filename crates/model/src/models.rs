//! Core data types for the delay predictor

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Feature matrix: one row per flight, one column per schema feature
pub type FeatureMatrix = Array2<f64>;

/// Label vector aligned with the feature matrix rows (0.0 on time, 1.0 delayed)
pub type LabelVector = Array1<f64>;

/// Flight type code from the raw data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightType {
    #[serde(rename = "N")]
    National,
    #[serde(rename = "I")]
    International,
}

impl FlightType {
    /// Wire code used in the one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            FlightType::National => "N",
            FlightType::International => "I",
        }
    }
}

/// A raw flight record as it appears in the canonical dataset
///
/// Serde renames match the CSV header, so the same struct deserializes
/// straight from the raw file. Extra CSV columns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFlightRecord {
    #[serde(rename = "OPERA")]
    pub operator: String,
    #[serde(rename = "TIPOVUELO")]
    pub flight_type: FlightType,
    /// Month of the scheduled departure, 1-12
    #[serde(rename = "MES")]
    pub month: u32,
    /// Scheduled departure, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "Fecha-I")]
    pub scheduled_departure: String,
    /// Actual departure, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "Fecha-O")]
    pub actual_departure: String,
}
