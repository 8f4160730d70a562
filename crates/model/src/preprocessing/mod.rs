//! Feature engineering for the delay classifier
//!
//! Raw flight records flow through temporal derivation (and labeling when
//! training), then one-hot encoding against the fixed feature schema.

pub mod encoding;
pub mod labeling;
pub mod schema;
pub mod temporal;

pub use encoding::encode;
pub use labeling::{delay_label, DELAY_THRESHOLD_MINUTES};
pub use schema::FeatureSchema;
pub use temporal::{PeriodOfDay, TemporalFeatures};

use crate::error::ModelError;
use crate::models::{FeatureMatrix, LabelVector, RawFlightRecord};
use ndarray::Array1;

/// Derive temporal features and encode a batch for prediction.
///
/// Derivation runs on every batch, so a malformed timestamp surfaces as
/// `InvalidTimestamp` on the prediction path as well as the training path.
pub fn preprocess(records: &[RawFlightRecord]) -> Result<FeatureMatrix, ModelError> {
    for record in records {
        TemporalFeatures::derive(record)?;
    }
    Ok(encoding::encode(records))
}

/// Derive temporal features and delay labels, then encode a batch for training.
pub fn preprocess_with_labels(
    records: &[RawFlightRecord],
) -> Result<(FeatureMatrix, LabelVector), ModelError> {
    let mut labels = Vec::with_capacity(records.len());
    for record in records {
        let temporal = TemporalFeatures::derive(record)?;
        labels.push(f64::from(labeling::delay_label(temporal.minute_difference)));
    }
    Ok((encoding::encode(records), Array1::from(labels)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightType;

    fn record(operator: &str, scheduled: &str, actual: &str) -> RawFlightRecord {
        RawFlightRecord {
            operator: operator.to_string(),
            flight_type: FlightType::International,
            month: 7,
            scheduled_departure: scheduled.to_string(),
            actual_departure: actual.to_string(),
        }
    }

    #[test]
    fn test_preprocess_shape_is_schema_width() {
        let records = vec![record(
            "Grupo LATAM",
            "2017-07-15 10:00:00",
            "2017-07-15 10:05:00",
        )];
        let features = preprocess(&records).unwrap();
        assert_eq!(features.dim(), (1, FeatureSchema::len()));
    }

    #[test]
    fn test_preprocess_with_labels_strict_threshold() {
        let records = vec![
            // exactly 15 minutes late: not delayed
            record("Grupo LATAM", "2017-07-15 10:00:00", "2017-07-15 10:15:00"),
            // 16 minutes late: delayed
            record("Sky Airline", "2017-07-15 10:00:00", "2017-07-15 10:16:00"),
            // early departure: not delayed
            record("Copa Air", "2017-07-15 10:00:00", "2017-07-15 09:30:00"),
        ];
        let (features, labels) = preprocess_with_labels(&records).unwrap();
        assert_eq!(features.nrows(), 3);
        assert_eq!(labels.to_vec(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_preprocess_rejects_malformed_timestamp() {
        let records = vec![record("Grupo LATAM", "not-a-date", "2017-07-15 10:05:00")];
        let err = preprocess(&records).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTimestamp { .. }));
    }
}
