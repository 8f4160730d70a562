//! One-hot encoding of raw records against the fixed feature schema

use super::schema::FeatureSchema;
use crate::models::{FeatureMatrix, RawFlightRecord};
use ndarray::Array2;

/// Encode a batch of raw records into the fixed 10-column feature matrix.
///
/// Each record contributes three one-hot column names (operator, flight
/// type, month); names in the schema get 1.0, everything else is dropped.
/// Schema columns absent from the batch stay zero, so the output shape is
/// (records, 10) for any batch size, including a single row.
pub fn encode(records: &[RawFlightRecord]) -> FeatureMatrix {
    let mut features = Array2::zeros((records.len(), FeatureSchema::len()));
    for (row, record) in records.iter().enumerate() {
        for name in one_hot_columns(record) {
            if let Some(column) = FeatureSchema::index_of(&name) {
                features[[row, column]] = 1.0;
            }
        }
    }
    features
}

fn one_hot_columns(record: &RawFlightRecord) -> [String; 3] {
    [
        format!("OPERA_{}", record.operator),
        format!("TIPOVUELO_{}", record.flight_type.code()),
        format!("MES_{}", record.month),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightType;

    fn record(operator: &str, flight_type: FlightType, month: u32) -> RawFlightRecord {
        RawFlightRecord {
            operator: operator.to_string(),
            flight_type,
            month,
            scheduled_departure: "2017-07-15 10:00:00".to_string(),
            actual_departure: "2017-07-15 10:05:00".to_string(),
        }
    }

    #[test]
    fn test_output_shape_is_stable_for_any_batch_size() {
        for size in [0usize, 1, 2, 7] {
            let records: Vec<_> = (0..size)
                .map(|i| record("Grupo LATAM", FlightType::National, (i as u32 % 12) + 1))
                .collect();
            let features = encode(&records);
            assert_eq!(features.dim(), (size, 10));
        }
    }

    #[test]
    fn test_known_categories_set_schema_columns() {
        let records = vec![record("Grupo LATAM", FlightType::International, 7)];
        let features = encode(&records);

        assert_eq!(features[[0, FeatureSchema::index_of("OPERA_Grupo LATAM").unwrap()]], 1.0);
        assert_eq!(features[[0, FeatureSchema::index_of("TIPOVUELO_I").unwrap()]], 1.0);
        assert_eq!(features[[0, FeatureSchema::index_of("MES_7").unwrap()]], 1.0);
        assert_eq!(features.row(0).sum(), 3.0);
    }

    #[test]
    fn test_unknown_categories_are_dropped() {
        // Avianca, national flights, and January are not in the schema
        let records = vec![record("Avianca", FlightType::National, 1)];
        let features = encode(&records);
        assert_eq!(features.row(0).sum(), 0.0);
    }

    #[test]
    fn test_single_row_batch_matches_larger_batch_encoding() {
        let one = record("Sky Airline", FlightType::International, 12);
        let alone = encode(std::slice::from_ref(&one));
        let batch = encode(&[
            record("Grupo LATAM", FlightType::National, 4),
            one.clone(),
            record("Copa Air", FlightType::International, 10),
        ]);
        assert_eq!(alone.row(0), batch.row(1));
    }

    #[test]
    fn test_rows_follow_input_order() {
        let records = vec![
            record("Latin American Wings", FlightType::National, 2),
            record("Copa Air", FlightType::National, 2),
        ];
        let features = encode(&records);
        assert_eq!(features[[0, 0]], 1.0);
        assert_eq!(features[[1, 0]], 0.0);
        assert_eq!(features[[1, 9]], 1.0);
    }
}
