//! Wholesale CSV ingestion of raw flight records

use crate::error::ModelError;
use crate::models::RawFlightRecord;
use std::path::Path;
use tracing::info;

/// Load every record from a raw flight CSV.
///
/// Columns beyond the ones `RawFlightRecord` names are ignored. A malformed
/// row aborts the load: bad rows in the canonical dataset are a data
/// contract violation, not something to skip over.
pub fn load_flight_records(path: impl AsRef<Path>) -> Result<Vec<RawFlightRecord>, ModelError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| ModelError::Dataset {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawFlightRecord = row.map_err(|source| ModelError::Dataset {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    info!(
        path = %path.display(),
        records = records.len(),
        "Loaded flight dataset"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_records_ignores_extra_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "Fecha-I,Vlo-I,Fecha-O,OPERA,TIPOVUELO,MES,SIGLADES\n\
             2017-07-15 10:00:00,226,2017-07-15 10:20:00,Grupo LATAM,I,7,Miami\n\
             2017-01-02 23:30:00,101,2017-01-02 23:32:00,Sky Airline,N,1,Antofagasta\n",
        )
        .unwrap();

        let records = load_flight_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].operator, "Grupo LATAM");
        assert_eq!(records[0].flight_type, FlightType::International);
        assert_eq!(records[0].month, 7);
        assert_eq!(records[1].scheduled_departure, "2017-01-02 23:30:00");
    }

    #[test]
    fn test_malformed_row_aborts_the_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "Fecha-I,Fecha-O,OPERA,TIPOVUELO,MES\n\
             2017-07-15 10:00:00,2017-07-15 10:20:00,Grupo LATAM,I,not-a-month\n",
        )
        .unwrap();

        let err = load_flight_records(&path).unwrap_err();
        assert!(matches!(err, ModelError::Dataset { .. }));
    }

    #[test]
    fn test_missing_file_is_a_dataset_error() {
        let err = load_flight_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ModelError::Dataset { .. }));
    }
}
