//! Prediction requests against the running service

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tabled::Tabled;

use crate::client::{ApiClient, Flight, PredictRequest, PredictResponse};
use crate::output::{color_prediction, print_table, print_warning, OutputFormat};

/// Row for the predictions table
#[derive(Tabled, serde::Serialize)]
struct PredictionRow {
    #[tabled(rename = "Operator")]
    operator: String,
    #[tabled(rename = "Type")]
    flight_type: String,
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Prediction")]
    prediction: String,
}

/// Score flights against the running service
pub async fn run(
    client: &ApiClient,
    opera: Option<String>,
    tipovuelo: Option<String>,
    mes: Option<u32>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let request = build_request(opera, tipovuelo, mes, file)?;
    if request.flights.is_empty() {
        print_warning("No flights to score");
        return Ok(());
    }

    let response: PredictResponse = client.post("predict", &request).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            let rows: Vec<PredictionRow> = request
                .flights
                .iter()
                .zip(&response.predict)
                .map(|(flight, &prediction)| PredictionRow {
                    operator: flight.opera.clone(),
                    flight_type: flight.tipovuelo.clone(),
                    month: flight.mes,
                    prediction: color_prediction(prediction),
                })
                .collect();
            print_table(&rows, OutputFormat::Table);
        }
    }
    Ok(())
}

/// Build the request body from flags or a JSON file
fn build_request(
    opera: Option<String>,
    tipovuelo: Option<String>,
    mes: Option<u32>,
    file: Option<PathBuf>,
) -> Result<PredictRequest> {
    if let Some(path) = file {
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return serde_json::from_str(&body)
            .with_context(|| format!("Invalid request body in {}", path.display()));
    }

    match (opera, tipovuelo, mes) {
        (Some(opera), Some(tipovuelo), Some(mes)) => Ok(PredictRequest {
            flights: vec![Flight {
                opera,
                tipovuelo,
                mes,
            }],
        }),
        _ => bail!("Provide --opera, --tipovuelo and --mes together, or --file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_request_from_flags() {
        let request = build_request(
            Some("Grupo LATAM".to_string()),
            Some("I".to_string()),
            Some(7),
            None,
        )
        .unwrap();
        assert_eq!(request.flights.len(), 1);
        assert_eq!(request.flights[0].opera, "Grupo LATAM");
        assert_eq!(request.flights[0].mes, 7);
    }

    #[test]
    fn test_build_request_requires_all_flags() {
        let err = build_request(Some("Grupo LATAM".to_string()), None, Some(7), None).unwrap_err();
        assert!(err.to_string().contains("--tipovuelo"));
    }

    #[test]
    fn test_build_request_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flights.json");
        fs::write(
            &path,
            r#"{"flights": [
                {"OPERA": "Sky Airline", "TIPOVUELO": "N", "MES": 12},
                {"OPERA": "Copa Air", "TIPOVUELO": "I", "MES": 4}
            ]}"#,
        )
        .unwrap();

        let request = build_request(None, None, None, Some(path)).unwrap();
        assert_eq!(request.flights.len(), 2);
        assert_eq!(request.flights[1].opera, "Copa Air");
    }

    #[test]
    fn test_build_request_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flights.json");
        fs::write(&path, "not json").unwrap();
        assert!(build_request(None, None, None, Some(path)).is_err());
    }
}
