//! Offline model training from the raw flight dataset

use anyhow::{Context, Result};
use delay_model::{dataset, preprocessing, LogisticClassifier, ModelStore};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::output::{format_share, print_success, print_table, OutputFormat};

/// Row for the training summary table
#[derive(Tabled, Serialize)]
struct TrainingSummary {
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Delayed")]
    delayed_share: String,
    #[tabled(rename = "Iterations")]
    iterations: usize,
    #[tabled(rename = "Artifact")]
    artifact: String,
}

/// Train the classifier from a raw CSV and persist the artifact
pub fn run(data: &Path, model_path: &Path, format: OutputFormat) -> Result<()> {
    let records = dataset::load_flight_records(data)
        .with_context(|| format!("Failed to load dataset {}", data.display()))?;

    let (features, labels) = preprocessing::preprocess_with_labels(&records)
        .context("Failed to preprocess dataset")?;
    let delayed = labels.iter().filter(|&&label| label > 0.5).count();

    let classifier = LogisticClassifier::fit(&features, &labels).context("Training failed")?;

    let store = ModelStore::new(model_path);
    store
        .save(&classifier)
        .with_context(|| format!("Failed to persist model to {}", model_path.display()))?;

    let summary = TrainingSummary {
        records: records.len(),
        delayed_share: format_share(delayed as f64 / records.len().max(1) as f64),
        iterations: classifier.iterations_run(),
        artifact: model_path.display().to_string(),
    };
    print_table(&[summary], format);
    if matches!(format, OutputFormat::Table) {
        print_success("Model trained and saved");
    }

    Ok(())
}
