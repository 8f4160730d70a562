//! Service configuration

use anyhow::Result;
use delay_model::DelayModelConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration, loaded from `DELAY_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP port for the prediction API
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Path to the persisted model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Canonical raw dataset used by bootstrap training
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Train from the canonical dataset on first predict if no model exists
    #[serde(default = "default_bootstrap_training")]
    pub bootstrap_training: bool,
}

fn default_api_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("data/model.bin")
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/data.csv")
}

fn default_bootstrap_training() -> bool {
    true
}

impl ServiceConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("DELAY"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ServiceConfig {
            api_port: default_api_port(),
            model_path: default_model_path(),
            dataset_path: default_dataset_path(),
            bootstrap_training: default_bootstrap_training(),
        }))
    }

    /// Model lifecycle configuration derived from the service settings
    pub fn model_config(&self) -> DelayModelConfig {
        DelayModelConfig {
            model_path: self.model_path.clone(),
            dataset_path: self.dataset_path.clone(),
            bootstrap_training: self.bootstrap_training,
        }
    }
}
