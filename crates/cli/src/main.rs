//! Flight Delay Predictor CLI
//!
//! A command-line tool for training the delay model offline and querying
//! the running prediction service.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{health, predict, train};
use std::path::PathBuf;

/// Flight Delay Predictor CLI
#[derive(Parser)]
#[command(name = "delayctl")]
#[command(author, version, about = "CLI for the Flight Delay Predictor", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via DELAY_API_URL env var)
    #[arg(long, env = "DELAY_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train the model offline from a raw flight dataset
    Train {
        /// Path to the raw flight CSV
        #[arg(long, default_value = "data/data.csv")]
        data: PathBuf,

        /// Where to write the trained model artifact
        #[arg(long, default_value = "data/model.bin")]
        model: PathBuf,
    },

    /// Request delay predictions from the running service
    Predict {
        /// Operator name (e.g. "Grupo LATAM")
        #[arg(long)]
        opera: Option<String>,

        /// Flight type code: N or I
        #[arg(long)]
        tipovuelo: Option<String>,

        /// Month of the flight (1-12)
        #[arg(long)]
        mes: Option<u32>,

        /// JSON file with a {"flights": [...]} request body
        #[arg(long, short = 'F')]
        file: Option<PathBuf>,
    },

    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train { data, model } => {
            train::run(&data, &model, cli.format)?;
        }
        Commands::Predict {
            opera,
            tipovuelo,
            mes,
            file,
        } => {
            let client = client::ApiClient::new(&cli.api_url)?;
            predict::run(&client, opera, tipovuelo, mes, file, cli.format).await?;
        }
        Commands::Health => {
            let client = client::ApiClient::new(&cli.api_url)?;
            health::run(&client, cli.format).await?;
        }
    }

    Ok(())
}
