//! Service health check

use anyhow::Result;

use crate::client::{ApiClient, HealthResponse};
use crate::output::{print_error, print_success, OutputFormat};

/// Query `/health` and report the service status
pub async fn run(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let response: HealthResponse = client.get("health").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            if response.status == "OK" {
                print_success("Service is healthy");
            } else {
                print_error(&format!("Service reported status {:?}", response.status));
            }
        }
    }
    Ok(())
}
