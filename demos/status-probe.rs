// # RRI Status Probe
//
// Read-only validation tool: checks, for the configured account, whether each
// report for a given period has been received. Nothing is submitted.
//
// ## Usage
//
// ```bash
// RRI_TLD=example \
// RRI_USERNAME=example_ry \
// RRI_PASSWORD=secret \
// RRI_PROBE_DATE=2018-08-09 \
// cargo run --bin status_probe
// ```
//
// ## Environment Variables
//
// Required:
// - `RRI_TLD`, `RRI_USERNAME`, `RRI_PASSWORD`: account credentials
//
// Optional:
// - `RRI_BASE_URL`: alternate host (e.g. an OT&E endpoint)
// - `RRI_TIMEOUT_SECS`: request timeout
// - `RRI_PROBE_DATE`: day to probe as YYYY-MM-DD (default: today, UTC);
//   monthly reports use its month

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rri_core::ClientConfig;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    match run().await {
        Ok(all_received) if all_received => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("Probe failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool> {
    let config = ClientConfig::from_env().context("reading RRI_* configuration")?;

    let date = match env::var("RRI_PROBE_DATE") {
        Ok(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("RRI_PROBE_DATE '{}' is not YYYY-MM-DD", raw))?,
        Err(_) => chrono::Utc::now().date_naive(),
    };

    let client = rri_http::connect(&config)?;

    tracing::info!(
        "Probing tld '{}' at {} for {}",
        client.tld(),
        client.origin(),
        date
    );

    let mut all_received = true;
    for resource in client.resources() {
        let received = resource
            .check(date)
            .await
            .with_context(|| format!("checking {}", resource.kind()))?;

        tracing::info!(
            "{:<30} {}",
            resource.kind().to_string(),
            if received { "received" } else { "missing" }
        );
        all_received &= received;
    }

    Ok(all_received)
}
