//! Minimal embedding example for rri-core
//!
//! This example drives an `RriClient` through a custom in-process transport
//! that plays the part of the reporting API, so it runs without network
//! access or credentials.

use anyhow::Result;
use rri_core::traits::{Method, Transport, TransportRequest, TransportResponse};
use rri_core::{ClientConfig, RriClient};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the reporting API
///
/// Remembers which submit URLs were accepted and answers status checks from
/// that set. Payloads that are empty are rejected with HTTP/400.
struct EmbeddedApi {
    received: Mutex<HashSet<String>>,
}

impl EmbeddedApi {
    fn new() -> Self {
        Self {
            received: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait::async_trait]
impl Transport for EmbeddedApi {
    async fn execute(&self, request: TransportRequest) -> rri_core::Result<TransportResponse> {
        println!("[Embedded] {} {}", request.method, request.url);

        let mut received = self
            .received
            .lock()
            .map_err(|_| rri_core::Error::config("embedded API state poisoned"))?;

        let response = match request.method {
            Method::Head => {
                let key = request.url.replacen("/info/report/", "/report/", 1);
                if received.contains(&key) {
                    TransportResponse::new(200, "")
                } else {
                    TransportResponse::new(404, "")
                }
            }
            Method::Put | Method::Post => match request.body {
                Some(body) if !body.is_empty() => {
                    received.insert(request.url);
                    TransportResponse::new(200, "<result>accepted</result>")
                }
                _ => TransportResponse::new(400, "<result>empty report</result>"),
            },
        };

        Ok(response)
    }

    fn transport_name(&self) -> &'static str {
        "embedded"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Embedded rri-core Example ===\n");

    let config = ClientConfig::new("example", "testuser", "testpass");
    let client = RriClient::new(&config, Arc::new(EmbeddedApi::new()))?;

    println!("1. Checking the August 2018 activity report...");
    let exists = client.functions().check("2018-08").await?;
    println!("   received: {}\n", exists);

    println!("2. Submitting an empty report (rejected, not an error)...");
    let rejected = client.functions().submit("", Some("2018-08")).await?;
    println!("   success: {}, body: {}\n", rejected.success, rejected.body);

    println!("3. Submitting the report...");
    let accepted = client
        .functions()
        .submit("operational-registrars,4\n", Some("2018-08"))
        .await?;
    println!("   success: {}, body: {}\n", accepted.success, accepted.body);

    println!("4. Checking again...");
    let exists = client.functions().check("2018-08").await?;
    println!("   received: {}\n", exists);

    println!("5. Passing a malformed date...");
    match client.report().check("2018-02-30").await {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   rejected before any request: {}", e),
    }

    println!("\n=== Embedding Successful ===");

    Ok(())
}
