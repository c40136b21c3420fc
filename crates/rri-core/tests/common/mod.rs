//! Test doubles and common utilities for contract tests
//!
//! `ScriptedTransport` answers every request with a fixed status and body
//! and records what it was asked to send.

#![allow(dead_code)]

use rri_core::error::Result;
use rri_core::traits::{Transport, TransportRequest, TransportResponse};
use rri_core::{ClientConfig, ReportKind, Resource, RriClient};
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

/// Statuses with an error mapping shared by both operations
pub const FAILURE_STATUSES: [u16; 6] = [401, 403, 405, 500, 501, 999];

/// A transport that replies with a scripted status
pub struct ScriptedTransport {
    status: AtomicU16,
    body: Mutex<String>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    /// Create a transport answering `status` with an empty body
    pub fn new(status: u16) -> Arc<Self> {
        Self::with_body(status, "")
    }

    /// Create a transport answering `status` with `body`
    pub fn with_body(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status: AtomicU16::new(status),
            body: Mutex::new(body.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Change the scripted status
    pub fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::SeqCst);
    }

    /// Number of requests executed
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All recorded requests
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request was made")
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse::new(
            self.status.load(Ordering::SeqCst),
            self.body.lock().unwrap().clone(),
        ))
    }

    fn transport_name(&self) -> &'static str {
        "scripted"
    }
}

/// A transport whose every request fails before a response
pub struct UnreachableTransport;

#[async_trait::async_trait]
impl Transport for UnreachableTransport {
    async fn execute(&self, _request: TransportRequest) -> Result<TransportResponse> {
        Err(rri_core::Error::transport(
            "unreachable",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        ))
    }

    fn transport_name(&self) -> &'static str {
        "unreachable"
    }
}

/// The configuration used throughout the tests
pub fn test_config() -> ClientConfig {
    ClientConfig::new("example", "testuser", "testpass")
}

/// A client over a scripted transport
pub fn scripted_client(status: u16) -> (RriClient, Arc<ScriptedTransport>) {
    scripted_client_with(test_config(), status)
}

/// A client with a custom configuration over a scripted transport
pub fn scripted_client_with(
    config: ClientConfig,
    status: u16,
) -> (RriClient, Arc<ScriptedTransport>) {
    let transport = ScriptedTransport::new(status);
    let client = RriClient::new(&config, transport.clone()).expect("valid test config");
    (client, transport)
}

/// A valid check date for a resource
pub fn check_date(resource: &Resource) -> &'static str {
    match resource.kind() {
        ReportKind::EscrowReport | ReportKind::EscrowNotification => "2018-08-09",
        ReportKind::RegistryFunctions | ReportKind::RegistrarTransactions => "2018-08",
    }
}

/// A valid submit id for a resource
pub fn submit_id(resource: &Resource) -> Option<&'static str> {
    match resource.kind() {
        ReportKind::EscrowReport => Some("EXAMPLEID"),
        ReportKind::EscrowNotification => None,
        ReportKind::RegistryFunctions | ReportKind::RegistrarTransactions => Some("2018-08"),
    }
}
