// # Transport Trait
//
// Defines the single HTTP exchange the resources need.
//
// ## Implementations
//
// - reqwest: `rri-http` crate (`ReqwestTransport`)
// - Test doubles in `tests/common`
//
// ## Contract
//
// A transport performs exactly one request per call. It owns the session
// state (Basic credentials, user agent, timeout) and applies it to every
// request. It never retries, never interprets the status code and returns
// connectivity failures as `Error::Transport`.
//
// ```rust,ignore
// use rri_core::traits::{Method, Transport, TransportRequest};
//
// let response = transport
//     .execute(TransportRequest::head("https://ry-api.icann.org/info/report/..."))
//     .await?;
// assert_eq!(response.status, 200);
// ```

use async_trait::async_trait;
use std::fmt;

/// HTTP method used against the reporting API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Status checks
    Head,
    /// Report submissions addressed by id
    Put,
    /// Notification submissions
    Post,
}

impl Method {
    /// Upper-case method name
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request to the reporting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Fully expanded URL
    pub url: String,
    /// Sent as both `Content-Type` and `Accept` when present
    pub content_type: Option<&'static str>,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// A bodiless HEAD request
    pub fn head(url: impl Into<String>) -> Self {
        Self {
            method: Method::Head,
            url: url.into(),
            content_type: None,
            body: None,
        }
    }

    /// A request carrying a report payload
    pub fn with_payload(
        method: Method,
        url: impl Into<String>,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            content_type: Some(content_type),
            body: Some(body),
        }
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (empty for HEAD)
    pub body: String,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for HTTP transports
///
/// # Thread Safety
///
/// Implementations must be thread-safe; one transport is shared by the four
/// resources of a client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and return the raw response
    ///
    /// Any status code is a successful exchange; only failures to obtain a
    /// response are errors.
    async fn execute(&self, request: TransportRequest) -> crate::Result<TransportResponse>;

    /// Transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
