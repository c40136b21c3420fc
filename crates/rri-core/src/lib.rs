// # rri-core
//
// Core library for the ICANN Registry Reporting Interface (RRI) client.
//
// ## Architecture Overview
//
// - **RriClient**: entry point, one per registry-operator account
// - **Resource**: `check(date)` / `submit(payload, id)` for one report kind
// - **ReportKind**: per-kind constants (resource name, date format, content
//   type, submit method)
// - **UrlTemplate**: URI template expansion with partial binding
// - **Transport**: trait for the single HTTP exchange each call makes
// - **status**: HTTP status to outcome/error dispatch
//
// ## Design Principles
//
// 1. **One request per call**: no retries, no backoff, no caching
// 2. **Fail before I/O**: malformed dates and ids are rejected locally
// 3. **Total status mapping**: only documented codes succeed
// 4. **Pluggable transport**: the HTTP stack lives behind `Transport`

pub mod client;
pub mod config;
pub mod error;
pub mod period;
pub mod resource;
pub mod status;
pub mod template;
pub mod traits;

// Re-export core types for convenience
pub use client::RriClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use period::{DateFormat, Period};
pub use resource::{ReportKind, Resource, SubmitResponse};
pub use template::UrlTemplate;
pub use traits::Transport;
