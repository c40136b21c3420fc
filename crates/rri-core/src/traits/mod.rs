//! Core traits for the RRI client
//!
//! - [`Transport`]: perform one HTTP exchange with the reporting API

pub mod transport;

pub use transport::{Method, Transport, TransportRequest, TransportResponse};
