// # reqwest Transport
//
// This crate provides the HTTP transport for the RRI client, built on
// reqwest.
//
// ## Session
//
// One `ReqwestTransport` is one session: the reqwest client (connection pool,
// TLS, user agent, optional timeout) plus the account's Basic credentials,
// applied to every request. It is created once per `RriClient` and never
// mutated afterwards.
//
// ## Behavior
//
// - One HTTP request per `execute` call, no retries
// - Status codes are returned untouched; `rri-core` interprets them
// - Connectivity failures are returned as `Error::Transport` with the
//   reqwest error as source
//
// ## Security
//
// The password never appears in logs or `Debug` output.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Duration;

use rri_core::traits::{Method, Transport, TransportRequest, TransportResponse};
use rri_core::{ClientConfig, Error, Result, RriClient};

/// User-Agent sent unless the configuration overrides it
pub const DEFAULT_USER_AGENT: &str = concat!("rri-rs/", env!("CARGO_PKG_VERSION"));

const TRANSPORT_NAME: &str = "reqwest";

/// reqwest-backed transport with Basic authentication
pub struct ReqwestTransport {
    client: reqwest::Client,

    username: String,

    /// ⚠️ NEVER log this value
    password: String,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

impl ReqwestTransport {
    /// Build a transport from a client configuration
    ///
    /// Sets the User-Agent (default [`DEFAULT_USER_AGENT`]) and, if
    /// configured, a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if reqwest cannot build the client (for
    /// example when no TLS backend is available).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            config.username.clone(),
            config.password.clone(),
        ))
    }

    /// Wrap an existing reqwest client
    ///
    /// The client is used as-is; only the Basic credentials are added per
    /// request.
    pub fn with_client(
        client: reqwest::Client,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            username: username.into(),
            password: password.into(),
        }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Head => reqwest::Method::HEAD,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str())
            .basic_auth(&self.username, Some(&self.password));

        if let Some(content_type) = request.content_type {
            builder = builder
                .header(CONTENT_TYPE, content_type)
                .header(ACCEPT, content_type);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", request.method, request.url, e);
            Error::transport(TRANSPORT_NAME, e)
        })?;

        let status = response.status().as_u16();

        let body = if request.method == Method::Head {
            String::new()
        } else {
            response
                .text()
                .await
                .map_err(|e| Error::transport(TRANSPORT_NAME, e))?
        };

        tracing::debug!("{} {} -> HTTP {}", request.method, request.url, status);

        Ok(TransportResponse::new(status, body))
    }

    fn transport_name(&self) -> &'static str {
        TRANSPORT_NAME
    }
}

/// Create a client using a fresh reqwest session
///
/// # Example
///
/// ```rust,no_run
/// use rri_core::ClientConfig;
///
/// #[tokio::main]
/// async fn main() -> rri_core::Result<()> {
///     let client = rri_http::connect(&ClientConfig::new("example", "testuser", "testpass"))?;
///
///     let exists = client.report().check("2018-08-09").await?;
///     println!("escrow report received: {}", exists);
///     Ok(())
/// }
/// ```
pub fn connect(config: &ClientConfig) -> Result<RriClient> {
    config.validate()?;
    let transport = ReqwestTransport::new(config)?;
    RriClient::new(config, Arc::new(transport))
}

/// Create a client over an existing reqwest client
pub fn connect_with_client(config: &ClientConfig, client: reqwest::Client) -> Result<RriClient> {
    let transport =
        ReqwestTransport::with_client(client, config.username.clone(), config.password.clone());
    RriClient::new(config, Arc::new(transport))
}
