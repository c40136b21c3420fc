//! The client entry point
//!
//! An [`RriClient`] binds one account (tld and credentials, held by the
//! transport) to the four report resources. It is immutable after
//! construction and can be shared behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::resource::{ReportKind, Resource};
use crate::template::UrlTemplate;
use crate::traits::Transport;
use crate::Result;

/// URL template every resource URL is derived from
pub const URL_TEMPLATE: &str = "{+origin}{/info}/report/{resource}/{tld}{/id}";

/// Registry Reporting Interface client
#[derive(Clone)]
pub struct RriClient {
    tld: String,
    username: String,
    origin: String,
    transport: Arc<dyn Transport>,
    report: Resource,
    notification: Resource,
    functions: Resource,
    transactions: Resource,
}

impl fmt::Debug for RriClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RriClient")
            .field("tld", &self.tld)
            .field("username", &self.username)
            .field("origin", &self.origin)
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}

impl RriClient {
    /// Create a client
    ///
    /// The transport is expected to carry the credentials from `config`;
    /// `rri-http` builds one that does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the configuration
    /// does not validate.
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        let origin = config.origin()?;
        let url = UrlTemplate::parse(URL_TEMPLATE)?
            .bind("origin", &origin)
            .bind("tld", &config.tld);

        tracing::debug!(
            "Creating RRI client for tld '{}' at {} (transport: {})",
            config.tld,
            origin,
            transport.transport_name()
        );

        let resource = |kind| Resource::new(kind, &url, Arc::clone(&transport));

        Ok(Self {
            tld: config.tld.clone(),
            username: config.username.clone(),
            report: resource(ReportKind::EscrowReport),
            notification: resource(ReportKind::EscrowNotification),
            functions: resource(ReportKind::RegistryFunctions),
            transactions: resource(ReportKind::RegistrarTransactions),
            origin,
            transport,
        })
    }

    /// The tld this client reports for
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// The account username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The origin all URLs start with
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Data escrow report resource
    pub fn report(&self) -> &Resource {
        &self.report
    }

    /// Escrow agent notification resource
    pub fn notification(&self) -> &Resource {
        &self.notification
    }

    /// Registry functions activity resource
    pub fn functions(&self) -> &Resource {
        &self.functions
    }

    /// Per-registrar transactions resource
    pub fn transactions(&self) -> &Resource {
        &self.transactions
    }

    /// Look up a resource by kind
    pub fn resource(&self, kind: ReportKind) -> &Resource {
        match kind {
            ReportKind::EscrowReport => &self.report,
            ReportKind::EscrowNotification => &self.notification,
            ReportKind::RegistryFunctions => &self.functions,
            ReportKind::RegistrarTransactions => &self.transactions,
        }
    }

    /// All four resources, in [`ReportKind::ALL`] order
    pub fn resources(&self) -> [&Resource; 4] {
        [
            &self.report,
            &self.notification,
            &self.functions,
            &self.transactions,
        ]
    }
}
