// # Resources
//
// One `Resource` per report kind. All four share the same logic; what differs
// is carried by `ReportKind` (resource name, date format, content type,
// submit method and how the submit id is filled).
//
// Each resource holds two templates derived from the client's base template:
//
// - info:   `{origin}/info/report/{resource}/{tld}{/id}` for HEAD checks
// - submit: `{origin}/report/{resource}/{tld}{/id}` for PUT/POST
//
// The submit template is regenerated with the `{/info}` expression removed,
// and a notification expands it with `id` undefined so the URL ends at the
// tld segment.

mod kind;

pub use kind::{ReportKind, SubmitKey};

use std::fmt;
use std::sync::Arc;

use crate::period::Period;
use crate::status;
use crate::template::UrlTemplate;
use crate::traits::{Transport, TransportRequest};
use crate::{Error, Result};

/// Result of a submission
///
/// `success` is false when the API rejected the report (HTTP/400); the body
/// then usually explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    /// True on HTTP/200, false on HTTP/400
    pub success: bool,
    /// Raw response body
    pub body: String,
}

impl SubmitResponse {
    /// Create a response
    pub fn new(success: bool, body: impl Into<String>) -> Self {
        Self {
            success,
            body: body.into(),
        }
    }
}

/// A reporting API resource bound to one tld
#[derive(Clone)]
pub struct Resource {
    kind: ReportKind,
    info_url: UrlTemplate,
    submit_url: UrlTemplate,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &self.kind)
            .field("info_url", &self.info_url.to_string())
            .field("submit_url", &self.submit_url.to_string())
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}

impl Resource {
    /// Derive a resource from a template with `origin` and `tld` bound
    pub fn new(kind: ReportKind, url: &UrlTemplate, transport: Arc<dyn Transport>) -> Self {
        let info_url = url
            .bind("info", "info")
            .bind("resource", kind.resource_name());
        let submit_url = url.remove("info").bind("resource", kind.resource_name());

        Self {
            kind,
            info_url,
            submit_url,
            transport,
        }
    }

    /// The report kind
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Template for status checks
    pub fn info_template(&self) -> &UrlTemplate {
        &self.info_url
    }

    /// Template for submissions
    pub fn submit_template(&self) -> &UrlTemplate {
        &self.submit_url
    }

    /// Status check URL for a period
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDate`] if the period is a malformed string.
    pub fn info_url<'p>(&self, period: impl Into<Period<'p>>) -> Result<String> {
        let id = period.into().render(self.kind.date_format())?;
        Ok(self.info_url.expand(&[("id", id.as_str())]))
    }

    /// Submission URL for an optional id
    ///
    /// - escrow report: `id` is the deposit id and is required
    /// - functions/transactions: `id` is a period string, `None` meaning now
    /// - notification: `id` must be `None`; the URL has no id segment
    pub fn submit_url(&self, id: Option<&str>) -> Result<String> {
        let id = match (self.kind.submit_key(), id) {
            (SubmitKey::Identifier, Some(id)) if !id.trim().is_empty() => Some(id.to_string()),
            (SubmitKey::Identifier, _) => {
                return Err(Error::invalid_input(format!(
                    "{} submissions require an id",
                    self.kind
                )));
            }
            (SubmitKey::Period, id) => Some(Period::from(id).render(self.kind.date_format())?),
            (SubmitKey::None, None) => None,
            (SubmitKey::None, Some(id)) => {
                return Err(Error::invalid_input(format!(
                    "{} submissions take no id (got '{}')",
                    self.kind, id
                )));
            }
        };

        Ok(match id {
            Some(id) => self.submit_url.expand(&[("id", id.as_str())]),
            None => self.submit_url.expand(&[]),
        })
    }

    /// Check whether a report exists for a period
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: HTTP/200, the report exists
    /// - `Ok(false)`: HTTP/404, nothing received yet
    /// - `Err(Error)`: malformed date (before any request), any other status,
    ///   or a transport failure
    pub async fn check<'p>(&self, period: impl Into<Period<'p>>) -> Result<bool> {
        let url = self.info_url(period)?;

        tracing::debug!("Checking {} status: HEAD {}", self.kind, url);

        let response = self.transport.execute(TransportRequest::head(url)).await?;

        tracing::debug!("{} status check returned HTTP {}", self.kind, response.status);

        status::check_outcome(response.status).inspect_err(|e| {
            tracing::warn!("{} status check failed: {}", self.kind, e);
        })
    }

    /// Submit a report payload
    ///
    /// See [`Resource::submit_url`] for how `id` is interpreted.
    ///
    /// # Returns
    ///
    /// - `Ok(SubmitResponse { success: true, .. })`: HTTP/200
    /// - `Ok(SubmitResponse { success: false, .. })`: HTTP/400, report rejected
    /// - `Err(Error)`: invalid id, any other status, or a transport failure
    pub async fn submit(
        &self,
        payload: impl Into<Vec<u8>>,
        id: Option<&str>,
    ) -> Result<SubmitResponse> {
        let url = self.submit_url(id)?;
        let method = self.kind.submit_method();
        let body = payload.into();

        tracing::info!(
            "Submitting {} ({} bytes): {} {}",
            self.kind,
            body.len(),
            method,
            url
        );

        let request =
            TransportRequest::with_payload(method, url, self.kind.content_type(), body);
        let response = self.transport.execute(request).await?;

        let success = status::submit_outcome(response.status).inspect_err(|e| {
            tracing::warn!("{} submission failed: {}", self.kind, e);
        })?;

        if success {
            tracing::info!("{} submission accepted", self.kind);
        } else {
            tracing::warn!("{} submission rejected (HTTP 400)", self.kind);
        }

        Ok(SubmitResponse::new(success, response.body))
    }
}
