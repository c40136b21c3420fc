//! Report kinds and their fixed constants

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::period::DateFormat;
use crate::traits::Method;

/// How the trailing id segment of a submit URL is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKey {
    /// A caller supplied identifier, taken as-is (escrow deposit id)
    Identifier,
    /// A reporting period, validated against the resource date format
    Period,
    /// No id segment at all
    None,
}

/// The four report kinds of the reporting interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Data escrow report
    EscrowReport,
    /// Escrow agent notification
    EscrowNotification,
    /// Registry functions activity report
    RegistryFunctions,
    /// Per-registrar transactions report
    RegistrarTransactions,
}

impl ReportKind {
    /// Every kind, in client order
    pub const ALL: [ReportKind; 4] = [
        ReportKind::EscrowReport,
        ReportKind::EscrowNotification,
        ReportKind::RegistryFunctions,
        ReportKind::RegistrarTransactions,
    ];

    /// Resource path segment
    pub fn resource_name(self) -> &'static str {
        match self {
            ReportKind::EscrowReport => "registry-escrow-report",
            ReportKind::EscrowNotification => "escrow-agent-notification",
            ReportKind::RegistryFunctions => "registry-functions-activity",
            ReportKind::RegistrarTransactions => "registrar-transactions",
        }
    }

    /// Date granularity of status checks and period ids
    pub fn date_format(self) -> DateFormat {
        match self {
            ReportKind::EscrowReport | ReportKind::EscrowNotification => DateFormat::Daily,
            ReportKind::RegistryFunctions | ReportKind::RegistrarTransactions => {
                DateFormat::Monthly
            }
        }
    }

    /// Payload media type, sent as `Content-Type` and `Accept`
    pub fn content_type(self) -> &'static str {
        match self {
            ReportKind::EscrowReport | ReportKind::EscrowNotification => "text/xml",
            ReportKind::RegistryFunctions | ReportKind::RegistrarTransactions => "text/csv",
        }
    }

    /// Method used for submissions
    pub fn submit_method(self) -> Method {
        match self {
            ReportKind::EscrowNotification => Method::Post,
            _ => Method::Put,
        }
    }

    /// What the submit URL id segment holds
    pub fn submit_key(self) -> SubmitKey {
        match self {
            ReportKind::EscrowReport => SubmitKey::Identifier,
            ReportKind::EscrowNotification => SubmitKey::None,
            ReportKind::RegistryFunctions | ReportKind::RegistrarTransactions => {
                SubmitKey::Period
            }
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}
