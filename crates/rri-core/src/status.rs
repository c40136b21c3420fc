//! HTTP status dispatch
//!
//! The reporting API documents a fixed set of status codes. Each operation
//! accepts two of them as non-error outcomes; every other code is a failure,
//! and codes the API does not document are [`Error::UnknownStatus`]. There
//! is no success fallthrough, so an unexpected 201 or 302 fails as well.

use crate::Error;
use crate::Result;

/// Outcome of a status check: `true` on 200, `false` on 404
pub fn check_outcome(status: u16) -> Result<bool> {
    match status {
        200 => Ok(true),
        404 => Ok(false),
        other => Err(failure(other)),
    }
}

/// Outcome of a submission: `true` on 200, `false` on 400
pub fn submit_outcome(status: u16) -> Result<bool> {
    match status {
        200 => Ok(true),
        400 => Ok(false),
        other => Err(failure(other)),
    }
}

/// The failure for a status that no operation handled
pub fn failure(status: u16) -> Error {
    match status {
        400 => Error::Rejected(400),
        401 => Error::InvalidCredentials,
        403 => Error::InvalidAccess,
        405 => Error::InvalidMethod,
        500 => Error::GeneralFailure,
        501 => Error::NotImplemented,
        other => Error::UnknownStatus(other),
    }
}
