// Per-entity operations
//
// Each submodule adds methods to `ApiClient` for one backend resource.
// Every method performs exactly one HTTP request.

mod auth;
mod blogs;
mod careers;
mod company;
mod contacts;
mod events;

use siteline_core::{ApiError, ErrorKind, Operation};

use crate::error::{ClientError, Result};

/// Reject empty identifiers before they turn into a request for the collection.
fn require_id(op: Operation, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(not_found(op));
    }
    Ok(())
}

/// The error a missing record produces, whether the backend or a lookup found it missing.
fn not_found(op: Operation) -> ClientError {
    ClientError::Api(ApiError {
        kind: ErrorKind::NotFound,
        status: None,
        message: op.not_found_message(),
    })
}
