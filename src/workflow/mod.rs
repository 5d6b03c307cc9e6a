//! Test-request workflow — role-gated handlers over the five-stage lifecycle.
//!
//! Every handler follows one shape: require role → fetch by id (fail fast on
//! absence) → validate input → assert the precondition status → mutate the
//! sub-record and status together → persist → return the updated entity.
//! Fetch, mutate, and save run inside a single transaction so the sub-record
//! attachment and the status transition are never observed independently.

pub mod consultation;
pub mod lab;
pub mod registration;

use rusqlite::Connection;
use thiserror::Error;

use crate::authorization::AccessDenied;
use crate::db::{repository, DatabaseError};
use crate::models::enums::RequestStatus;
use crate::models::TestRequest;

/// Failures surfaced to the transport layer. The Display strings of
/// `InvalidId` and `Validation` are a compatibility contract: consumers
/// match on the "Invalid ID" and "ConstraintViolationException" substrings.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Invalid ID: no test request found for request id {0}")]
    InvalidId(i64),

    #[error("ConstraintViolationException: {0}")]
    Validation(String),

    #[error("cannot {action} a test request in status {}", .from.as_str())]
    IllegalTransition {
        from: RequestStatus,
        action: &'static str,
    },

    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Look up a request, failing fast with `InvalidId` when it does not exist.
pub(crate) fn fetch_request(
    conn: &Connection,
    request_id: i64,
) -> Result<TestRequest, WorkflowError> {
    repository::find_by_id(conn, request_id)?.ok_or(WorkflowError::InvalidId(request_id))
}

/// Status transition guard. Asserts the request sits at the expected
/// predecessor stage and returns its successor; the workflow is strictly
/// monotonic, so anything else is an illegal transition.
pub(crate) fn advance(
    request: &TestRequest,
    expected: RequestStatus,
    action: &'static str,
) -> Result<RequestStatus, WorkflowError> {
    if request.status != expected {
        return Err(WorkflowError::IllegalTransition {
            from: request.status.clone(),
            action,
        });
    }
    request.status.next().ok_or(WorkflowError::IllegalTransition {
        from: request.status.clone(),
        action,
    })
}
