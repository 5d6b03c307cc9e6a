//! Consultation workflow handler — assignment to a doctor and recording of
//! the consultation outcome.

use rusqlite::Connection;

use crate::authorization::{require_role, Role};
use crate::db::{repository, DatabaseError};
use crate::models::enums::RequestStatus;
use crate::models::{Consultation, CreateConsultationRequest, TestRequest};

use super::{advance, fetch_request, WorkflowError};

/// Assign a lab-completed request to the calling doctor. Attaches an empty
/// consultation and moves the request to DIAGNOSIS_IN_PROCESS.
pub fn assign_for_consultation(
    conn: &mut Connection,
    caller: Role,
    request_id: i64,
) -> Result<TestRequest, WorkflowError> {
    require_role(caller, Role::Doctor)?;

    let tx = conn.transaction().map_err(DatabaseError::from)?;
    let mut request = fetch_request(&tx, request_id)?;
    request.status = advance(
        &request,
        RequestStatus::LabTestCompleted,
        "assign for consultation",
    )?;
    request.consultation = Some(Consultation::default());
    repository::save_test_request(&tx, &request)?;
    tx.commit().map_err(DatabaseError::from)?;

    tracing::info!(
        request_id,
        status = request.status.as_str(),
        "test request assigned for consultation"
    );
    Ok(request)
}

/// Record the doctor's suggestion for a request under diagnosis. Copies the
/// suggestion and comments into the owned consultation and completes the
/// request.
pub fn update_consultation(
    conn: &mut Connection,
    caller: Role,
    request_id: i64,
    input: &CreateConsultationRequest,
) -> Result<TestRequest, WorkflowError> {
    require_role(caller, Role::Doctor)?;

    let tx = conn.transaction().map_err(DatabaseError::from)?;
    let mut request = fetch_request(&tx, request_id)?;

    let suggestion = input
        .suggestion
        .clone()
        .ok_or_else(|| WorkflowError::Validation("consultation suggestion must not be null".into()))?;

    request.status = advance(
        &request,
        RequestStatus::DiagnosisInProcess,
        "record a consultation for",
    )?;

    let consultation = request
        .consultation
        .get_or_insert_with(Consultation::default);
    consultation.suggestion = Some(suggestion);
    consultation.comments = input.comments.clone();

    repository::save_test_request(&tx, &request)?;
    tx.commit().map_err(DatabaseError::from)?;

    tracing::info!(
        request_id,
        status = request.status.as_str(),
        "consultation recorded"
    );
    Ok(request)
}
