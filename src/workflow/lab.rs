//! Lab workflow handler — assignment to a tester and recording of results.

use rusqlite::Connection;

use crate::authorization::{require_role, Role};
use crate::db::{repository, DatabaseError};
use crate::models::enums::RequestStatus;
use crate::models::{CreateLabResult, LabResult, TestRequest};

use super::{advance, fetch_request, WorkflowError};

/// Assign an initiated request to the calling lab tester. Attaches an empty
/// lab result and moves the request to LAB_TEST_IN_PROGRESS.
pub fn assign_for_lab_test(
    conn: &mut Connection,
    caller: Role,
    request_id: i64,
) -> Result<TestRequest, WorkflowError> {
    require_role(caller, Role::Tester)?;

    let tx = conn.transaction().map_err(DatabaseError::from)?;
    let mut request = fetch_request(&tx, request_id)?;
    request.status = advance(&request, RequestStatus::Initiated, "assign for lab test")?;
    request.lab_result = Some(LabResult::default());
    repository::save_test_request(&tx, &request)?;
    tx.commit().map_err(DatabaseError::from)?;

    tracing::info!(
        request_id,
        status = request.status.as_str(),
        "test request assigned for lab test"
    );
    Ok(request)
}

/// Record the lab outcome for a request under test. Copies the vitals and
/// result into the owned lab result and moves the request to
/// LAB_TEST_COMPLETED.
pub fn update_lab_test(
    conn: &mut Connection,
    caller: Role,
    request_id: i64,
    input: &CreateLabResult,
) -> Result<TestRequest, WorkflowError> {
    require_role(caller, Role::Tester)?;

    let tx = conn.transaction().map_err(DatabaseError::from)?;
    let mut request = fetch_request(&tx, request_id)?;

    let result = input
        .result
        .clone()
        .ok_or_else(|| WorkflowError::Validation("lab result must not be null".into()))?;

    request.status = advance(
        &request,
        RequestStatus::LabTestInProgress,
        "record a lab result for",
    )?;

    let lab = request.lab_result.get_or_insert_with(LabResult::default);
    lab.blood_pressure = Some(input.blood_pressure.clone());
    lab.heart_beat = Some(input.heart_beat.clone());
    lab.oxygen_level = Some(input.oxygen_level.clone());
    lab.temperature = Some(input.temperature.clone());
    lab.comments = Some(input.comments.clone());
    lab.result = Some(result);

    repository::save_test_request(&tx, &request)?;
    tx.commit().map_err(DatabaseError::from)?;

    tracing::info!(
        request_id,
        status = request.status.as_str(),
        "lab result recorded"
    );
    Ok(request)
}
