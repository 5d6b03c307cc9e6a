//! Patient-facing registration — creates a test request in the INITIATED
//! stage, ready to be picked up by a lab tester.

use chrono::Local;
use rusqlite::Connection;

use crate::authorization::{require_role, Role};
use crate::db::{repository, DatabaseError};
use crate::models::enums::RequestStatus;
use crate::models::{CreateTestRequest, TestRequest, User};

use super::WorkflowError;

/// Register a new test request for the calling patient. The request id is
/// supplied by the caller; a duplicate id, or an active (non-completed)
/// request for the same phone number, is rejected.
pub fn create_test_request(
    conn: &mut Connection,
    caller: Role,
    input: &CreateTestRequest,
    created_by: User,
) -> Result<TestRequest, WorkflowError> {
    require_role(caller, Role::Patient)?;

    if input.name.trim().is_empty() {
        return Err(WorkflowError::Validation("name must not be empty".into()));
    }
    if input.phone_number.trim().is_empty() {
        return Err(WorkflowError::Validation(
            "phone number must not be empty".into(),
        ));
    }

    let tx = conn.transaction().map_err(DatabaseError::from)?;
    if repository::find_by_id(&tx, input.request_id)?.is_some() {
        return Err(WorkflowError::Validation(format!(
            "a test request with id {} already exists",
            input.request_id
        )));
    }
    if repository::has_active_request_for_phone(&tx, &input.phone_number)? {
        return Err(WorkflowError::Validation(format!(
            "an active test request already exists for phone number {}",
            input.phone_number
        )));
    }

    let request = TestRequest {
        request_id: input.request_id,
        name: input.name.clone(),
        gender: input.gender.clone(),
        email: input.email.clone(),
        phone_number: input.phone_number.clone(),
        address: input.address.clone(),
        pin_code: input.pin_code,
        age: input.age,
        created: Local::now().date_naive(),
        status: RequestStatus::Initiated,
        created_by,
        lab_result: None,
        consultation: None,
    };
    repository::save_test_request(&tx, &request)?;
    tx.commit().map_err(DatabaseError::from)?;

    tracing::info!(request_id = request.request_id, "test request registered");
    Ok(request)
}
