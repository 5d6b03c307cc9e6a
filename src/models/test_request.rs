use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::consultation::Consultation;
use super::enums::{Gender, RequestStatus};
use super::lab::LabResult;

/// The requesting user reference. Account management lives upstream;
/// only the identity needed to attribute a request is kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_name: String,
}

/// A patient's end-to-end COVID test tracking record.
///
/// `lab_result` is populated from LAB_TEST_IN_PROGRESS onwards,
/// `consultation` from DIAGNOSIS_IN_PROCESS onwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRequest {
    pub request_id: i64,
    pub name: String,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub pin_code: u32,
    pub age: u32,
    pub created: NaiveDate,
    pub status: RequestStatus,
    pub created_by: User,
    pub lab_result: Option<LabResult>,
    pub consultation: Option<Consultation>,
}

/// Input for registering a new test request. The request id is supplied
/// by the caller, not generated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTestRequest {
    pub request_id: i64,
    pub name: String,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub pin_code: u32,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_for_transport() {
        let request = TestRequest {
            request_id: 42,
            name: "someuser".into(),
            gender: Gender::Male,
            email: Some("someone@somedomain.com".into()),
            phone_number: "123456789".into(),
            address: "some Address".into(),
            pin_code: 716768,
            age: 78,
            created: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: RequestStatus::Initiated,
            created_by: User {
                id: 1,
                user_name: "someuser".into(),
            },
            lab_result: None,
            consultation: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["request_id"], 42);
        assert_eq!(json["status"], "Initiated");
        assert!(json["lab_result"].is_null());
        assert!(json["consultation"].is_null());
    }
}
