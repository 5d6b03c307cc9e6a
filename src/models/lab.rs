use serde::{Deserialize, Serialize};

use super::enums::TestStatus;

/// Vitals and outcome recorded by a lab tester. Attached empty when the
/// request is assigned for testing; filled in when the result is recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabResult {
    pub blood_pressure: Option<String>,
    pub heart_beat: Option<String>,
    pub oxygen_level: Option<String>,
    pub temperature: Option<String>,
    pub comments: Option<String>,
    pub result: Option<TestStatus>,
}

/// Input payload for recording a lab result. `result` stays optional so a
/// missing outcome is caught by validation rather than at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabResult {
    pub blood_pressure: String,
    pub heart_beat: String,
    pub oxygen_level: String,
    pub temperature: String,
    pub comments: String,
    pub result: Option<TestStatus>,
}
