use serde::{Deserialize, Serialize};

use super::enums::DoctorSuggestion;

/// Suggestion and notes recorded by a doctor. Attached empty when the
/// request is assigned for consultation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Consultation {
    pub suggestion: Option<DoctorSuggestion>,
    pub comments: Option<String>,
}

/// Input payload for recording a consultation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    pub suggestion: Option<DoctorSuggestion>,
    pub comments: Option<String>,
}
