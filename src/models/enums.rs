use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(RequestStatus {
    Initiated => "initiated",
    LabTestInProgress => "lab_test_in_progress",
    LabTestCompleted => "lab_test_completed",
    DiagnosisInProcess => "diagnosis_in_process",
    Completed => "completed",
});

impl RequestStatus {
    /// The successor stage in the workflow, or `None` once completed.
    /// The workflow is strictly linear: no skipping, no going back.
    pub fn next(&self) -> Option<RequestStatus> {
        match self {
            Self::Initiated => Some(Self::LabTestInProgress),
            Self::LabTestInProgress => Some(Self::LabTestCompleted),
            Self::LabTestCompleted => Some(Self::DiagnosisInProcess),
            Self::DiagnosisInProcess => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

str_enum!(TestStatus {
    Positive => "positive",
    Negative => "negative",
});

str_enum!(DoctorSuggestion {
    NoIssues => "no_issues",
    HomeQuarantine => "home_quarantine",
    Referred => "referred",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn request_status_round_trip() {
        for (variant, s) in [
            (RequestStatus::Initiated, "initiated"),
            (RequestStatus::LabTestInProgress, "lab_test_in_progress"),
            (RequestStatus::LabTestCompleted, "lab_test_completed"),
            (RequestStatus::DiagnosisInProcess, "diagnosis_in_process"),
            (RequestStatus::Completed, "completed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RequestStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn request_status_next_walks_the_full_workflow() {
        let mut status = RequestStatus::Initiated;
        let mut seen = vec![status.clone()];
        while let Some(next) = status.next() {
            seen.push(next.clone());
            status = next;
        }
        assert_eq!(
            seen,
            vec![
                RequestStatus::Initiated,
                RequestStatus::LabTestInProgress,
                RequestStatus::LabTestCompleted,
                RequestStatus::DiagnosisInProcess,
                RequestStatus::Completed,
            ]
        );
    }

    #[test]
    fn completed_has_no_successor() {
        assert!(RequestStatus::Completed.next().is_none());
    }

    #[test]
    fn test_status_round_trip() {
        for (variant, s) in [
            (TestStatus::Positive, "positive"),
            (TestStatus::Negative, "negative"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TestStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn doctor_suggestion_round_trip() {
        for (variant, s) in [
            (DoctorSuggestion::NoIssues, "no_issues"),
            (DoctorSuggestion::HomeQuarantine, "home_quarantine"),
            (DoctorSuggestion::Referred, "referred"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DoctorSuggestion::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(RequestStatus::from_str("invalid").is_err());
        assert!(TestStatus::from_str("unknown").is_err());
        assert!(Gender::from_str("").is_err());
    }
}
