//! Persisted submission and feedback models.

use serde::{Deserialize, Serialize};

use super::diagnosis::DiagnosisResult;

/// Oldest accepted submitter age.
pub const MAX_AGE: u8 = 150;

/// Current UTC time as fixed-width RFC 3339, so stored timestamps sort as text.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Optional information about the person submitting symptoms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submitter {
    pub name: Option<String>,
    /// Age in years (0 - 150)
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub location: Option<String>,
}

/// A stored symptom submission and the diagnosis it produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// Unique submission ID (UUID)
    pub id: String,
    /// Submitter details
    pub submitter: Submitter,
    /// Symptom codes as selected on the form
    pub symptoms_selected: Vec<String>,
    /// Free-text description, if any
    pub symptoms_text: Option<String>,
    /// Diagnosis returned to the user
    pub diagnosis: DiagnosisResult,
    /// Creation timestamp
    pub created_at: String,
    /// Accuracy feedback, if given
    pub feedback: Option<Feedback>,
}

impl Submission {
    /// Create a new submission record.
    pub fn new(
        submitter: Submitter,
        symptoms_selected: Vec<String>,
        symptoms_text: Option<String>,
        diagnosis: DiagnosisResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            submitter,
            symptoms_selected,
            symptoms_text,
            diagnosis,
            created_at: timestamp_now(),
            feedback: None,
        }
    }
}

/// Accuracy feedback for a submission. At most one per submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    /// Unique feedback ID (UUID)
    pub id: String,
    /// Submission this feedback belongs to
    pub submission_id: String,
    /// Whether the user found the diagnosis accurate
    pub is_accurate: bool,
    /// Optional comments
    pub comments: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}
