//! Intake validation for symptom submissions.
//!
//! Turns raw form input into a [`ValidatedSubmission`]. Optional fields are
//! forgiving: blank or malformed values become `None` instead of errors. The
//! only rejection is a form with nothing to diagnose.

use thiserror::Error;

use crate::models::{Submitter, MAX_AGE};

/// Intake errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please select symptoms or describe how you feel.")]
    NoSymptoms,
}

/// Raw form input, exactly as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub symptoms: Vec<String>,
    pub symptoms_text: String,
}

/// Cleaned submission ready for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub submitter: Submitter,
    /// Selected symptom codes, trimmed, in form order
    pub symptoms: Vec<String>,
    pub symptoms_text: Option<String>,
}

impl SubmissionForm {
    /// Validate and clean the form.
    pub fn validate(&self) -> Result<ValidatedSubmission, IntakeError> {
        let symptoms: Vec<String> = self
            .symptoms
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let symptoms_text = non_empty(&self.symptoms_text);

        if symptoms.is_empty() && symptoms_text.is_none() {
            return Err(IntakeError::NoSymptoms);
        }

        Ok(ValidatedSubmission {
            submitter: Submitter {
                name: non_empty(&self.name),
                age: parse_age(&self.age),
                gender: non_empty(&self.gender),
                location: non_empty(&self.location),
            },
            symptoms,
            symptoms_text,
        })
    }
}

/// Parse an age field. Blank, non-integer and out-of-range input all yield `None`.
pub fn parse_age(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|age| (0..=i64::from(MAX_AGE)).contains(age))
        .and_then(|age| u8::try_from(age).ok())
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
