//! Advisor service: validation, diagnosis and persistence behind one API.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use crate::db::{Database, DbError};
use crate::engine::DiagnosticEngine;
use crate::intake::{IntakeError, SubmissionForm};
use crate::models::{Catalog, DiagnosisResult, ExampleBundle, Feedback, Submission};

/// Shown whenever storage fails. Internal detail stays in the logs.
pub const STORAGE_FAILURE_MESSAGE: &str =
    "Something went wrong while saving your information. Please try again.";

/// Service errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid submission: {0}")]
    Validation(#[from] IntakeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(DbError),
}

impl ServiceError {
    /// Message safe to show to the end user.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(e) => e.to_string(),
            ServiceError::NotFound(what) => format!("{} was not found.", what),
            ServiceError::Storage(_) => STORAGE_FAILURE_MESSAGE.to_string(),
        }
    }

    /// No example bundle has this slug.
    pub fn bundle_not_found(slug: &str) -> Self {
        ServiceError::NotFound(format!("Example bundle '{}'", slug))
    }

    /// Whether the same request may succeed if retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceError::Storage(_))
    }
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(what) => ServiceError::NotFound(what),
            other => ServiceError::Storage(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Owns the store and the engine.
pub struct AdvisorService {
    db: Database,
    engine: DiagnosticEngine,
}

impl AdvisorService {
    /// Build a service over an open database and the built-in knowledge base.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            engine: DiagnosticEngine::default(),
        }
    }

    /// Open (or create) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let db = Database::open(path).map_err(|e| log_storage("open database", e))?;
        info!(path = %path.display(), "Opened submission store");
        Ok(Self::new(db))
    }

    /// Service over an in-memory database.
    pub fn open_in_memory() -> ServiceResult<Self> {
        let db = Database::open_in_memory().map_err(|e| log_storage("open database", e))?;
        Ok(Self::new(db))
    }

    pub fn engine(&self) -> &DiagnosticEngine {
        &self.engine
    }

    /// Symptom picker options and example bundles.
    pub fn catalog(&self) -> Catalog {
        Catalog {
            symptoms: self.engine.symptoms(),
            example_bundles: self.engine.example_bundles(),
        }
    }

    /// Example bundle by slug.
    pub fn example_bundle(&self, slug: &str) -> ServiceResult<ExampleBundle> {
        self.engine
            .example_bundle(slug)
            .ok_or_else(|| ServiceError::bundle_not_found(slug))
    }

    /// Diagnose without storing anything.
    pub fn diagnose<S: AsRef<str>>(&self, selected: &[S], free_text: &str) -> DiagnosisResult {
        self.engine.diagnose(selected, free_text)
    }

    /// Validate a form, diagnose it and store the result.
    pub fn submit(&mut self, form: &SubmissionForm) -> ServiceResult<Submission> {
        let validated = form.validate()?;

        let diagnosis = self.engine.diagnose(
            &validated.symptoms,
            validated.symptoms_text.as_deref().unwrap_or(""),
        );
        let submission = Submission::new(
            validated.submitter,
            validated.symptoms,
            validated.symptoms_text,
            diagnosis,
        );

        self.db
            .insert_submission(&submission)
            .map_err(|e| log_storage("save submission", e))?;

        info!(
            submission_id = %submission.id,
            total_symptoms = submission.diagnosis.total_symptoms,
            top = submission.diagnosis.top().map(|c| c.condition.as_str()).unwrap_or("none"),
            "Recorded submission"
        );
        Ok(submission)
    }

    /// Record (or replace) accuracy feedback for a submission.
    pub fn record_feedback(
        &mut self,
        submission_id: &str,
        is_accurate: bool,
        comments: Option<&str>,
    ) -> ServiceResult<Feedback> {
        let comments = comments.map(str::trim).filter(|c| !c.is_empty());

        let feedback = self
            .db
            .upsert_feedback(submission_id, is_accurate, comments)
            .map_err(|e| log_storage("save feedback", e))?;

        info!(submission_id, is_accurate, "Recorded feedback");
        Ok(feedback)
    }

    /// A stored submission with its feedback.
    pub fn submission(&self, id: &str) -> ServiceResult<Submission> {
        self.db
            .get_submission(id)
            .map_err(|e| log_storage("load submission", e))?
            .ok_or_else(|| ServiceError::NotFound(format!("Submission {}", id)))
    }

    /// All submissions, newest first.
    pub fn history(&self) -> ServiceResult<Vec<Submission>> {
        self.db
            .list_submissions()
            .map_err(|e| log_storage("load history", e))
    }
}

fn log_storage(operation: &str, e: DbError) -> ServiceError {
    let err = ServiceError::from(e);
    if let ServiceError::Storage(inner) = &err {
        error!(operation, error = %inner, "Storage failure");
    }
    err
}
