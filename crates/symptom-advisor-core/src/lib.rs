//! Symptom Advisor Core Library
//!
//! Rule-based symptom-to-condition advice with a local submission store.
//!
//! # Architecture
//!
//! ```text
//! Symptom form ──→ Intake validation
//!                         │
//!          ┌──────────────┴──────────────┐
//!          │                             │
//!   selected codes               free-text description
//!          │                             │
//!          │                   Synonym normalization
//!          │                             │
//!          └──────────────┬──────────────┘
//!                         ▼
//!                    symptom set
//!                         │
//!           Score every condition (3 / 1 / 2)
//!                         │
//!            Rank, keep top 3, summarize
//!                         │
//!               ┌─────────▼─────────┐
//!               │  SQLite store     │
//!               │  submission JSON  │
//!               │  + feedback       │
//!               └───────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Advice, never a diagnosis.** Every result steers the user toward a
//! healthcare professional; urgency is raised whenever a severity indicator
//! is present.
//!
//! # Modules
//!
//! - [`knowledge`]: Static conditions, synonyms, labels and example bundles
//! - [`engine`]: Normalizer, scorer and ranking
//! - [`intake`]: Form validation
//! - [`db`]: SQLite store for submissions and feedback
//! - [`service`]: Validation, diagnosis and persistence behind one API
//! - [`models`]: Domain types

pub mod db;
pub mod engine;
pub mod intake;
pub mod knowledge;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use db::Database;
pub use engine::{DiagnosticEngine, Normalizer};
pub use intake::{IntakeError, SubmissionForm, ValidatedSubmission};
pub use knowledge::KnowledgeBase;
pub use models::{
    Catalog, DiagnosisResult, ExampleBundle, Feedback, ScoredCondition, Submission, Submitter,
    SymptomOption, Urgency,
};
pub use service::{AdvisorService, ServiceError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum AdvisorError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ServiceError> for AdvisorError {
    fn from(e: ServiceError) -> Self {
        let message = e.user_message();
        match e {
            ServiceError::Validation(_) => AdvisorError::Validation(message),
            ServiceError::NotFound(_) => AdvisorError::NotFound(message),
            ServiceError::Storage(_) => AdvisorError::Storage(message),
        }
    }
}

impl From<serde_json::Error> for AdvisorError {
    fn from(e: serde_json::Error) -> Self {
        AdvisorError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for AdvisorError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        tracing::error!("Lock poisoned: {}", e);
        AdvisorError::Storage(service::STORAGE_FAILURE_MESSAGE.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create an advisor backed by the database at the given path.
#[uniffi::export]
pub fn open_advisor(path: String) -> Result<Arc<SymptomAdvisor>, AdvisorError> {
    let service = AdvisorService::open(&path)?;
    Ok(Arc::new(SymptomAdvisor::new(service)))
}

/// Create an advisor over an in-memory database (for testing).
#[uniffi::export]
pub fn open_advisor_in_memory() -> Result<Arc<SymptomAdvisor>, AdvisorError> {
    let service = AdvisorService::open_in_memory()?;
    Ok(Arc::new(SymptomAdvisor::new(service)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe advisor for FFI.
///
/// Diagnosis and catalog reads go straight to the engine; anything touching
/// the store takes the lock.
#[derive(uniffi::Object)]
pub struct SymptomAdvisor {
    engine: DiagnosticEngine,
    service: Arc<Mutex<AdvisorService>>,
}

impl SymptomAdvisor {
    fn new(service: AdvisorService) -> Self {
        Self {
            engine: *service.engine(),
            service: Arc::new(Mutex::new(service)),
        }
    }
}

#[uniffi::export]
impl SymptomAdvisor {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// All selectable symptoms, sorted by code.
    pub fn list_symptoms(&self) -> Vec<FfiSymptomOption> {
        self.engine.symptoms().into_iter().map(Into::into).collect()
    }

    /// Search symptoms for the picker.
    pub fn search_symptoms(&self, query: String, limit: u32) -> Vec<FfiSymptomOption> {
        self.engine
            .search_symptoms(&query, limit as usize)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Example symptom bundles.
    pub fn list_example_bundles(&self) -> Vec<FfiExampleBundle> {
        self.engine
            .example_bundles()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Example bundle by slug.
    pub fn get_example_bundle(&self, slug: String) -> Result<FfiExampleBundle, AdvisorError> {
        self.engine
            .example_bundle(&slug)
            .map(Into::into)
            .ok_or_else(|| ServiceError::bundle_not_found(&slug).into())
    }

    // =========================================================================
    // Diagnosis Operations
    // =========================================================================

    /// Diagnose without storing anything.
    pub fn diagnose(&self, selected: Vec<String>, free_text: String) -> FfiDiagnosisResult {
        self.engine.diagnose(&selected, &free_text).into()
    }

    /// Diagnose and return the result as JSON.
    pub fn diagnose_json(
        &self,
        selected: Vec<String>,
        free_text: String,
    ) -> Result<String, AdvisorError> {
        Ok(self.engine.diagnose(&selected, &free_text).to_json()?)
    }

    // =========================================================================
    // Submission Operations
    // =========================================================================

    /// Validate, diagnose and store a submission.
    pub fn submit(&self, form: FfiSubmissionForm) -> Result<FfiSubmission, AdvisorError> {
        let mut service = self.service.lock()?;
        let submission = service.submit(&form.into())?;
        Ok(submission.into())
    }

    /// Record accuracy feedback. A second call replaces the first.
    pub fn record_feedback(
        &self,
        submission_id: String,
        is_accurate: bool,
        comments: Option<String>,
    ) -> Result<FfiFeedback, AdvisorError> {
        let mut service = self.service.lock()?;
        let feedback = service.record_feedback(&submission_id, is_accurate, comments.as_deref())?;
        Ok(feedback.into())
    }

    /// Get a stored submission.
    pub fn get_submission(&self, submission_id: String) -> Result<FfiSubmission, AdvisorError> {
        let service = self.service.lock()?;
        Ok(service.submission(&submission_id)?.into())
    }

    /// All submissions, newest first.
    pub fn get_history(&self) -> Result<Vec<FfiSubmission>, AdvisorError> {
        let service = self.service.lock()?;
        let history = service.history()?;
        Ok(history.into_iter().map(Into::into).collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe symptom option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSymptomOption {
    pub code: String,
    pub display: String,
}

impl From<SymptomOption> for FfiSymptomOption {
    fn from(option: SymptomOption) -> Self {
        Self {
            code: option.code,
            display: option.display,
        }
    }
}

/// FFI-safe example bundle.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExampleBundle {
    pub slug: String,
    pub name: String,
    pub symptoms: Vec<String>,
    pub description: String,
}

impl From<ExampleBundle> for FfiExampleBundle {
    fn from(bundle: ExampleBundle) -> Self {
        Self {
            slug: bundle.slug(),
            name: bundle.name,
            symptoms: bundle.symptoms,
            description: bundle.description,
        }
    }
}

/// FFI-safe scored condition.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScoredCondition {
    pub condition: String,
    pub description: String,
    pub confidence: f64,
    pub primary_matches: u32,
    pub secondary_matches: u32,
    pub severity_matches: u32,
    pub recommendations: Vec<String>,
    /// "low", "medium", "high" or "urgent"
    pub urgency: String,
    pub matched_symptoms: Vec<String>,
}

impl From<ScoredCondition> for FfiScoredCondition {
    fn from(scored: ScoredCondition) -> Self {
        Self {
            condition: scored.condition,
            description: scored.description,
            confidence: scored.confidence,
            primary_matches: scored.primary_matches,
            secondary_matches: scored.secondary_matches,
            severity_matches: scored.severity_matches,
            recommendations: scored.recommendations,
            urgency: scored.urgency.as_str().to_string(),
            matched_symptoms: scored.matched_symptoms,
        }
    }
}

/// FFI-safe diagnosis result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiagnosisResult {
    pub diagnoses: Vec<FfiScoredCondition>,
    pub message: String,
    pub total_symptoms: u32,
    pub processed_symptoms: Option<Vec<String>>,
}

impl From<DiagnosisResult> for FfiDiagnosisResult {
    fn from(result: DiagnosisResult) -> Self {
        Self {
            diagnoses: result.diagnoses.into_iter().map(Into::into).collect(),
            message: result.message,
            total_symptoms: result.total_symptoms,
            processed_symptoms: result.processed_symptoms,
        }
    }
}

/// FFI-safe submission form. Fields are raw user input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubmissionForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub symptoms: Vec<String>,
    pub symptoms_text: String,
}

impl From<FfiSubmissionForm> for SubmissionForm {
    fn from(form: FfiSubmissionForm) -> Self {
        SubmissionForm {
            name: form.name,
            age: form.age,
            gender: form.gender,
            location: form.location,
            symptoms: form.symptoms,
            symptoms_text: form.symptoms_text,
        }
    }
}

/// FFI-safe feedback.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeedback {
    pub id: String,
    pub submission_id: String,
    pub is_accurate: bool,
    pub comments: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Feedback> for FfiFeedback {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            submission_id: feedback.submission_id,
            is_accurate: feedback.is_accurate,
            comments: feedback.comments,
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

/// FFI-safe stored submission.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubmission {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub symptoms_selected: Vec<String>,
    pub symptoms_text: Option<String>,
    pub diagnosis: FfiDiagnosisResult,
    pub created_at: String,
    pub feedback: Option<FfiFeedback>,
}

impl From<Submission> for FfiSubmission {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            name: submission.submitter.name,
            age: submission.submitter.age,
            gender: submission.submitter.gender,
            location: submission.submitter.location,
            symptoms_selected: submission.symptoms_selected,
            symptoms_text: submission.symptoms_text,
            diagnosis: submission.diagnosis.into(),
            created_at: submission.created_at,
            feedback: submission.feedback.map(Into::into),
        }
    }
}
