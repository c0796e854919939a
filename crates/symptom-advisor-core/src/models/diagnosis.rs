//! Diagnosis output models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::knowledge::Urgency;

/// Deduplicated set of symptom codes a diagnosis was computed from.
///
/// Ordered so that results and persisted records are deterministic.
pub type SymptomSet = BTreeSet<String>;

/// A condition scored against a set of user symptoms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCondition {
    /// Condition display name
    pub condition: String,
    /// Condition description
    pub description: String,
    /// Coverage of the condition's weighted symptom inventory (0.0 - 100.0, one decimal)
    pub confidence: f64,
    /// Number of primary symptoms present
    pub primary_matches: u32,
    /// Number of secondary symptoms present
    pub secondary_matches: u32,
    /// Number of severity indicators present
    pub severity_matches: u32,
    /// Advice for this condition
    pub recommendations: Vec<String>,
    /// Urgency derived from the matches
    pub urgency: Urgency,
    /// User symptoms relevant to this condition
    pub matched_symptoms: Vec<String>,
}

/// Result of a full diagnosis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisResult {
    /// Up to three conditions, highest confidence first
    pub diagnoses: Vec<ScoredCondition>,
    /// Summary message derived from the top result
    pub message: String,
    /// Number of distinct symptoms considered
    pub total_symptoms: u32,
    /// Symptoms used for scoring; absent when none were provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_symptoms: Option<Vec<String>>,
}

impl DiagnosisResult {
    /// The highest-ranked condition, if any matched.
    pub fn top(&self) -> Option<&ScoredCondition> {
        self.diagnoses.first()
    }

    /// Highest urgency across the ranked conditions.
    pub fn highest_urgency(&self) -> Option<Urgency> {
        self.diagnoses.iter().map(|d| d.urgency).max()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
