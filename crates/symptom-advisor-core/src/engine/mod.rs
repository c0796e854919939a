//! Diagnostic engine.
//!
//! Pipeline: free text → Normalization ─┐
//!                                       ├→ symptom set → Scoring (every condition) → Ranking → Summary
//!           selected codes ────────────┘

mod catalog;
mod normalizer;
mod scorer;

pub use catalog::*;
pub use normalizer::*;
pub use scorer::*;

use crate::knowledge::KnowledgeBase;
use crate::models::{DiagnosisResult, ExampleBundle, ScoredCondition, SymptomOption, SymptomSet};

/// Number of conditions returned by a diagnosis.
pub const MAX_DIAGNOSES: usize = 3;

/// Top confidence above which the summary names a strong match.
pub const STRONG_MATCH_CONFIDENCE: f64 = 70.0;

/// Top confidence above which the summary names a possible match.
pub const POSSIBLE_MATCH_CONFIDENCE: f64 = 40.0;

pub const NO_SYMPTOMS_MESSAGE: &str =
    "No symptoms provided. Please select symptoms or describe how you feel.";

pub const NO_MATCH_MESSAGE: &str = "Based on your symptoms, we cannot match them to common conditions in our database. Please consult a healthcare professional for proper evaluation.";

pub const GENERIC_MATCH_MESSAGE: &str =
    "Your symptoms match several possible conditions. A healthcare professional can provide proper diagnosis.";

/// Engine that coordinates normalization, scoring and ranking.
///
/// Holds only shared references to static data, so it is `Copy` and can be
/// used from any number of threads without locking.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine {
    knowledge: &'static KnowledgeBase,
    normalizer: Normalizer,
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl DiagnosticEngine {
    /// Create an engine over a knowledge base.
    pub fn new(knowledge: &'static KnowledgeBase) -> Self {
        Self {
            knowledge,
            normalizer: Normalizer::new(knowledge.synonyms()),
        }
    }

    /// Normalize free text to symptom codes.
    pub fn normalize(&self, text: &str) -> SymptomSet {
        self.normalizer.normalize(text)
    }

    /// Diagnose from selected symptom codes plus optional free text.
    pub fn diagnose<S: AsRef<str>>(&self, selected: &[S], free_text: &str) -> DiagnosisResult {
        let mut all_symptoms = self.normalizer.normalize(free_text);
        all_symptoms.extend(selected.iter().map(|s| s.as_ref().to_string()));

        if all_symptoms.is_empty() {
            return DiagnosisResult {
                diagnoses: Vec::new(),
                message: NO_SYMPTOMS_MESSAGE.to_string(),
                total_symptoms: 0,
                processed_symptoms: None,
            };
        }

        let diagnoses = self.rank(&all_symptoms);
        let message = summary_message(diagnoses.first());

        DiagnosisResult {
            diagnoses,
            message,
            total_symptoms: all_symptoms.len() as u32,
            processed_symptoms: Some(all_symptoms.into_iter().collect()),
        }
    }

    /// Score every condition, drop zero-confidence ones, and keep the top
    /// [`MAX_DIAGNOSES`]. Ties keep knowledge-base declaration order.
    pub fn rank(&self, symptoms: &SymptomSet) -> Vec<ScoredCondition> {
        let mut scored: Vec<ScoredCondition> = self
            .knowledge
            .conditions()
            .iter()
            .map(|condition| score_condition(symptoms, condition))
            .filter(|c| c.confidence > 0.0)
            .collect();

        // Stable sort: equal confidences keep declaration order
        scored.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(MAX_DIAGNOSES);
        scored
    }

    /// All symptoms with display labels, sorted by code.
    pub fn symptoms(&self) -> Vec<SymptomOption> {
        list_all_symptoms(self.knowledge)
    }

    /// Example symptom bundles.
    pub fn example_bundles(&self) -> Vec<ExampleBundle> {
        list_example_bundles(self.knowledge)
    }

    /// Example bundle by slug.
    pub fn example_bundle(&self, slug: &str) -> Option<ExampleBundle> {
        find_example_bundle(self.knowledge, slug)
    }

    /// Picker search over the symptom catalog.
    pub fn search_symptoms(&self, query: &str, limit: usize) -> Vec<SymptomOption> {
        search_symptoms(self.knowledge, query, limit)
    }

    /// Get the knowledge base for direct access.
    pub fn knowledge(&self) -> &'static KnowledgeBase {
        self.knowledge
    }
}

/// Summary message based on the top-ranked condition only.
pub fn summary_message(top: Option<&ScoredCondition>) -> String {
    match top {
        None => NO_MATCH_MESSAGE.to_string(),
        Some(top) if top.confidence > STRONG_MATCH_CONFIDENCE => format!(
            "Your symptoms strongly suggest {}. Please seek medical attention for proper diagnosis and treatment.",
            top.condition
        ),
        Some(top) if top.confidence > POSSIBLE_MATCH_CONFIDENCE => format!(
            "Your symptoms may indicate {} or similar conditions. Medical evaluation is recommended.",
            top.condition
        ),
        Some(_) => GENERIC_MATCH_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{BundleDefinition, SynonymEntry};
    use crate::models::{BaseUrgency, ConditionDefinition, ConditionId, Symptom::*, Urgency};

    const NO_CODES: &[&str] = &[];

    fn engine() -> DiagnosticEngine {
        DiagnosticEngine::default()
    }

    #[test]
    fn test_no_symptoms() {
        let result = engine().diagnose(NO_CODES, "");
        assert!(result.diagnoses.is_empty());
        assert_eq!(result.message, NO_SYMPTOMS_MESSAGE);
        assert_eq!(result.total_symptoms, 0);
        assert!(result.processed_symptoms.is_none());
    }

    #[test]
    fn test_unmatched_text_is_no_symptoms() {
        // Text that normalizes to nothing counts as no symptoms at all
        let result = engine().diagnose(NO_CODES, "my left knee clicks");
        assert_eq!(result.message, NO_SYMPTOMS_MESSAGE);
    }

    #[test]
    fn test_malaria_scenario() {
        let result = engine().diagnose(&["fever", "chills", "headache", "sweating"], "");

        let top = result.top().unwrap();
        assert_eq!(top.condition, "Malaria");
        assert_eq!(top.primary_matches, 4);
        assert_eq!(top.confidence, 54.5);
        assert_eq!(top.urgency, Urgency::High);
        assert_eq!(
            result.message,
            "Your symptoms may indicate Malaria or similar conditions. Medical evaluation is recommended."
        );
        assert_eq!(result.total_symptoms, 4);
    }

    #[test]
    fn test_severity_scenario() {
        let result = engine().diagnose(&["high_fever", "severe_headache", "confusion"], "");

        let malaria = result.diagnoses.iter().find(|d| d.condition == "Malaria").unwrap();
        assert_eq!(malaria.severity_matches, 3);
        assert_eq!(malaria.primary_matches, 0);
        assert_eq!(malaria.urgency, Urgency::Urgent);
        // 6/22 = 27.3 for malaria; common cold: high_fever + severe_headache = 4/21 = 19.0
        assert_eq!(malaria.confidence, 27.3);
        assert!(result.diagnoses.iter().all(|d| d.urgency == Urgency::Urgent));
    }

    #[test]
    fn test_free_text_scenario() {
        let result = engine().diagnose(NO_CODES, "I have a runny nose and sneezing");

        assert_eq!(
            result.processed_symptoms,
            Some(vec!["runny_nose".to_string(), "sneezing".to_string()])
        );
        let top = result.top().unwrap();
        assert_eq!(top.condition, "Common Cold");
        assert_eq!(top.primary_matches, 2);
        assert_eq!(top.confidence, 28.6);
        assert_eq!(top.urgency, Urgency::Low);
        assert_eq!(result.message, GENERIC_MATCH_MESSAGE);

        // Flu also lists runny_nose
        assert_eq!(result.diagnoses[1].condition, "Influenza (Flu)");
    }

    #[test]
    fn test_unknown_code_scenario() {
        let result = engine().diagnose(&["glowing_toenails"], "");
        assert!(result.diagnoses.is_empty());
        assert_eq!(result.message, NO_MATCH_MESSAGE);
        assert_eq!(result.total_symptoms, 1);
        assert_eq!(result.processed_symptoms, Some(vec!["glowing_toenails".to_string()]));
    }

    #[test]
    fn test_selection_and_text_are_merged() {
        let result = engine().diagnose(&["fever", "cough"], "a bad fever and a sore throat");
        assert_eq!(result.total_symptoms, 3);
        assert_eq!(
            result.processed_symptoms,
            Some(vec!["cough".to_string(), "fever".to_string(), "sore_throat".to_string()])
        );
    }

    #[test]
    fn test_top_three_sorted() {
        let result = engine().diagnose(
            &["fever", "headache", "fatigue", "weakness", "runny_nose", "abdominal_pain"],
            "",
        );
        assert_eq!(result.diagnoses.len(), MAX_DIAGNOSES);
        for pair in result.diagnoses.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_strong_match_message() {
        let result = engine().diagnose(
            &["fever", "chills", "headache", "sweating", "nausea", "vomiting", "fatigue"],
            "",
        );
        // (12 + 3) / 22 = 68.2, still "may indicate"
        assert_eq!(result.top().unwrap().confidence, 68.2);
        assert!(result.message.starts_with("Your symptoms may indicate Malaria"));

        let result = engine().diagnose(
            &[
                "fever",
                "chills",
                "headache",
                "sweating",
                "nausea",
                "vomiting",
                "fatigue",
                "body_aches",
            ],
            "",
        );
        // 16 / 22 = 72.7
        assert_eq!(result.top().unwrap().confidence, 72.7);
        assert_eq!(
            result.message,
            "Your symptoms strongly suggest Malaria. Please seek medical attention for proper diagnosis and treatment."
        );
    }

    static TIE_CONDITIONS: [ConditionDefinition; 2] = [
        ConditionDefinition {
            id: ConditionId::Typhoid,
            name: "First",
            description: "",
            primary_symptoms: &[Cough],
            secondary_symptoms: &[],
            severity_indicators: &[],
            recommendations: &[],
            base_urgency: BaseUrgency::Low,
        },
        ConditionDefinition {
            id: ConditionId::Malaria,
            name: "Second",
            description: "",
            primary_symptoms: &[Cough],
            secondary_symptoms: &[],
            severity_indicators: &[],
            recommendations: &[],
            base_urgency: BaseUrgency::Low,
        },
    ];
    static NO_SYNONYMS: [SynonymEntry; 0] = [];
    static NO_BUNDLES: [BundleDefinition; 0] = [];
    static TIE_KB: KnowledgeBase = KnowledgeBase::new(&TIE_CONDITIONS, &NO_SYNONYMS, &NO_BUNDLES);

    #[test]
    fn test_ties_keep_declaration_order() {
        let engine = DiagnosticEngine::new(&TIE_KB);
        let result = engine.diagnose(&["cough"], "");
        let names: Vec<&str> = result.diagnoses.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(result.diagnoses[0].confidence, 100.0);
        assert!(result.message.contains("strongly suggest First"));
    }

    #[test]
    fn test_summary_thresholds_are_exclusive() {
        let make = |confidence| ScoredCondition {
            condition: "X".into(),
            description: String::new(),
            confidence,
            primary_matches: 1,
            secondary_matches: 0,
            severity_matches: 0,
            recommendations: vec![],
            urgency: Urgency::Low,
            matched_symptoms: vec![],
        };

        assert!(summary_message(Some(&make(70.0))).starts_with("Your symptoms may indicate X"));
        assert!(summary_message(Some(&make(70.1))).starts_with("Your symptoms strongly suggest X"));
        assert_eq!(summary_message(Some(&make(40.0))), GENERIC_MATCH_MESSAGE);
        assert!(summary_message(Some(&make(40.1))).starts_with("Your symptoms may indicate X"));
        assert_eq!(summary_message(None), NO_MATCH_MESSAGE);
    }
}
