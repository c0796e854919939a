//! Golden tests for the diagnostic engine.
//!
//! These tests pin rankings, confidences and urgencies for known inputs
//! against the built-in knowledge base.

use symptom_advisor_core::engine::{NO_MATCH_MESSAGE, NO_SYMPTOMS_MESSAGE};
use symptom_advisor_core::{DiagnosticEngine, Urgency};

/// Test case from golden table.
struct GoldenCase {
    id: &'static str,
    selected: &'static [&'static str],
    text: &'static str,
    expected_processed: &'static [&'static str],
    /// (condition, confidence, urgency), in rank order
    expected_ranking: &'static [(&'static str, f64, Urgency)],
    expected_message_prefix: &'static str,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "malaria-classic",
            selected: &["fever", "chills", "headache", "sweating"],
            text: "",
            expected_processed: &["chills", "fever", "headache", "sweating"],
            expected_ranking: &[
                ("Malaria", 54.5, Urgency::High),
                ("Influenza (Flu)", 22.7, Urgency::Medium),
                ("Typhoid Fever", 4.5, Urgency::Low),
            ],
            expected_message_prefix: "Your symptoms may indicate Malaria or similar conditions.",
        },
        GoldenCase {
            id: "severity-only",
            selected: &["high_fever", "severe_headache", "confusion"],
            text: "",
            expected_processed: &["confusion", "high_fever", "severe_headache"],
            expected_ranking: &[
                ("Malaria", 27.3, Urgency::Urgent),
                ("Common Cold", 19.0, Urgency::Urgent),
                ("Typhoid Fever", 9.1, Urgency::Urgent),
            ],
            expected_message_prefix: "Your symptoms match several possible conditions.",
        },
        GoldenCase {
            id: "cold-free-text",
            selected: &[],
            text: "I have a runny nose and sneezing",
            expected_processed: &["runny_nose", "sneezing"],
            expected_ranking: &[
                ("Common Cold", 28.6, Urgency::Low),
                ("Influenza (Flu)", 13.6, Urgency::Medium),
            ],
            expected_message_prefix: "Your symptoms match several possible conditions.",
        },
        GoldenCase {
            id: "typhoid-with-tie",
            selected: &["prolonged_fever", "abdominal_pain", "diarrhea", "headache", "weakness"],
            text: "",
            expected_processed: &[
                "abdominal_pain",
                "diarrhea",
                "headache",
                "prolonged_fever",
                "weakness",
            ],
            // Malaria and Anemia tie at 13.6; declaration order wins
            expected_ranking: &[
                ("Typhoid Fever", 50.0, Urgency::High),
                ("Malaria", 13.6, Urgency::High),
                ("Anemia", 13.6, Urgency::Medium),
            ],
            expected_message_prefix: "Your symptoms may indicate Typhoid Fever",
        },
        GoldenCase {
            id: "anemia-free-text",
            selected: &[],
            text: "I feel dizziness and I am looking pale with shortness of breath",
            expected_processed: &["dizziness", "pale_skin", "shortness_of_breath"],
            expected_ranking: &[("Anemia", 31.8, Urgency::Medium)],
            expected_message_prefix: "Your symptoms match several possible conditions.",
        },
        GoldenCase {
            id: "cold-bundle",
            selected: &["runny_nose", "sneezing", "sore_throat", "mild_cough"],
            text: "",
            expected_processed: &["mild_cough", "runny_nose", "sneezing", "sore_throat"],
            expected_ranking: &[
                ("Common Cold", 57.1, Urgency::Low),
                ("Influenza (Flu)", 27.3, Urgency::Medium),
            ],
            expected_message_prefix: "Your symptoms may indicate Common Cold",
        },
        GoldenCase {
            id: "feverish-bundle",
            selected: &["fever", "fatigue", "headache", "body_aches"],
            text: "",
            expected_processed: &["body_aches", "fatigue", "fever", "headache"],
            expected_ranking: &[
                ("Malaria", 36.4, Urgency::High),
                ("Influenza (Flu)", 27.3, Urgency::Medium),
                ("Anemia", 13.6, Urgency::Medium),
            ],
            expected_message_prefix: "Your symptoms match several possible conditions.",
        },
        GoldenCase {
            id: "unknown-code",
            selected: &["glowing_toenails"],
            text: "",
            expected_processed: &["glowing_toenails"],
            expected_ranking: &[],
            expected_message_prefix: NO_MATCH_MESSAGE,
        },
    ]
}

#[test]
fn test_golden_cases() {
    let engine = DiagnosticEngine::default();

    for case in get_golden_cases() {
        let result = engine.diagnose(case.selected, case.text);

        let processed: Vec<&str> = result
            .processed_symptoms
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(
            processed, case.expected_processed,
            "Case {}: processed symptoms mismatch", case.id
        );
        assert_eq!(
            result.total_symptoms as usize,
            case.expected_processed.len(),
            "Case {}: total mismatch", case.id
        );

        let ranking: Vec<(&str, f64, Urgency)> = result
            .diagnoses
            .iter()
            .map(|d| (d.condition.as_str(), d.confidence, d.urgency))
            .collect();
        assert_eq!(
            ranking, case.expected_ranking,
            "Case {}: ranking mismatch", case.id
        );

        assert!(
            result.message.starts_with(case.expected_message_prefix),
            "Case {}: unexpected message {:?}",
            case.id, result.message
        );
    }
}

#[test]
fn test_no_input() {
    let engine = DiagnosticEngine::default();
    let none: &[&str] = &[];

    for text in ["", "   ", "nothing recognizable here"] {
        let result = engine.diagnose(none, text);
        assert!(result.diagnoses.is_empty(), "Text {:?} should not diagnose", text);
        assert_eq!(result.message, NO_SYMPTOMS_MESSAGE);
        assert_eq!(result.total_symptoms, 0);
        assert!(result.processed_symptoms.is_none());
    }
}

#[test]
fn test_every_bundle_diagnoses() {
    let engine = DiagnosticEngine::default();

    for bundle in engine.example_bundles() {
        let result = engine.diagnose(&bundle.symptoms, "");
        assert!(
            !result.diagnoses.is_empty(),
            "Bundle {} should match at least one condition",
            bundle.name
        );
        assert_eq!(result.total_symptoms as usize, bundle.symptoms.len());
    }
}

#[test]
fn test_json_field_names() {
    let engine = DiagnosticEngine::default();
    let result = engine.diagnose(&["fever", "high_fever"], "");
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert!(json["message"].is_string());
    assert_eq!(json["total_symptoms"], 2);
    assert_eq!(json["processed_symptoms"][0], "fever");

    let top = &json["diagnoses"][0];
    for field in [
        "condition",
        "description",
        "confidence",
        "primary_matches",
        "secondary_matches",
        "severity_matches",
        "recommendations",
        "urgency",
        "matched_symptoms",
    ] {
        assert!(!top[field].is_null(), "Missing field {}", field);
    }
    assert_eq!(top["urgency"], "urgent");

    // No symptoms: processed_symptoms is omitted entirely
    let none: &[&str] = &[];
    let empty = serde_json::to_value(engine.diagnose(none, "")).unwrap();
    assert!(empty.get("processed_symptoms").is_none());
}
