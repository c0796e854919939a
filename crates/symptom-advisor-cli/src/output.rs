//! Plain-text rendering for terminal output.

use std::fmt::Write;

use symptom_advisor_core::knowledge::display_label;
use symptom_advisor_core::{DiagnosisResult, ExampleBundle, Submission, SymptomOption};

pub const DISCLAIMER: &str =
    "This is not a medical diagnosis. Always consult a qualified healthcare professional.";

pub fn render_symptoms(options: &[SymptomOption]) -> String {
    let width = options.iter().map(|o| o.code.len()).max().unwrap_or(0);
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "{:width$}  {}", option.code, option.display, width = width);
    }
    out
}

pub fn render_bundles(bundles: &[ExampleBundle]) -> String {
    let mut out = String::new();
    for bundle in bundles {
        let _ = writeln!(out, "{}  ({})", bundle.name, bundle.slug());
        let _ = writeln!(out, "    {}", bundle.description);
        let _ = writeln!(out, "    {}", bundle.symptoms.join(", "));
    }
    out
}

pub fn render_bundle(bundle: &ExampleBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", bundle.name);
    let _ = writeln!(out, "{}", bundle.description);
    for code in &bundle.symptoms {
        let _ = writeln!(out, "  - {} ({})", display_label(code), code);
    }
    out
}

/// Ranked conditions with advice, followed by the disclaimer.
pub fn render_diagnosis(result: &DiagnosisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.message);
    if let Some(urgency) = result.highest_urgency() {
        let _ = writeln!(out, "Highest urgency: {}", urgency.as_str().to_uppercase());
    }

    for (rank, d) in result.diagnoses.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {}  {:.1}%  [{}]",
            rank + 1,
            d.condition,
            d.confidence,
            d.urgency.as_str().to_uppercase()
        );
        let _ = writeln!(out, "   {}", d.description);
        let labels: Vec<String> = d.matched_symptoms.iter().map(|c| display_label(c)).collect();
        let _ = writeln!(out, "   Matched: {}", labels.join(", "));
        let _ = writeln!(
            out,
            "   Primary {}, secondary {}, severity {}",
            d.primary_matches, d.secondary_matches, d.severity_matches
        );
        for rec in &d.recommendations {
            let _ = writeln!(out, "   - {}", rec);
        }
    }

    if let Some(processed) = &result.processed_symptoms {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Symptoms considered ({}): {}",
            result.total_symptoms,
            processed.join(", ")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", DISCLAIMER);
    out
}

/// One line per submission, newest first as given.
pub fn render_history(submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return "No submissions yet.\n".to_string();
    }

    let mut out = String::new();
    for s in submissions {
        let top = s
            .diagnosis
            .top()
            .map(|d| format!("{} ({:.1}%)", d.condition, d.confidence))
            .unwrap_or_else(|| "no match".to_string());
        let feedback = match &s.feedback {
            Some(f) if f.is_accurate => "accurate",
            Some(_) => "inaccurate",
            None => "-",
        };
        let _ = writeln!(out, "{}  {}  {}  feedback: {}", s.created_at, s.id, top, feedback);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_advisor_core::models::Submitter;
    use symptom_advisor_core::DiagnosticEngine;

    #[test]
    fn test_render_diagnosis() {
        let result = DiagnosticEngine::default()
            .diagnose(&["fever", "chills", "headache", "sweating"], "");
        let text = render_diagnosis(&result);

        assert!(text.starts_with("Your symptoms may indicate Malaria"));
        assert!(text.contains("Highest urgency: HIGH\n"));
        assert!(text.contains("1. Malaria  54.5%  [HIGH]"));
        assert!(text.contains(
            "   Matched: Chills/Shivering, Fever/High temperature, Headache, Excessive sweating"
        ));
        assert!(text.contains("Symptoms considered (4): chills, fever, headache, sweating"));
        assert!(text.trim_end().ends_with(DISCLAIMER));
    }

    #[test]
    fn test_render_no_symptoms() {
        let none: &[&str] = &[];
        let text = render_diagnosis(&DiagnosticEngine::default().diagnose(none, ""));
        assert!(!text.contains("Symptoms considered"));
        assert!(!text.contains("1."));
        assert!(!text.contains("Highest urgency"));
    }

    #[test]
    fn test_render_highest_urgency_beats_rank() {
        // Flu leads at medium; typhoid ranks last but is urgent
        let result =
            DiagnosticEngine::default().diagnose(&["cough", "sore_throat", "bloody_stool"], "");
        assert_eq!(result.diagnoses[0].condition, "Influenza (Flu)");
        assert_eq!(result.diagnoses[2].condition, "Typhoid Fever");
        assert!(render_diagnosis(&result).contains("Highest urgency: URGENT\n"));
    }

    #[test]
    fn test_render_symptoms_aligned() {
        let options = vec![
            SymptomOption {
                code: "fever".into(),
                display: "Fever".into(),
            },
            SymptomOption {
                code: "runny_nose".into(),
                display: "Runny Nose".into(),
            },
        ];
        assert_eq!(render_symptoms(&options), "fever       Fever\nrunny_nose  Runny Nose\n");
    }

    #[test]
    fn test_render_history() {
        assert_eq!(render_history(&[]), "No submissions yet.\n");

        let diagnosis = DiagnosticEngine::default().diagnose(&["cough"], "");
        let submission =
            Submission::new(Submitter::default(), vec!["cough".into()], None, diagnosis);
        let text = render_history(&[submission.clone()]);

        assert!(text.contains(&submission.id));
        assert!(text.contains("Influenza (Flu) (13.6%)"));
        assert!(text.trim_end().ends_with("feedback: -"));
    }
}
