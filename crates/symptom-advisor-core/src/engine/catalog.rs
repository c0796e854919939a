//! Read-only catalog queries for the symptom form.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::knowledge::{display_label, BundleDefinition, KnowledgeBase};
use crate::models::{bundle_slug, ExampleBundle, SymptomOption};

/// Minimum similarity for a fuzzy search hit.
const MIN_SEARCH_SCORE: f64 = 0.5;

/// Every symptom referenced by the knowledge base, sorted by code.
pub fn list_all_symptoms(knowledge: &KnowledgeBase) -> Vec<SymptomOption> {
    knowledge
        .symptom_codes()
        .into_iter()
        .map(|code| SymptomOption {
            code: code.to_string(),
            display: display_label(code),
        })
        .collect()
}

/// The hand-authored example bundles, in declaration order.
pub fn list_example_bundles(knowledge: &KnowledgeBase) -> Vec<ExampleBundle> {
    knowledge.bundles().iter().map(to_bundle).collect()
}

/// Find a bundle by slug (case-insensitive).
pub fn find_example_bundle(knowledge: &KnowledgeBase, slug: &str) -> Option<ExampleBundle> {
    let wanted = slug.to_lowercase();
    knowledge
        .bundles()
        .iter()
        .find(|b| bundle_slug(b.name) == wanted)
        .map(to_bundle)
}

/// Rank catalog symptoms against a picker query.
///
/// Containment in the label or code scores 1.0; otherwise the best fuzzy
/// similarity against label and code is used. Hits below 0.5 are dropped.
pub fn search_symptoms(knowledge: &KnowledgeBase, query: &str, limit: usize) -> Vec<SymptomOption> {
    let query = query.trim().to_lowercase().replace('_', " ");
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, SymptomOption)> = list_all_symptoms(knowledge)
        .into_iter()
        .map(|option| (search_score(&query, &option), option))
        .filter(|(score, _)| *score >= MIN_SEARCH_SCORE)
        .collect();

    // Best first; ties stay in code order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().take(limit).map(|(_, option)| option).collect()
}

fn search_score(query: &str, option: &SymptomOption) -> f64 {
    let label = option.display.to_lowercase();
    let code = option.code.replace('_', " ");

    if label.contains(query) || code.contains(query) {
        return 1.0;
    }

    fuzzy_match(query, &label).max(fuzzy_match(query, &code))
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favours shared prefixes, Levenshtein overall similarity
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

fn to_bundle(def: &BundleDefinition) -> ExampleBundle {
    ExampleBundle {
        name: def.name.to_string(),
        symptoms: def.symptoms.iter().map(|s| s.code().to_string()).collect(),
        description: def.description.to_string(),
    }
}
