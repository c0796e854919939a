//! Free-text symptom normalizer.
//!
//! Maps a description like "I have a runny nose and sneezing" to canonical
//! symptom codes by case-insensitive substring containment against the
//! synonym table. No tokenization: a phrase matches anywhere in the text,
//! including inside longer words.

use crate::knowledge::SynonymEntry;
use crate::models::SymptomSet;

/// Normalizer for free-text symptom descriptions.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    synonyms: &'static [SynonymEntry],
}

impl Normalizer {
    /// Create a normalizer over a synonym table.
    pub fn new(synonyms: &'static [SynonymEntry]) -> Self {
        Self { synonyms }
    }

    /// Normalize free text to a set of symptom codes.
    pub fn normalize(&self, text: &str) -> SymptomSet {
        if text.is_empty() {
            return SymptomSet::new();
        }

        let lower = text.to_lowercase();
        self.synonyms
            .iter()
            .filter(|entry| entry.phrases.iter().any(|phrase| lower.contains(phrase)))
            .map(|entry| entry.symptom.code().to_string())
            .collect()
    }
}
