//! Free-text phrase table for symptom normalization.
//!
//! Phrases are lowercase and matched as substrings of the lowercased input.

use crate::models::Symptom::{self, *};

/// Phrases that normalize to one canonical symptom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynonymEntry {
    pub symptom: Symptom,
    pub phrases: &'static [&'static str],
}

pub static SYMPTOM_SYNONYMS: [SynonymEntry; 19] = [
    SynonymEntry {
        symptom: Fever,
        phrases: &["fever", "high temperature", "hot body"],
    },
    SynonymEntry {
        symptom: Chills,
        phrases: &["chills", "shivering", "feeling cold"],
    },
    SynonymEntry {
        symptom: Headache,
        phrases: &["headache", "head pain", "severe headache"],
    },
    SynonymEntry {
        symptom: Sweating,
        phrases: &["sweating", "night sweats", "excessive sweating"],
    },
    SynonymEntry {
        symptom: Nausea,
        phrases: &["nausea", "feeling sick", "want to vomit"],
    },
    SynonymEntry {
        symptom: Vomiting,
        phrases: &["vomiting", "throwing up", "being sick"],
    },
    SynonymEntry {
        symptom: Fatigue,
        phrases: &["fatigue", "tiredness", "feeling weak"],
    },
    SynonymEntry {
        symptom: BodyAches,
        phrases: &["body aches", "muscle pain", "joint pain"],
    },
    SynonymEntry {
        symptom: AbdominalPain,
        phrases: &["stomach pain", "belly pain", "abdominal pain"],
    },
    SynonymEntry {
        symptom: Diarrhea,
        phrases: &["diarrhea", "loose stool", "watery stool"],
    },
    SynonymEntry {
        symptom: Constipation,
        phrases: &["constipation", "hard stool", "difficulty passing stool"],
    },
    SynonymEntry {
        symptom: Cough,
        phrases: &["cough", "coughing", "dry cough"],
    },
    SynonymEntry {
        symptom: SoreThroat,
        phrases: &["sore throat", "throat pain", "painful swallowing"],
    },
    SynonymEntry {
        symptom: RunnyNose,
        phrases: &["runny nose", "nasal discharge", "blocked nose"],
    },
    SynonymEntry {
        symptom: Sneezing,
        phrases: &["sneezing", "frequent sneezing"],
    },
    SynonymEntry {
        symptom: ShortnessOfBreath,
        phrases: &["shortness of breath", "difficulty breathing", "breathless"],
    },
    SynonymEntry {
        symptom: PaleSkin,
        phrases: &["pale skin", "looking pale", "loss of color"],
    },
    SynonymEntry {
        symptom: Dizziness,
        phrases: &["dizziness", "feeling faint", "lightheaded"],
    },
    SynonymEntry {
        symptom: Weakness,
        phrases: &["weakness", "feeling weak", "lack of strength"],
    },
];
