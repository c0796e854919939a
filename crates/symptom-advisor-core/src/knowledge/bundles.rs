//! Hand-authored symptom bundles for pre-filling the form.

use crate::models::Symptom::{self, *};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleDefinition {
    pub name: &'static str,
    pub symptoms: &'static [Symptom],
    pub description: &'static str,
}

pub static EXAMPLE_BUNDLES: [BundleDefinition; 4] = [
    BundleDefinition {
        name: "Feeling feverish and weak",
        symptoms: &[Fever, Fatigue, Headache, BodyAches],
        description: "High temperature with general weakness",
    },
    BundleDefinition {
        name: "Stomach problems",
        symptoms: &[AbdominalPain, Nausea, Diarrhea, Fever],
        description: "Stomach pain with digestive issues",
    },
    BundleDefinition {
        name: "Cold-like symptoms",
        symptoms: &[RunnyNose, Sneezing, SoreThroat, MildCough],
        description: "Common cold symptoms",
    },
    BundleDefinition {
        name: "Feeling very tired",
        symptoms: &[Fatigue, Weakness, PaleSkin, ShortnessOfBreath],
        description: "Persistent tiredness and weakness",
    },
];
