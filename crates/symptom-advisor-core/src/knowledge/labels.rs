//! Display labels for the symptom picker.

use crate::models::Symptom::{self, *};

/// Curated label for a symptom, if one exists.
pub fn curated_label(symptom: Symptom) -> Option<&'static str> {
    let label = match symptom {
        Fever => "Fever/High temperature",
        Chills => "Chills/Shivering",
        Headache => "Headache",
        Sweating => "Excessive sweating",
        Nausea => "Nausea/Feeling sick",
        Vomiting => "Vomiting",
        Fatigue => "Fatigue/Tiredness",
        BodyAches => "Body aches/Muscle pain",
        AbdominalPain => "Stomach/Belly pain",
        Diarrhea => "Diarrhea/Loose stool",
        Constipation => "Constipation",
        Cough => "Cough",
        SoreThroat => "Sore throat",
        RunnyNose => "Runny/Blocked nose",
        Sneezing => "Sneezing",
        ShortnessOfBreath => "Difficulty breathing",
        PaleSkin => "Pale skin",
        Dizziness => "Dizziness/Feeling faint",
        Weakness => "Weakness",
        HighFever => "Very high fever",
        SevereHeadache => "Severe headache",
        Confusion => "Confusion",
        ProlongedFever => "Fever for several days",
        RoseSpots => "Rose-colored spots on skin",
        EnlargedSpleen => "Swollen abdomen",
        BloodyStool => "Blood in stool",
        DifficultyBreathing => "Severe breathing problems",
        ChestPain => "Chest pain",
        PersistentVomiting => "Cannot stop vomiting",
        MildCough => "Mild cough",
        LowFever => "Low-grade fever",
        Congestion => "Nasal congestion",
        MildHeadache => "Mild headache",
        ColdHands => "Cold hands and feet",
        BrittleNails => "Brittle fingernails",
        FastHeartbeat => "Fast heartbeat",
        SevereFatigue => "Extreme tiredness",
        IrregularHeartbeat => "Irregular heartbeat",
        SevereAbdominalPain => return None,
    };
    Some(label)
}

/// Display label for any code: the curated label, or a title-cased fallback
/// built from the code (`"severe_abdominal_pain"` → `"Severe Abdominal Pain"`).
pub fn display_label(code: &str) -> String {
    Symptom::from_code(code)
        .and_then(curated_label)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(&code.replace('_', " ")))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
