//! Knowledge base record types: symptoms, conditions, urgency.

use serde::{Deserialize, Serialize};

/// Canonical symptom vocabulary.
///
/// Every code referenced by a condition definition is a variant here, so a
/// misspelled reference in the knowledge base fails to compile. User input
/// stays stringly typed and may contain codes outside this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Chills,
    Headache,
    Sweating,
    Nausea,
    Vomiting,
    Fatigue,
    BodyAches,
    AbdominalPain,
    Diarrhea,
    Constipation,
    Cough,
    SoreThroat,
    RunnyNose,
    Sneezing,
    ShortnessOfBreath,
    PaleSkin,
    Dizziness,
    Weakness,
    HighFever,
    SevereHeadache,
    Confusion,
    ProlongedFever,
    RoseSpots,
    EnlargedSpleen,
    SevereAbdominalPain,
    BloodyStool,
    DifficultyBreathing,
    ChestPain,
    PersistentVomiting,
    MildCough,
    LowFever,
    Congestion,
    MildHeadache,
    ColdHands,
    BrittleNails,
    FastHeartbeat,
    SevereFatigue,
    IrregularHeartbeat,
}

impl Symptom {
    /// Every symptom in the vocabulary.
    pub const ALL: [Symptom; 39] = [
        Symptom::Fever,
        Symptom::Chills,
        Symptom::Headache,
        Symptom::Sweating,
        Symptom::Nausea,
        Symptom::Vomiting,
        Symptom::Fatigue,
        Symptom::BodyAches,
        Symptom::AbdominalPain,
        Symptom::Diarrhea,
        Symptom::Constipation,
        Symptom::Cough,
        Symptom::SoreThroat,
        Symptom::RunnyNose,
        Symptom::Sneezing,
        Symptom::ShortnessOfBreath,
        Symptom::PaleSkin,
        Symptom::Dizziness,
        Symptom::Weakness,
        Symptom::HighFever,
        Symptom::SevereHeadache,
        Symptom::Confusion,
        Symptom::ProlongedFever,
        Symptom::RoseSpots,
        Symptom::EnlargedSpleen,
        Symptom::SevereAbdominalPain,
        Symptom::BloodyStool,
        Symptom::DifficultyBreathing,
        Symptom::ChestPain,
        Symptom::PersistentVomiting,
        Symptom::MildCough,
        Symptom::LowFever,
        Symptom::Congestion,
        Symptom::MildHeadache,
        Symptom::ColdHands,
        Symptom::BrittleNails,
        Symptom::FastHeartbeat,
        Symptom::SevereFatigue,
        Symptom::IrregularHeartbeat,
    ];

    /// The wire code for this symptom (e.g. `"body_aches"`).
    pub const fn code(self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Chills => "chills",
            Symptom::Headache => "headache",
            Symptom::Sweating => "sweating",
            Symptom::Nausea => "nausea",
            Symptom::Vomiting => "vomiting",
            Symptom::Fatigue => "fatigue",
            Symptom::BodyAches => "body_aches",
            Symptom::AbdominalPain => "abdominal_pain",
            Symptom::Diarrhea => "diarrhea",
            Symptom::Constipation => "constipation",
            Symptom::Cough => "cough",
            Symptom::SoreThroat => "sore_throat",
            Symptom::RunnyNose => "runny_nose",
            Symptom::Sneezing => "sneezing",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
            Symptom::PaleSkin => "pale_skin",
            Symptom::Dizziness => "dizziness",
            Symptom::Weakness => "weakness",
            Symptom::HighFever => "high_fever",
            Symptom::SevereHeadache => "severe_headache",
            Symptom::Confusion => "confusion",
            Symptom::ProlongedFever => "prolonged_fever",
            Symptom::RoseSpots => "rose_spots",
            Symptom::EnlargedSpleen => "enlarged_spleen",
            Symptom::SevereAbdominalPain => "severe_abdominal_pain",
            Symptom::BloodyStool => "bloody_stool",
            Symptom::DifficultyBreathing => "difficulty_breathing",
            Symptom::ChestPain => "chest_pain",
            Symptom::PersistentVomiting => "persistent_vomiting",
            Symptom::MildCough => "mild_cough",
            Symptom::LowFever => "low_fever",
            Symptom::Congestion => "congestion",
            Symptom::MildHeadache => "mild_headache",
            Symptom::ColdHands => "cold_hands",
            Symptom::BrittleNails => "brittle_nails",
            Symptom::FastHeartbeat => "fast_heartbeat",
            Symptom::SevereFatigue => "severe_fatigue",
            Symptom::IrregularHeartbeat => "irregular_heartbeat",
        }
    }

    /// Look up a symptom by its wire code. Exact, case-sensitive match.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

/// Stable identifier for a condition in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionId {
    Malaria,
    Typhoid,
    Flu,
    CommonCold,
    Anemia,
}

/// Inherent urgency of a condition, before any symptom evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUrgency {
    Low,
    Medium,
    High,
}

/// Urgency attached to a scored condition.
///
/// `Urgent` is only ever produced by evidence (a severity indicator match),
/// never by a condition definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl Urgency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }
}

impl From<BaseUrgency> for Urgency {
    fn from(base: BaseUrgency) -> Self {
        match base {
            BaseUrgency::Low => Urgency::Low,
            BaseUrgency::Medium => Urgency::Medium,
            BaseUrgency::High => Urgency::High,
        }
    }
}

/// An immutable condition definition.
///
/// All fields borrow `'static` data so definitions can live in `static`
/// tables and never be mutated after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionDefinition {
    /// Stable identifier
    pub id: ConditionId,
    /// Display name (e.g., "Typhoid Fever")
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Hallmark symptoms - weight 3
    pub primary_symptoms: &'static [Symptom],
    /// Supporting symptoms - weight 1
    pub secondary_symptoms: &'static [Symptom],
    /// Red-flag symptoms - weight 2, force `Urgency::Urgent`
    pub severity_indicators: &'static [Symptom],
    /// Ordered advice shown to the user
    pub recommendations: &'static [&'static str],
    /// Urgency when primary symptoms match without red flags
    pub base_urgency: BaseUrgency,
}

impl ConditionDefinition {
    /// Iterate every symptom this condition references, across all three sets.
    pub fn all_symptoms(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.primary_symptoms
            .iter()
            .chain(self.secondary_symptoms)
            .chain(self.severity_indicators)
            .copied()
    }

    /// Check whether a user-supplied code appears in any of the symptom sets.
    pub fn references(&self, code: &str) -> bool {
        self.all_symptoms().any(|s| s.code() == code)
    }
}
