//! Built-in condition definitions.
//!
//! Declaration order is significant: it breaks confidence ties when ranking.

use crate::models::{BaseUrgency, ConditionDefinition, ConditionId, Symptom::*};

pub static CONDITIONS: [ConditionDefinition; 5] = [
    ConditionDefinition {
        id: ConditionId::Malaria,
        name: "Malaria",
        description: "A mosquito-borne infectious disease common in Ghana",
        primary_symptoms: &[Fever, Chills, Headache, Sweating],
        secondary_symptoms: &[Nausea, Vomiting, Fatigue, BodyAches],
        severity_indicators: &[HighFever, SevereHeadache, Confusion],
        recommendations: &[
            "Seek immediate medical attention for proper testing",
            "Get a malaria rapid diagnostic test (RDT) or blood test",
            "Take prescribed antimalarial medication if confirmed",
            "Use mosquito nets and repellents for prevention",
            "Stay hydrated and get plenty of rest",
        ],
        base_urgency: BaseUrgency::High,
    },
    ConditionDefinition {
        id: ConditionId::Typhoid,
        name: "Typhoid Fever",
        description: "A bacterial infection spread through contaminated food and water",
        primary_symptoms: &[ProlongedFever, AbdominalPain, Diarrhea, Constipation],
        secondary_symptoms: &[Headache, Weakness, RoseSpots, EnlargedSpleen],
        severity_indicators: &[HighFever, SevereAbdominalPain, BloodyStool],
        recommendations: &[
            "Visit a healthcare facility for blood tests",
            "Complete full course of antibiotics if prescribed",
            "Drink clean, boiled water only",
            "Eat well-cooked, hot foods",
            "Practice good hand hygiene",
        ],
        base_urgency: BaseUrgency::High,
    },
    ConditionDefinition {
        id: ConditionId::Flu,
        name: "Influenza (Flu)",
        description: "A viral respiratory infection",
        primary_symptoms: &[Fever, Cough, SoreThroat, RunnyNose],
        secondary_symptoms: &[BodyAches, Fatigue, Headache, Chills],
        severity_indicators: &[DifficultyBreathing, ChestPain, PersistentVomiting],
        recommendations: &[
            "Get plenty of rest and sleep",
            "Drink lots of fluids",
            "Take paracetamol for fever and aches",
            "Stay home to avoid spreading to others",
            "See a doctor if symptoms worsen or persist",
        ],
        base_urgency: BaseUrgency::Medium,
    },
    ConditionDefinition {
        id: ConditionId::CommonCold,
        name: "Common Cold",
        description: "A mild viral infection of the nose and throat",
        primary_symptoms: &[RunnyNose, Sneezing, MildCough, SoreThroat],
        secondary_symptoms: &[MildHeadache, LowFever, Congestion],
        severity_indicators: &[HighFever, SevereHeadache, DifficultyBreathing],
        recommendations: &[
            "Rest and drink plenty of fluids",
            "Use warm salt water to gargle for sore throat",
            "Take paracetamol for mild aches",
            "Use steam inhalation for congestion",
            "Symptoms usually resolve in 7-10 days",
        ],
        base_urgency: BaseUrgency::Low,
    },
    ConditionDefinition {
        id: ConditionId::Anemia,
        name: "Anemia",
        description: "A condition where you lack healthy red blood cells",
        primary_symptoms: &[Fatigue, Weakness, PaleSkin, ShortnessOfBreath],
        secondary_symptoms: &[Dizziness, ColdHands, BrittleNails, FastHeartbeat],
        severity_indicators: &[SevereFatigue, ChestPain, IrregularHeartbeat],
        recommendations: &[
            "See a doctor for blood tests to confirm",
            "Eat iron-rich foods like beans, leafy greens, and meat",
            "Take iron supplements if prescribed",
            "Treat underlying causes like heavy periods",
            "Follow up regularly with healthcare provider",
        ],
        base_urgency: BaseUrgency::Medium,
    },
];
