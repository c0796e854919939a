//! Condition scoring using weighted symptom matches.
//!
//! Scoring weights:
//! - Primary symptom: 3
//! - Severity indicator: 2
//! - Secondary symptom: 1
//!
//! Confidence is the share of the condition's total weighted symptom
//! inventory covered by the user's symptoms, not a probability.

use crate::models::{
    BaseUrgency, ConditionDefinition, ScoredCondition, Symptom, SymptomSet, Urgency,
};

pub const PRIMARY_WEIGHT: u32 = 3;
pub const SECONDARY_WEIGHT: u32 = 1;
pub const SEVERITY_WEIGHT: u32 = 2;

/// Primary matches needed for a high-urgency condition to report `High`.
const HIGH_URGENCY_MIN_PRIMARY: u32 = 2;

/// Raw match counts for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    pub primary: u32,
    pub secondary: u32,
    pub severity: u32,
}

impl MatchCounts {
    /// Count how many of the condition's symptoms the user reported.
    pub fn count(user_symptoms: &SymptomSet, condition: &ConditionDefinition) -> Self {
        Self {
            primary: count_present(user_symptoms, condition.primary_symptoms),
            secondary: count_present(user_symptoms, condition.secondary_symptoms),
            severity: count_present(user_symptoms, condition.severity_indicators),
        }
    }

    /// Weighted raw score.
    pub fn weighted_score(&self) -> u32 {
        self.primary * PRIMARY_WEIGHT
            + self.secondary * SECONDARY_WEIGHT
            + self.severity * SEVERITY_WEIGHT
    }
}

/// Highest weighted score a condition can reach.
pub fn max_possible_score(condition: &ConditionDefinition) -> u32 {
    condition.primary_symptoms.len() as u32 * PRIMARY_WEIGHT
        + condition.secondary_symptoms.len() as u32 * SECONDARY_WEIGHT
        + condition.severity_indicators.len() as u32 * SEVERITY_WEIGHT
}

/// Score a single condition against the user's symptoms.
pub fn score_condition(
    user_symptoms: &SymptomSet,
    condition: &ConditionDefinition,
) -> ScoredCondition {
    let counts = MatchCounts::count(user_symptoms, condition);

    let matched_symptoms = user_symptoms
        .iter()
        .filter(|code| condition.references(code))
        .cloned()
        .collect();

    ScoredCondition {
        condition: condition.name.to_string(),
        description: condition.description.to_string(),
        confidence: confidence(counts.weighted_score(), max_possible_score(condition)),
        primary_matches: counts.primary,
        secondary_matches: counts.secondary,
        severity_matches: counts.severity,
        recommendations: condition.recommendations.iter().map(|r| r.to_string()).collect(),
        urgency: determine_urgency(&counts, condition.base_urgency),
        matched_symptoms,
    }
}

/// Percentage of `max_possible` reached, rounded to one decimal. Zero when
/// the condition defines no symptoms.
pub fn confidence(raw_score: u32, max_possible: u32) -> f64 {
    if max_possible == 0 {
        return 0.0;
    }
    let percent = raw_score as f64 / max_possible as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Urgency rules, first match wins:
/// 1. any severity indicator → `Urgent`
/// 2. high base urgency with at least two primary matches → `High`
/// 3. any primary match → the condition's base urgency
/// 4. otherwise → `Low`
pub fn determine_urgency(counts: &MatchCounts, base: BaseUrgency) -> Urgency {
    if counts.severity > 0 {
        Urgency::Urgent
    } else if base == BaseUrgency::High && counts.primary >= HIGH_URGENCY_MIN_PRIMARY {
        Urgency::High
    } else if counts.primary >= 1 {
        base.into()
    } else {
        Urgency::Low
    }
}

fn count_present(user_symptoms: &SymptomSet, symptoms: &[Symptom]) -> u32 {
    symptoms
        .iter()
        .filter(|s| user_symptoms.contains(s.code()))
        .count() as u32
}
