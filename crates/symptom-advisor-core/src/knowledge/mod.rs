//! Static knowledge base: conditions, synonyms, labels, example bundles.
//!
//! Everything here is `'static` data with no interior mutability; the
//! knowledge base is established at compile time and shared read-only.

mod bundles;
mod conditions;
mod labels;
mod synonyms;

pub use bundles::*;
pub use conditions::*;
pub use labels::*;
pub use synonyms::*;

use std::collections::BTreeSet;

use crate::models::{ConditionDefinition, ConditionId};

/// An immutable view over condition, synonym and bundle tables.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    conditions: &'static [ConditionDefinition],
    synonyms: &'static [SynonymEntry],
    bundles: &'static [BundleDefinition],
}

static BUILTIN: KnowledgeBase =
    KnowledgeBase::new(&CONDITIONS, &SYMPTOM_SYNONYMS, &EXAMPLE_BUNDLES);

impl KnowledgeBase {
    /// Assemble a knowledge base from static tables.
    pub const fn new(
        conditions: &'static [ConditionDefinition],
        synonyms: &'static [SynonymEntry],
        bundles: &'static [BundleDefinition],
    ) -> Self {
        Self {
            conditions,
            synonyms,
            bundles,
        }
    }

    /// The built-in knowledge base.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Conditions in declaration order.
    pub fn conditions(&self) -> &'static [ConditionDefinition] {
        self.conditions
    }

    pub fn synonyms(&self) -> &'static [SynonymEntry] {
        self.synonyms
    }

    pub fn bundles(&self) -> &'static [BundleDefinition] {
        self.bundles
    }

    /// Look up a condition by ID.
    pub fn condition(&self, id: ConditionId) -> Option<&'static ConditionDefinition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Every symptom code referenced by any condition, sorted by code.
    pub fn symptom_codes(&self) -> BTreeSet<&'static str> {
        self.conditions
            .iter()
            .flat_map(|c| c.all_symptoms())
            .map(|s| s.code())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symptom;

    #[test]
    fn test_builtin_declaration_order() {
        let ids: Vec<ConditionId> = KnowledgeBase::builtin()
            .conditions()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                ConditionId::Malaria,
                ConditionId::Typhoid,
                ConditionId::Flu,
                ConditionId::CommonCold,
                ConditionId::Anemia,
            ]
        );
    }

    #[test]
    fn test_condition_lookup() {
        let kb = KnowledgeBase::builtin();
        let cold = kb.condition(ConditionId::CommonCold).unwrap();
        assert_eq!(cold.name, "Common Cold");
        assert_eq!(cold.primary_symptoms.len(), 4);
        assert_eq!(cold.secondary_symptoms.len(), 3);
    }

    #[test]
    fn test_vocabulary_fully_used() {
        // Every vocabulary entry is referenced by at least one condition
        let codes = KnowledgeBase::builtin().symptom_codes();
        assert_eq!(codes.len(), Symptom::ALL.len());
        for symptom in Symptom::ALL {
            assert!(codes.contains(symptom.code()), "{} unused", symptom.code());
        }
    }

    #[test]
    fn test_synonym_phrases_are_lowercase() {
        for entry in KnowledgeBase::builtin().synonyms() {
            for phrase in entry.phrases {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_bundle_symptoms_are_known() {
        let codes = KnowledgeBase::builtin().symptom_codes();
        for bundle in KnowledgeBase::builtin().bundles() {
            for symptom in bundle.symptoms {
                assert!(codes.contains(symptom.code()));
            }
        }
    }
}
