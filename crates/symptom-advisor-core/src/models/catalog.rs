//! Symptom picker and example bundle models.

use serde::{Deserialize, Serialize};

/// A selectable symptom with its display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomOption {
    /// Symptom code
    pub code: String,
    /// Human-readable label
    pub display: String,
}

/// A named group of symptoms used to pre-fill the symptom form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExampleBundle {
    /// Display name (e.g., "Stomach problems")
    pub name: String,
    /// Symptom codes in the bundle
    pub symptoms: Vec<String>,
    /// Short description
    pub description: String,
}

impl ExampleBundle {
    /// URL-safe slug: lowercase, spaces replaced with hyphens.
    pub fn slug(&self) -> String {
        bundle_slug(&self.name)
    }
}

/// Everything the symptom form needs to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub symptoms: Vec<SymptomOption>,
    pub example_bundles: Vec<ExampleBundle>,
}

/// Derive the slug for a bundle name.
pub fn bundle_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
