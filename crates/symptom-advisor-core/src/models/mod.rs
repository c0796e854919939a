//! Domain models for the symptom advisor.

mod catalog;
mod diagnosis;
mod knowledge;
mod submission;

pub use catalog::*;
pub use diagnosis::*;
pub use knowledge::*;
pub use submission::*;
