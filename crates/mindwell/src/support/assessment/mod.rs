//! Self-assessment questionnaires: definitions, scoring, and interpretation.
//!
//! Questionnaire content is authored in [`catalog`] and treated as immutable.
//! Scoring is a pure function of a questionnaire plus a complete answer set;
//! nothing here persists results.

pub mod catalog;
pub mod domain;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{AssessmentCatalog, CatalogError, QuestionnaireSummary};
pub use domain::{
    AnswerOption, AnswerSet, InterpretationBand, Question, Questionnaire, ScoringGuide,
};
pub use router::assessment_router;
pub use scoring::{compute_score, interpret, ScoreOutcome, ScoringError};
