use serde::Serialize;

use super::domain::{AnswerSet, InterpretationBand, Questionnaire};

/// Why an answer set could not be scored or a score not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("assessment incomplete: {} question(s) unanswered", .missing.len())]
    IncompleteAssessment { missing: Vec<u32> },
    #[error("answer supplied for unknown question {question}")]
    UnknownQuestion { question: u32 },
    #[error("value {value} is not an option for question {question}")]
    InvalidOptionValue { question: u32, value: u32 },
    #[error("score {score} falls outside every interpretation band")]
    NoMatchingBand { score: u32 },
}

/// Sum the selected option values over a complete answer set.
///
/// Requires exactly one answer per question, each drawn from that question's
/// defined options. Partial answer sets are rejected, never partial-summed.
pub fn compute_score(
    questionnaire: &Questionnaire,
    answers: &AnswerSet,
) -> Result<u32, ScoringError> {
    let missing: Vec<u32> = questionnaire
        .questions
        .iter()
        .map(|question| question.id)
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAssessment { missing });
    }

    let mut total = 0u32;
    for (&id, &value) in answers {
        let question = questionnaire
            .question(id)
            .ok_or(ScoringError::UnknownQuestion { question: id })?;
        if !question.accepts(value) {
            return Err(ScoringError::InvalidOptionValue {
                question: id,
                value,
            });
        }
        total += value;
    }
    Ok(total)
}

/// Find the band containing `score` by linear scan in table order.
///
/// A validated band table partitions `[0, max_score]`, so exactly one band
/// matches any in-range score. No match means the content is defective and is
/// surfaced as an error rather than silently falling back to the first band.
pub fn interpret(
    questionnaire: &Questionnaire,
    score: u32,
) -> Result<&InterpretationBand, ScoringError> {
    questionnaire
        .interpretations
        .iter()
        .find(|band| band.contains(score))
        .ok_or(ScoringError::NoMatchingBand { score })
}

/// Result of scoring a complete answer set against a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub total: u32,
    pub band: InterpretationBand,
    /// True when the matched band is the questionnaire's worst tier.
    pub escalating: bool,
}

impl Questionnaire {
    pub fn score(&self, answers: &AnswerSet) -> Result<ScoreOutcome, ScoringError> {
        let total = compute_score(self, answers)?;
        let band = interpret(self, total)?;
        Ok(ScoreOutcome {
            total,
            escalating: self.is_escalating(band),
            band: band.clone(),
        })
    }
}
