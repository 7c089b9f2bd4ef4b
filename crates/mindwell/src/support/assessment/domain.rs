use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from question id to the selected option value.
pub type AnswerSet = BTreeMap<u32, u32>;

/// A named, ordered set of scorable questions plus an interpretation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub scoring: ScoringGuide,
    pub interpretations: Vec<InterpretationBand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// A selectable answer. Values are not necessarily contiguous; reverse-scored
/// questions carry descending values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringGuide {
    pub max_score: u32,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An inclusive score sub-range mapped to a severity label and guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationBand {
    pub min: u32,
    pub max: u32,
    pub severity: String,
    pub description: String,
    pub recommendation: String,
}

impl InterpretationBand {
    pub fn contains(&self, score: u32) -> bool {
        self.min <= score && score <= self.max
    }
}

impl Question {
    /// Highest option value, used for max-score consistency checks.
    pub fn max_value(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }

    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

impl Questionnaire {
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Whether the band is this questionnaire's worst tier. Escalating bands
    /// cause crisis resources to be surfaced with the recommendation.
    pub fn is_escalating(&self, band: &InterpretationBand) -> bool {
        band.max == self.scoring.max_score
    }
}
