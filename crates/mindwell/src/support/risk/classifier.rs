use serde::{Deserialize, Serialize};

use super::lexicon;

/// Discrete risk tiers, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Crisis,
    HighRisk,
    Moderate,
    Low,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Crisis => "crisis",
            RiskTier::HighRisk => "high-risk",
            RiskTier::Moderate => "moderate",
            RiskTier::Low => "low",
        }
    }
}

/// Classify a message into a risk tier. First match wins, checked in
/// priority order, so a message containing both a crisis phrase and an
/// anxiety word is always `Crisis`. Unmatched or empty input is `Low`.
pub fn classify(message: &str) -> RiskTier {
    let lowered = message.to_lowercase();

    if lexicon::matches_any(&lowered, lexicon::CRISIS_PHRASES) {
        return RiskTier::Crisis;
    }
    if lexicon::matches_any(&lowered, lexicon::DISTRESS_PHRASES) {
        return RiskTier::HighRisk;
    }
    if lexicon::matches_any(&lowered, lexicon::ANXIETY_WORDS) {
        return RiskTier::Moderate;
    }
    RiskTier::Low
}

/// Boolean crisis gate for community posts, applied to title plus content.
/// Shares the chat classifier's crisis phrase list.
pub fn detect_crisis_language(text: &str) -> bool {
    lexicon::matches_any(&text.to_lowercase(), lexicon::CRISIS_PHRASES)
}

/// Secondary signal for the moderate tier: the message touches breathing,
/// grounding, or related calming vocabulary.
pub(crate) fn mentions_calming_topic(message: &str) -> bool {
    lexicon::matches_any(&message.to_lowercase(), lexicon::CALMING_TOPICS)
}
