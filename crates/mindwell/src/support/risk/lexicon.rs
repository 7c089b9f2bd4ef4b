//! Fixed phrase lists for risk triage. Matching is case-insensitive
//! substring containment; callers lowercase the input once.

/// Phrases that demand immediate crisis intervention.
pub(crate) const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "want to die",
    "self-harm",
    "self harm",
    "cut myself",
    "hurt myself",
    "harm myself",
    "overdose",
    "end it all",
    "better off dead",
    "no reason to live",
    "going to die",
    "plan to kill",
    "goodbye cruel world",
];

/// Phrases signalling serious distress short of an immediate crisis.
pub(crate) const DISTRESS_PHRASES: &[&str] = &[
    "depressed",
    "hopeless",
    "worthless",
    "can't go on",
    "give up",
    "no point",
    "unbearable",
    "can't take it",
    "too much pain",
];

/// Anxiety and stress vocabulary for the moderate tier.
pub(crate) const ANXIETY_WORDS: &[&str] = &[
    "anxious", "anxiety", "panic", "worried", "scared", "afraid", "stressed",
];

/// Vocabulary that selects the breathing/grounding variant of the moderate
/// response.
pub(crate) const CALMING_TOPICS: &[&str] = &[
    "breath", "ground", "calm", "relax", "panic", "anxiety", "worried",
];

pub(crate) fn matches_any(lowered: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lowered.contains(phrase))
}
