//! Crisis hotline directory surfaced alongside high-risk output.

use serde::Serialize;

/// A single hotline or emergency contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub available: &'static str,
}

/// Contacts attached to crisis-flagged posts, chat replies, and escalating
/// assessment results. Ordered by immediacy.
pub const HOTLINES: &[CrisisResource] = &[
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "Call or text 988",
        available: "24/7",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HELLO to 741741",
        available: "24/7",
    },
    CrisisResource {
        name: "SAMHSA National Helpline",
        contact: "1-800-662-4357",
        available: "24/7",
    },
    CrisisResource {
        name: "Veterans Crisis Line",
        contact: "Call 988, then press 1",
        available: "24/7",
    },
    CrisisResource {
        name: "Emergency",
        contact: "Call 911",
        available: "Immediate",
    },
];

/// Lead-in shown with the hotline list when crisis language is detected.
pub const CRISIS_PROMPT: &str =
    "We detected language that suggests you may be in crisis. Please reach out for help:";
