//! Keyword-based risk triage for free-text input.
//!
//! One shared lexicon feeds both the chat classifier and the community
//! crisis gate so the phrase lists cannot drift apart.

pub mod classifier;
mod lexicon;
pub mod response;
pub mod router;

pub use classifier::{classify, detect_crisis_language, RiskTier};
pub use response::{respond_for, DISCLAIMER};
pub use router::chat_router;
