use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for community posts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

/// Identifier wrapper for replies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplyId(pub String);

/// Caller-supplied fields for a new post. Everything else (author, warning
/// flags, timestamps) is derived server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSubmission {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub trigger_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub has_warning: bool,
    pub warning_text: Option<String>,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

static POST_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static REPLY_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static AUTHOR_SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_post_id() -> PostId {
    let id = POST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PostId(format!("post-{id:06}"))
}

pub(crate) fn next_reply_id() -> ReplyId {
    let id = REPLY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReplyId(format!("reply-{id:06}"))
}

const ADJECTIVES: &[&str] = &[
    "Hopeful",
    "Brave",
    "Kind",
    "Strong",
    "Gentle",
    "Wise",
    "Calm",
    "Bright",
    "Caring",
    "Patient",
    "Peaceful",
    "Resilient",
    "Mindful",
    "Courageous",
    "Serene",
    "Graceful",
    "Steadfast",
    "Compassionate",
];

const NOUNS: &[&str] = &[
    "Phoenix",
    "Dove",
    "Eagle",
    "Butterfly",
    "Owl",
    "Swan",
    "Robin",
    "Hawk",
    "Sparrow",
    "Falcon",
    "Crane",
    "Raven",
    "Hummingbird",
    "Bluebird",
    "Lotus",
    "Willow",
    "River",
    "Mountain",
];

/// Anonymous display name like "HopefulPhoenix42". Derived fresh per call
/// from a counter mixed with the clock; no stored identity.
pub fn anonymous_author() -> String {
    let seed = author_seed();
    let adjective = ADJECTIVES[(seed % ADJECTIVES.len() as u64) as usize];
    let noun = NOUNS[((seed / 31) % NOUNS.len() as u64) as usize];
    let number = seed % 100;
    format!("{adjective}{noun}{number}")
}

fn author_seed() -> u64 {
    let tick = AUTHOR_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = u64::from(Utc::now().timestamp_subsec_nanos());
    nanos.wrapping_mul(6364136223846793005).wrapping_add(tick)
}
