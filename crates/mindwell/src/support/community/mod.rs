//! Anonymous community forum: posts, replies, and the crisis-language gate.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{anonymous_author, CommunityPost, PostId, PostSubmission, Reply, ReplyId};
pub use repository::{PostRepository, RepositoryError};
pub use router::community_router;
pub use service::{
    CommunityService, CommunityServiceError, PostCreated, PostFilter, PostPage, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
