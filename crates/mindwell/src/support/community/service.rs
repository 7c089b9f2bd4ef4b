use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::domain::{
    anonymous_author, next_post_id, next_reply_id, CommunityPost, PostId, PostSubmission, Reply,
};
use super::repository::{PostRepository, RepositoryError};
use crate::support::risk::detect_crisis_language;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 50;

const DEFAULT_CATEGORY: &str = "General";
const CRISIS_WARNING: &str = "Crisis/Self-Harm Discussion";

/// Listing parameters; page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    pub category: Option<String>,
    pub page: usize,
    pub per_page: usize,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            category: None,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of posts, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub posts: Vec<CommunityPost>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl PostPage {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }
}

/// A stored post plus the crisis-gate verdict for the response payload.
#[derive(Debug, Clone)]
pub struct PostCreated {
    pub post: CommunityPost,
    pub crisis_detected: bool,
}

/// Forum service composing the repository with the crisis-language gate.
pub struct CommunityService<R> {
    repository: Arc<R>,
}

impl<R> CommunityService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create an anonymous post. Crisis language in the title or content
    /// attaches a warning and is reported back so the caller can surface
    /// hotline resources.
    pub fn create_post(
        &self,
        submission: PostSubmission,
    ) -> Result<PostCreated, CommunityServiceError> {
        let title = submission.title.trim().to_string();
        let content = submission.content.trim().to_string();
        if title.is_empty() || content.is_empty() {
            return Err(CommunityServiceError::MissingFields);
        }

        let crisis_detected = detect_crisis_language(&format!("{title} {content}"));
        let warning_text = submission
            .trigger_warning
            .filter(|warning| !warning.trim().is_empty())
            .or_else(|| crisis_detected.then(|| CRISIS_WARNING.to_string()));

        let post = CommunityPost {
            id: next_post_id(),
            title,
            content,
            category: submission
                .category
                .filter(|category| !category.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            author: anonymous_author(),
            has_warning: warning_text.is_some(),
            warning_text,
            likes: 0,
            created_at: Utc::now(),
            replies: Vec::new(),
        };

        let stored = self.repository.insert(post)?;
        Ok(PostCreated {
            post: stored,
            crisis_detected,
        })
    }

    pub fn list_posts(&self, filter: &PostFilter) -> Result<PostPage, CommunityServiceError> {
        let per_page = filter.per_page.clamp(1, MAX_PAGE_SIZE);
        let page = filter.page.max(1);

        let mut posts = self.repository.list(filter.category.as_deref())?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = posts.len();
        // Page numbers come straight from the query string; saturate instead
        // of trusting the multiply.
        let posts = posts
            .into_iter()
            .skip(page.saturating_sub(1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Ok(PostPage {
            posts,
            page,
            per_page,
            total,
        })
    }

    pub fn get_post(&self, id: &PostId) -> Result<CommunityPost, CommunityServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(CommunityServiceError::NotFound)
    }

    pub fn add_reply(&self, id: &PostId, content: &str) -> Result<Reply, CommunityServiceError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CommunityServiceError::MissingFields);
        }

        let reply = Reply {
            id: next_reply_id(),
            author: anonymous_author(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let stored = reply.clone();
        self.repository
            .update_with(id, &mut |post| post.replies.push(reply.clone()))
            .map_err(missing_post)?;
        Ok(stored)
    }

    /// Increment the like counter, returning the new count.
    pub fn upvote(&self, id: &PostId) -> Result<u32, CommunityServiceError> {
        let post = self
            .repository
            .update_with(id, &mut |post| post.likes += 1)
            .map_err(missing_post)?;
        Ok(post.likes)
    }
}

fn missing_post(err: RepositoryError) -> CommunityServiceError {
    match err {
        RepositoryError::NotFound => CommunityServiceError::NotFound,
        other => CommunityServiceError::Repository(other),
    }
}

/// Error raised by the forum service.
#[derive(Debug, thiserror::Error)]
pub enum CommunityServiceError {
    #[error("title and content are required")]
    MissingFields,
    #[error("post not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
