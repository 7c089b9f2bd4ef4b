use super::domain::{CommunityPost, PostId};

/// Storage abstraction so the forum service can be exercised in isolation.
pub trait PostRepository: Send + Sync {
    fn insert(&self, post: CommunityPost) -> Result<CommunityPost, RepositoryError>;
    /// Apply `mutate` to the stored post under the repository's own
    /// synchronization and return the updated record. Interleaved callers
    /// must each observe the other's mutation.
    fn update_with(
        &self,
        id: &PostId,
        mutate: &mut dyn FnMut(&mut CommunityPost),
    ) -> Result<CommunityPost, RepositoryError>;
    fn fetch(&self, id: &PostId) -> Result<Option<CommunityPost>, RepositoryError>;
    /// All posts matching the optional category filter, in no particular
    /// order; the service sorts and paginates.
    fn list(&self, category: Option<&str>) -> Result<Vec<CommunityPost>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("post already exists")]
    Conflict,
    #[error("post not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
