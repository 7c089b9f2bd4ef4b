use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::support::community::{
    CommunityPost, CommunityService, PostId, PostRepository, PostSubmission, RepositoryError,
};

/// Mutex-backed repository used to exercise the service without a store.
#[derive(Default)]
pub(super) struct MemoryRepository {
    posts: Mutex<BTreeMap<String, CommunityPost>>,
}

impl PostRepository for MemoryRepository {
    fn insert(&self, post: CommunityPost) -> Result<CommunityPost, RepositoryError> {
        let mut posts = self.posts.lock().expect("repository lock");
        if posts.contains_key(&post.id.0) {
            return Err(RepositoryError::Conflict);
        }
        posts.insert(post.id.0.clone(), post.clone());
        Ok(post)
    }

    fn update_with(
        &self,
        id: &PostId,
        mutate: &mut dyn FnMut(&mut CommunityPost),
    ) -> Result<CommunityPost, RepositoryError> {
        let mut posts = self.posts.lock().expect("repository lock");
        let post = posts.get_mut(&id.0).ok_or(RepositoryError::NotFound)?;
        mutate(post);
        Ok(post.clone())
    }

    fn fetch(&self, id: &PostId) -> Result<Option<CommunityPost>, RepositoryError> {
        let posts = self.posts.lock().expect("repository lock");
        Ok(posts.get(&id.0).cloned())
    }

    fn list(&self, category: Option<&str>) -> Result<Vec<CommunityPost>, RepositoryError> {
        let posts = self.posts.lock().expect("repository lock");
        Ok(posts
            .values()
            .filter(|post| category.map_or(true, |wanted| post.category == wanted))
            .cloned()
            .collect())
    }
}

/// Repository double that fails every call, for error-path coverage.
pub(super) struct UnavailableRepository;

impl PostRepository for UnavailableRepository {
    fn insert(&self, _post: CommunityPost) -> Result<CommunityPost, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".into()))
    }

    fn update_with(
        &self,
        _id: &PostId,
        _mutate: &mut dyn FnMut(&mut CommunityPost),
    ) -> Result<CommunityPost, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".into()))
    }

    fn fetch(&self, _id: &PostId) -> Result<Option<CommunityPost>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".into()))
    }

    fn list(&self, _category: Option<&str>) -> Result<Vec<CommunityPost>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".into()))
    }
}

pub(super) fn service() -> Arc<CommunityService<MemoryRepository>> {
    Arc::new(CommunityService::new(Arc::new(MemoryRepository::default())))
}

pub(super) fn submission(title: &str, content: &str) -> PostSubmission {
    PostSubmission {
        title: title.to_string(),
        content: content.to_string(),
        category: None,
        trigger_warning: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
