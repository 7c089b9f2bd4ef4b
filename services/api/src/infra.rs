use metrics_exporter_prometheus::PrometheusHandle;
use mindwell::support::assessment::AnswerSet;
use mindwell::support::community::{CommunityPost, PostId, PostRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local post store. Posts live for the lifetime of the service,
/// which matches the anonymous, account-free forum model.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPostRepository {
    posts: Arc<Mutex<HashMap<String, CommunityPost>>>,
}

impl PostRepository for InMemoryPostRepository {
    fn insert(&self, post: CommunityPost) -> Result<CommunityPost, RepositoryError> {
        let mut guard = self.posts.lock().expect("repository mutex poisoned");
        if guard.contains_key(&post.id.0) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(post.id.0.clone(), post.clone());
        Ok(post)
    }

    fn update_with(
        &self,
        id: &PostId,
        mutate: &mut dyn FnMut(&mut CommunityPost),
    ) -> Result<CommunityPost, RepositoryError> {
        let mut guard = self.posts.lock().expect("repository mutex poisoned");
        let post = guard.get_mut(&id.0).ok_or(RepositoryError::NotFound)?;
        mutate(post);
        Ok(post.clone())
    }

    fn fetch(&self, id: &PostId) -> Result<Option<CommunityPost>, RepositoryError> {
        let guard = self.posts.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id.0).cloned())
    }

    fn list(&self, category: Option<&str>) -> Result<Vec<CommunityPost>, RepositoryError> {
        let guard = self.posts.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|post| category.map_or(true, |wanted| post.category == wanted))
            .cloned()
            .collect())
    }
}

/// Parse a CLI answer list like "1=2,2=0,3=1" into an answer set.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerSet, String> {
    let mut answers = AnswerSet::new();
    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (question, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected QUESTION=VALUE, got '{pair}'"))?;
        let question: u32 = question
            .trim()
            .parse()
            .map_err(|err| format!("invalid question id '{question}' ({err})"))?;
        let value: u32 = value
            .trim()
            .parse()
            .map_err(|err| format!("invalid answer value '{value}' ({err})"))?;
        if answers.insert(question, value).is_some() {
            return Err(format!("question {question} answered more than once"));
        }
    }
    if answers.is_empty() {
        return Err("no answers supplied".to_string());
    }
    Ok(answers)
}
