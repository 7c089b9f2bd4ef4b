use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{PostId, PostSubmission};
use super::repository::{PostRepository, RepositoryError};
use super::service::{CommunityService, CommunityServiceError};
use crate::support::resources::{CRISIS_PROMPT, HOTLINES};

/// Router builder exposing the anonymous forum endpoints.
pub fn community_router<R>(service: Arc<CommunityService<R>>) -> Router
where
    R: PostRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/community/posts",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/community/posts/:post_id", get(detail_handler::<R>))
        .route(
            "/api/v1/community/posts/:post_id/replies",
            post(reply_handler::<R>),
        )
        .route(
            "/api/v1/community/posts/:post_id/upvote",
            post(upvote_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) category: Option<String>,
    pub(crate) page: Option<usize>,
    pub(crate) per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyRequest {
    pub(crate) content: String,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CommunityService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: PostRepository + 'static,
{
    let filter = super::service::PostFilter {
        category: query.category,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(super::service::DEFAULT_PAGE_SIZE),
    };

    match service.list_posts(&filter) {
        Ok(page) => {
            let payload = json!({
                "posts": page.posts,
                "pagination": {
                    "page": page.page,
                    "per_page": page.per_page,
                    "total": page.total,
                    "total_pages": page.total_pages(),
                },
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<CommunityService<R>>>,
    axum::Json(submission): axum::Json<PostSubmission>,
) -> Response
where
    R: PostRepository + 'static,
{
    match service.create_post(submission) {
        Ok(created) if created.crisis_detected => {
            let payload = json!({
                "post": created.post,
                "crisis_detected": true,
                "crisis_resources": {
                    "message": CRISIS_PROMPT,
                    "resources": HOTLINES,
                },
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Ok(created) => {
            let payload = json!({ "post": created.post });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(CommunityServiceError::MissingFields) => {
            let payload = json!({ "error": CommunityServiceError::MissingFields.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<CommunityService<R>>>,
    Path(post_id): Path<String>,
) -> Response
where
    R: PostRepository + 'static,
{
    let id = PostId(post_id);
    match service.get_post(&id) {
        Ok(post) => (StatusCode::OK, axum::Json(json!({ "post": post }))).into_response(),
        Err(err) => not_found_or_internal(err),
    }
}

pub(crate) async fn reply_handler<R>(
    State(service): State<Arc<CommunityService<R>>>,
    Path(post_id): Path<String>,
    axum::Json(request): axum::Json<ReplyRequest>,
) -> Response
where
    R: PostRepository + 'static,
{
    let id = PostId(post_id);
    match service.add_reply(&id, &request.content) {
        Ok(reply) => (StatusCode::CREATED, axum::Json(json!({ "reply": reply }))).into_response(),
        Err(CommunityServiceError::MissingFields) => {
            let payload = json!({ "error": "content is required" });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err) => not_found_or_internal(err),
    }
}

pub(crate) async fn upvote_handler<R>(
    State(service): State<Arc<CommunityService<R>>>,
    Path(post_id): Path<String>,
) -> Response
where
    R: PostRepository + 'static,
{
    let id = PostId(post_id);
    match service.upvote(&id) {
        Ok(likes) => (StatusCode::OK, axum::Json(json!({ "likes": likes }))).into_response(),
        Err(err) => not_found_or_internal(err),
    }
}

fn not_found_or_internal(err: CommunityServiceError) -> Response {
    match err {
        CommunityServiceError::NotFound
        | CommunityServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "post not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => internal_error(other),
    }
}

fn internal_error(err: CommunityServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
