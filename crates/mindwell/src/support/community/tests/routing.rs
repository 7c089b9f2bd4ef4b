use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::support::community::community_router;

fn post_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn creating_a_post_returns_created_with_the_stored_record() {
    let router = community_router(service());

    let response = router
        .oneshot(post_request(
            "/api/v1/community/posts",
            json!({ "title": "First night of good sleep", "content": "Sharing what worked." }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert!(body["post"]["id"].as_str().expect("id").starts_with("post-"));
    assert_eq!(body["post"]["category"], "General");
    assert!(body.get("crisis_resources").is_none());
}

#[tokio::test]
async fn crisis_posts_return_hotline_resources_alongside_the_record() {
    let router = community_router(service());

    let response = router
        .oneshot(post_request(
            "/api/v1/community/posts",
            json!({ "title": "I can't do this", "content": "I keep thinking I'd be better off dead." }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["crisis_detected"], true);
    assert_eq!(body["post"]["has_warning"], true);
    let resources = body["crisis_resources"]["resources"]
        .as_array()
        .expect("hotlines");
    assert!(resources
        .iter()
        .any(|resource| resource["contact"].as_str().expect("contact").contains("988")));
}

#[tokio::test]
async fn blank_submissions_are_unprocessable() {
    let router = community_router(service());

    let response = router
        .oneshot(post_request(
            "/api/v1/community/posts",
            json!({ "title": "  ", "content": "" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn listing_honors_query_pagination() {
    let service = service();
    for index in 0..3 {
        service
            .create_post(submission(&format!("Post {index}"), "body"))
            .expect("valid submission");
    }
    let router = community_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/community/posts?page=2&per_page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
    assert_eq!(body["posts"].as_array().expect("posts").len(), 1);
}

#[tokio::test]
async fn out_of_range_page_numbers_yield_an_empty_listing() {
    let service = service();
    service
        .create_post(submission("Only post", "body"))
        .expect("valid submission");
    let router = community_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/community/posts?page=18446744073709551615&per_page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert!(body["posts"].as_array().expect("posts").is_empty());
}

#[tokio::test]
async fn post_detail_and_interactions_round_trip() {
    let service = service();
    let created = service
        .create_post(submission("Looking for tips", "What helps on bad days?"))
        .expect("valid submission");
    let id = created.post.id.0.clone();
    let router = community_router(service);

    let response = router
        .clone()
        .oneshot(post_request(
            &format!("/api/v1/community/posts/{id}/replies"),
            json!({ "content": "Walks outside, even short ones." }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(post_request(
            &format!("/api/v1/community/posts/{id}/upvote"),
            json!({}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["likes"], 1);

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/community/posts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["post"]["likes"], 1);
    assert_eq!(body["post"]["replies"].as_array().expect("replies").len(), 1);
}

#[tokio::test]
async fn unknown_posts_are_not_found() {
    let router = community_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/community/posts/post-424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
