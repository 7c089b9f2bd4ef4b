use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::support::assessment::{assessment_router, AnswerSet};

fn router() -> axum::Router {
    assessment_router(Arc::new(catalog()))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn score_body(answers: &AnswerSet) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = answers
        .iter()
        .map(|(id, value)| (id.to_string(), json!(value)))
        .collect();
    json!({ "answers": map })
}

#[tokio::test]
async fn listing_returns_the_catalog_summaries() {
    let response = router()
        .oneshot(Request::get("/api/v1/assessments").body(Body::empty()).unwrap())
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let summaries = body.as_array().expect("summary array");
    assert_eq!(summaries.len(), 5);
    assert_eq!(summaries[0]["slug"], "phq-9");
    assert!(summaries[0]["question_count"].as_u64().expect("count") > 0);
}

#[tokio::test]
async fn detail_returns_the_full_questionnaire() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/assessments/gad-7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["slug"], "gad-7");
    assert_eq!(body["questions"].as_array().expect("questions").len(), 7);
    assert_eq!(body["scoring"]["max_score"], 21);
}

#[tokio::test]
async fn detail_rejects_unknown_slugs() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/assessments/mmpi-2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scoring_a_complete_answer_set_reports_the_band() {
    let questionnaire = phq9();
    let answers = uniform_answers(&questionnaire, 1);

    let response = router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessments/phq-9/score",
            score_body(&answers),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total"], 9);
    assert_eq!(body["max_score"], 27);
    assert_eq!(body["severity"], "Mild");
    assert!(
        body.get("crisis_support").is_none(),
        "mild results carry no hotline block"
    );
}

#[tokio::test]
async fn severe_results_attach_crisis_resources() {
    let questionnaire = phq9();
    let answers = uniform_answers(&questionnaire, 3);

    let response = router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessments/phq-9/score",
            score_body(&answers),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["severity"], "Severe");
    let resources = body["crisis_support"]["resources"]
        .as_array()
        .expect("hotlines");
    assert!(!resources.is_empty());
    assert!(body["crisis_support"]["message"]
        .as_str()
        .expect("message")
        .contains("988"));
}

#[tokio::test]
async fn incomplete_answer_sets_are_unprocessable() {
    let questionnaire = phq9();
    let mut answers = uniform_answers(&questionnaire, 1);
    answers.remove(&7);

    let response = router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessments/phq-9/score",
            score_body(&answers),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("message")
        .contains("incomplete"));
}

#[tokio::test]
async fn scoring_an_unknown_slug_is_not_found() {
    let response = router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/assessments/mmpi-2/score",
            json!({ "answers": {} }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
