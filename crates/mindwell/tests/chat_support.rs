use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use mindwell::support::risk::{chat_router, classify, detect_crisis_language, RiskTier};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send_message(message: &str) -> Value {
    let request = Request::post("/api/v1/chat/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "message": message }).to_string()))
        .expect("request");

    let response = chat_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn crisis_messages_get_immediate_hotline_guidance() {
    let body = send_message("I've been thinking about how to end my life").await;

    assert_eq!(body["tier"], "crisis");
    let response = body["response"].as_str().expect("response text");
    assert!(response.contains("988"));
    assert!(response.contains("741741"));
    assert!(body["disclaimer"]
        .as_str()
        .expect("disclaimer")
        .contains("automated assistant"));
}

#[tokio::test]
async fn distress_without_crisis_language_is_high_risk() {
    let body = send_message("Everything feels hopeless and I can't go on").await;

    assert_eq!(body["tier"], "high-risk");
    assert!(body["response"]
        .as_str()
        .expect("response text")
        .contains("988"));
}

#[tokio::test]
async fn calming_vocabulary_gets_grounding_techniques() {
    let body = send_message("I keep having panic attacks at night").await;

    assert_eq!(body["tier"], "moderate");
    assert!(body["response"]
        .as_str()
        .expect("response text")
        .contains("4-7-8 Breathing"));
}

#[tokio::test]
async fn general_struggles_get_the_broader_moderate_guidance() {
    let body = send_message("I'm anxious about my exam").await;

    assert_eq!(body["tier"], "moderate");
    let response = body["response"].as_str().expect("response text");
    assert!(!response.contains("4-7-8 Breathing"));
    assert!(response.contains("Breathing exercises"));
}

#[tokio::test]
async fn neutral_questions_stay_low_tier() {
    let body = send_message("What assessments do you offer?").await;

    assert_eq!(body["tier"], "low");
    assert!(body["timestamp"].as_str().is_some());
}

#[test]
fn crisis_terms_outrank_everything_else() {
    let mixed = "I'm anxious and depressed and I want to die";
    assert_eq!(classify(mixed), RiskTier::Crisis);
    assert!(detect_crisis_language(mixed));
}

#[test]
fn classification_ignores_case_and_surrounding_text() {
    assert_eq!(classify("SOMETIMES I FEEL WORTHLESS."), RiskTier::HighRisk);
    assert_eq!(
        classify("my doctor said panic attacks are common"),
        RiskTier::Moderate
    );
    assert_eq!(classify("nice weather today"), RiskTier::Low);
}
