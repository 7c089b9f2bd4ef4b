use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::classifier::{classify, RiskTier};
use super::response::{respond_for, DISCLAIMER};

/// Router builder for the support chat endpoints.
pub fn chat_router() -> Router {
    Router::new()
        .route("/api/v1/chat", get(info_handler))
        .route("/api/v1/chat/messages", post(message_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) tier: RiskTier,
    pub(crate) response: &'static str,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) disclaimer: &'static str,
}

pub(crate) async fn message_handler(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let tier = classify(&request.message);
    Json(ChatResponse {
        tier,
        response: respond_for(tier, &request.message),
        timestamp: Utc::now(),
        disclaimer: DISCLAIMER,
    })
}

pub(crate) async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Mental Health Support Chatbot",
        "description": "A rule-based assistant providing mental health education, resources, and crisis support.",
        "capabilities": [
            "Crisis detection and intervention",
            "Mental health education",
            "Resource recommendations",
            "Coping strategy suggestions",
            "Assessment tool guidance"
        ],
        "disclaimer": DISCLAIMER,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    #[tokio::test]
    async fn message_handler_flags_crisis_input() {
        let Json(body) = message_handler(Json(ChatRequest {
            message: "I want to kill myself".to_string(),
        }))
        .await;

        assert_eq!(body.tier, RiskTier::Crisis);
        assert!(body.response.contains("988"));
    }

    #[tokio::test]
    async fn message_handler_defaults_to_low_for_plain_questions() {
        let Json(body) = message_handler(Json(ChatRequest {
            message: "What can you help with?".to_string(),
        }))
        .await;

        assert_eq!(body.tier, RiskTier::Low);
        assert_eq!(body.disclaimer, DISCLAIMER);
    }
}
