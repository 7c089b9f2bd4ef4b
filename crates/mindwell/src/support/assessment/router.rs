use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::catalog::AssessmentCatalog;
use super::domain::AnswerSet;
use super::scoring::ScoringError;
use crate::support::resources::{CrisisResource, CRISIS_PROMPT, HOTLINES};

/// Router builder exposing the questionnaire catalog and scoring endpoints.
pub fn assessment_router(catalog: Arc<AssessmentCatalog>) -> Router {
    Router::new()
        .route("/api/v1/assessments", get(list_handler))
        .route("/api/v1/assessments/:slug", get(detail_handler))
        .route("/api/v1/assessments/:slug/score", post(score_handler))
        .with_state(catalog)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) slug: String,
    pub(crate) total: u32,
    pub(crate) max_score: u32,
    pub(crate) severity: String,
    pub(crate) description: String,
    pub(crate) recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) crisis_support: Option<CrisisSupport>,
}

/// Hotline block attached when the matched band is the worst tier.
#[derive(Debug, Serialize)]
pub(crate) struct CrisisSupport {
    pub(crate) message: &'static str,
    pub(crate) resources: &'static [CrisisResource],
}

pub(crate) async fn list_handler(State(catalog): State<Arc<AssessmentCatalog>>) -> Response {
    (StatusCode::OK, axum::Json(catalog.summaries())).into_response()
}

pub(crate) async fn detail_handler(
    State(catalog): State<Arc<AssessmentCatalog>>,
    Path(slug): Path<String>,
) -> Response {
    match catalog.get(&slug) {
        Some(questionnaire) => (StatusCode::OK, axum::Json(questionnaire.clone())).into_response(),
        None => unknown_assessment(&slug),
    }
}

pub(crate) async fn score_handler(
    State(catalog): State<Arc<AssessmentCatalog>>,
    Path(slug): Path<String>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let Some(questionnaire) = catalog.get(&slug) else {
        return unknown_assessment(&slug);
    };

    match questionnaire.score(&request.answers) {
        Ok(outcome) => {
            let crisis_support = outcome.escalating.then_some(CrisisSupport {
                message: CRISIS_PROMPT,
                resources: HOTLINES,
            });
            let body = ScoreResponse {
                slug: questionnaire.slug.clone(),
                total: outcome.total,
                max_score: questionnaire.scoring.max_score,
                severity: outcome.band.severity,
                description: outcome.band.description,
                recommendation: outcome.band.recommendation,
                crisis_support,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err @ ScoringError::NoMatchingBand { .. }) => {
            error!(%slug, "interpretation table defect: {err}");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

fn unknown_assessment(slug: &str) -> Response {
    let payload = json!({ "error": format!("unknown assessment '{slug}'") });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
