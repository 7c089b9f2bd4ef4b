use axum::response::Response;
use serde_json::Value;

use crate::support::assessment::{AnswerSet, AssessmentCatalog, Questionnaire};

pub(super) fn catalog() -> AssessmentCatalog {
    AssessmentCatalog::standard()
}

pub(super) fn phq9() -> Questionnaire {
    catalog()
        .get("phq-9")
        .cloned()
        .expect("phq-9 is in the standard catalog")
}

pub(super) fn pss10() -> Questionnaire {
    catalog()
        .get("pss-10")
        .cloned()
        .expect("pss-10 is in the standard catalog")
}

pub(super) fn mdq() -> Questionnaire {
    catalog()
        .get("mdq")
        .cloned()
        .expect("mdq is in the standard catalog")
}

/// Answer every question with the same option value.
pub(super) fn uniform_answers(questionnaire: &Questionnaire, value: u32) -> AnswerSet {
    questionnaire
        .questions
        .iter()
        .map(|question| (question.id, value))
        .collect()
}

pub(super) fn answers_from(pairs: &[(u32, u32)]) -> AnswerSet {
    pairs.iter().copied().collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
