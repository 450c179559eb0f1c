use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::QuizMode;
use super::service::{QuizService, ScoreRequest};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionQuery {
    #[serde(default)]
    pub(crate) mode: Option<String>,
}

/// Router builder exposing the question listing, scoring, and type directory.
pub fn quiz_router(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/questions", get(questions_handler))
        .route("/score", post(score_handler))
        .route("/types", get(types_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<QuizService>>,
    Query(query): Query<QuestionQuery>,
) -> Response {
    let mode = query
        .mode
        .as_deref()
        .map(QuizMode::from_selector)
        .unwrap_or_default();
    (StatusCode::OK, Json(service.list_questions(mode))).into_response()
}

/// Reads the body as JSON whatever its content type.
pub(crate) async fn score_handler(
    State(service): State<Arc<QuizService>>,
    body: Bytes,
) -> Response {
    let request = match serde_json::from_slice::<ScoreRequest>(&body) {
        Ok(request) => request,
        Err(error) => return bad_request(&error),
    };

    match service.score(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => bad_request(&error),
    }
}

fn bad_request(error: &dyn std::fmt::Display) -> Response {
    warn!(%error, "rejected quiz submission");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

pub(crate) async fn types_handler(State(service): State<Arc<QuizService>>) -> Response {
    (StatusCode::OK, Json(service.type_directory())).into_response()
}
