use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::quiz::catalog::{QuestionCatalog, TypeCatalog, TypeProfile};
use crate::quiz::domain::{AnswerSet, Dimension, Question, QuestionMode};
use crate::quiz::scoring::ScoringEngine;
use crate::quiz::service::QuizService;
use crate::quiz::quiz_router;

pub(super) const UNKNOWN: &str = "Unknown";

pub(super) fn question(
    id: &str,
    dimension: Dimension,
    weight: f64,
    reverse: bool,
    mode: QuestionMode,
) -> Question {
    Question {
        id: id.to_string(),
        dimension,
        text: format!("Statement {id}"),
        weight,
        reverse,
        mode,
    }
}

/// One unit-weight, forward-scored shared question per dimension.
pub(super) fn one_per_dimension() -> Vec<Question> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let id = format!("{}1", dimension.code().to_ascii_lowercase());
            question(&id, dimension, 1.0, false, QuestionMode::Both)
        })
        .collect()
}

pub(super) fn catalog(questions: Vec<Question>) -> QuestionCatalog {
    QuestionCatalog::new(questions).expect("fixture catalog is valid")
}

pub(super) fn engine(questions: Vec<Question>) -> ScoringEngine {
    ScoringEngine::new(
        Arc::new(catalog(questions)),
        Arc::new(TypeCatalog::standard().expect("standard types load")),
        UNKNOWN,
    )
}

pub(super) fn engine_with_types(questions: Vec<Question>, types: TypeCatalog) -> ScoringEngine {
    ScoringEngine::new(Arc::new(catalog(questions)), Arc::new(types), UNKNOWN)
}

pub(super) fn uniform_answers(questions: &[Question], value: i64) -> AnswerSet {
    questions
        .iter()
        .map(|question| (question.id.clone(), value))
        .collect()
}

pub(super) fn profile(code: &'static str, name: &'static str) -> TypeProfile {
    TypeProfile {
        code,
        name,
        description: "fixture",
        detail: "fixture detail",
        strengths: &["steady"],
        weaknesses: &["stubborn"],
    }
}

pub(super) fn types(codes: &[&'static str]) -> TypeCatalog {
    TypeCatalog::from_profiles(codes.iter().copied().map(|code| profile(code, code)))
        .expect("fixture types are valid")
}

pub(super) fn standard_service() -> QuizService {
    QuizService::standard(UNKNOWN).expect("standard catalogs load")
}

pub(super) fn standard_router() -> axum::Router {
    quiz_router(Arc::new(standard_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
