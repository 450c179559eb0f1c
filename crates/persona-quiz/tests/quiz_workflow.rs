use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use persona_quiz::quiz::{
    quiz_router, AnswerSet, Dimension, QuestionCatalog, QuizMode, QuizService, ScoreReport,
    ScoringEngine, TypeCatalog,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

const FIVE_QUESTIONS: &str = "id,dimension,text,weight,reverse,mode\n\
q1,E,I enjoy meeting new people.,1,false,both\n\
q2,O,I seek out new experiences.,1,false,both\n\
q3,P,I plan ahead.,1,false,both\n\
q4,H,I avoid conflict.,1,false,both\n\
q5,S,I stay calm under pressure.,1,false,both\n";

fn five_question_engine() -> ScoringEngine {
    let questions = QuestionCatalog::from_reader(FIVE_QUESTIONS.as_bytes()).expect("csv parses");
    ScoringEngine::new(
        Arc::new(questions),
        Arc::new(TypeCatalog::standard().expect("standard types load")),
        "Unknown",
    )
}

fn answers(value: i64) -> AnswerSet {
    ["q1", "q2", "q3", "q4", "q5"]
        .into_iter()
        .map(|id| (id, value))
        .collect()
}

#[test]
fn top_answers_land_on_every_high_pole() {
    let report = five_question_engine().score(QuizMode::Short, &answers(5));

    assert_eq!(report.type_code, "ENJHS");
    for dimension in Dimension::ordered() {
        assert_eq!(report.scores[&dimension], 100.0);
        assert_eq!(report.confidence[&dimension], 50.0);
        assert_eq!(report.type_letters[&dimension], dimension.high_letter());
    }
}

#[test]
fn bottom_answers_land_on_every_low_pole() {
    let report = five_question_engine().score(QuizMode::Short, &answers(1));

    assert_eq!(report.type_code, "ITFDR");
    assert_eq!(report.type_name, "The Drifter");
    assert!(report.scores.values().all(|score| *score == 0.0));
    assert!(report
        .compatible
        .iter()
        .all(|entry| entry.code != report.type_code));
}

#[test]
fn midpoint_answers_tie_break_high() {
    let report = five_question_engine().score(QuizMode::Full, &answers(3));

    assert_eq!(report.type_code, "ENJHS");
    assert!(report.confidence.values().all(|confidence| *confidence == 0.0));
}

#[tokio::test]
async fn empty_submission_is_a_client_error_over_http() {
    let service = Arc::new(QuizService::new(five_question_engine()));
    let response = quiz_router(service)
        .oneshot(
            Request::post("/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "answers": {} }).to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_report_matches_direct_scoring() {
    let engine = five_question_engine();
    let expected = engine.score(QuizMode::Short, &answers(4));
    let service = Arc::new(QuizService::new(engine));

    let response = quiz_router(service)
        .oneshot(
            Request::post("/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "mode": "short",
                        "answers": { "q1": 4, "q2": 4, "q3": 4, "q4": 4, "q5": 4 },
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    let report: ScoreReport = serde_json::from_slice(&body).expect("report decodes");
    assert_eq!(report, expected);
    assert_eq!(report.scores[&Dimension::Planning], 75.0);
}
