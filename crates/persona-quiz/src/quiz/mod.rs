//! Question catalogs, scoring engine, and HTTP surface of the personality quiz.

pub mod catalog;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog, TypeCatalog, TypeProfile};
pub use domain::{AnswerSet, Dimension, Question, QuestionMode, QuizMode};
pub use router::quiz_router;
pub use scoring::{CompatibilityRanking, ScoringEngine, TypeDerivation};
pub use service::{QuizRequestError, QuizService, RawAnswer, ScoreRequest};
pub use views::{CompatibilityEntry, QuestionView, ScoreReport, TypeView};
