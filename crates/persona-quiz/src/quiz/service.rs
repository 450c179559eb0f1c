use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use super::catalog::{CatalogError, QuestionCatalog, TypeCatalog};
use super::domain::{AnswerSet, QuizMode};
use super::scoring::ScoringEngine;
use super::views::{QuestionView, ScoreReport, TypeView};
use crate::config::QuizConfig;

/// Answer value as submitted by a client.
///
/// Integers pass through, decimals truncate toward zero, and numeric strings are
/// parsed after trimming. Any other JSON value is kept so it can be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAnswer {
    fn coerce(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Decimal(_) => None,
            Self::Text(raw) => raw.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Decimal(value) => value.to_string(),
            Self::Text(raw) => format!("'{raw}'"),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Body of a score submission.
///
/// An absent `mode` means the short quiz; a present one that is not exactly
/// `"short"`, `null` included, means the full quiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(
        default,
        deserialize_with = "present_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<QuizMode>,
    #[serde(default)]
    pub answers: Option<BTreeMap<String, RawAnswer>>,
}

impl ScoreRequest {
    pub fn new<I, K>(mode: QuizMode, answers: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            mode: Some(mode),
            answers: Some(
                answers
                    .into_iter()
                    .map(|(id, value)| (id.into(), RawAnswer::from(value)))
                    .collect(),
            ),
        }
    }
}

fn present_mode<'de, D>(deserializer: D) -> Result<Option<QuizMode>, D::Error>
where
    D: Deserializer<'de>,
{
    QuizMode::deserialize(deserializer).map(Some)
}

#[derive(Debug, thiserror::Error)]
pub enum QuizRequestError {
    #[error("answers is required")]
    MissingAnswers,
    #[error("answer for '{question_id}' must be an integer, got {value}")]
    InvalidAnswer { question_id: String, value: String },
}

/// Boundary between transport callers and the scoring engine.
#[derive(Debug, Clone)]
pub struct QuizService {
    engine: ScoringEngine,
}

impl QuizService {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Built-in question and type catalogs.
    pub fn standard(unknown_type_name: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self::new(ScoringEngine::new(
            Arc::new(QuestionCatalog::standard()?),
            Arc::new(TypeCatalog::standard()?),
            unknown_type_name,
        )))
    }

    pub fn from_config(config: &QuizConfig) -> Result<Self, CatalogError> {
        let questions = match &config.questions_csv {
            Some(path) => {
                let catalog = QuestionCatalog::from_path(path)?;
                info!(path = %path.display(), questions = catalog.len(), "loaded question catalog");
                catalog
            }
            None => QuestionCatalog::standard()?,
        };

        Ok(Self::new(ScoringEngine::new(
            Arc::new(questions),
            Arc::new(TypeCatalog::standard()?),
            config.unknown_type_name.clone(),
        )))
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn list_questions(&self, mode: QuizMode) -> Vec<QuestionView> {
        self.engine
            .questions()
            .applicable(mode)
            .map(QuestionView::from)
            .collect()
    }

    pub fn type_directory(&self) -> BTreeMap<String, TypeView> {
        self.engine
            .types()
            .profiles()
            .map(|profile| (profile.code.to_string(), TypeView::from(profile)))
            .collect()
    }

    pub fn score(&self, request: ScoreRequest) -> Result<ScoreReport, QuizRequestError> {
        let mode = request.mode.unwrap_or_default();
        let answers = answer_set(request.answers.unwrap_or_default())?;

        let report = self.engine.score(mode, &answers);
        debug!(
            %mode,
            answered = answers.len(),
            type_code = %report.type_code,
            "scored quiz submission"
        );
        Ok(report)
    }
}

fn answer_set(raw: BTreeMap<String, RawAnswer>) -> Result<AnswerSet, QuizRequestError> {
    if raw.is_empty() {
        return Err(QuizRequestError::MissingAnswers);
    }

    raw.into_iter()
        .map(|(question_id, value)| match value.coerce() {
            Some(coerced) => Ok((question_id, coerced)),
            None => Err(QuizRequestError::InvalidAnswer {
                value: value.describe(),
                question_id,
            }),
        })
        .collect()
}
