mod import;
mod questions;
mod types;

pub use types::{TypeCatalog, TypeProfile};

use super::domain::{Question, QuizMode};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read question catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("question catalog is empty")]
    Empty,
    #[error("question '{0}' appears more than once")]
    DuplicateQuestion(String),
    #[error("question '{id}' references unknown dimension '{code}'")]
    UnknownDimension { id: String, code: String },
    #[error("question '{id}' has unknown mode tag '{tag}' (expected 'both' or 'full')")]
    UnknownMode { id: String, tag: String },
    #[error("question '{id}' must carry a positive weight, found {weight}")]
    NonPositiveWeight { id: String, weight: f64 },
    #[error("type code '{0}' does not spell one pole letter per dimension")]
    InvalidTypeCode(String),
    #[error("type code '{0}' appears more than once")]
    DuplicateType(String),
}

/// Ordered, validated question list shared by every scoring call.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(CatalogError::NonPositiveWeight {
                    id: question.id.clone(),
                    weight: question.weight,
                });
            }
        }

        Ok(Self { questions })
    }

    /// Built-in catalog, checked like any imported one.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(questions::standard_questions())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a CSV with header `id,dimension,text,weight,reverse,mode`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(import::parse_questions(reader)?)
    }

    /// Questions asked in `mode`, in catalog order.
    pub fn applicable(&self, mode: QuizMode) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |question| mode.includes(question.mode))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::{Dimension, QuestionMode};

    #[test]
    fn standard_catalog_passes_validation() {
        let standard = QuestionCatalog::standard().expect("standard is valid");
        assert_eq!(standard.len(), 30);

        for dimension in Dimension::ordered() {
            let short = standard
                .applicable(QuizMode::Short)
                .filter(|question| question.dimension == dimension)
                .count();
            let full = standard
                .applicable(QuizMode::Full)
                .filter(|question| question.dimension == dimension)
                .count();
            assert!(short > 0, "{dimension} has no short-quiz questions");
            assert!(full > short, "{dimension} has no full-only questions");
        }
    }

    #[test]
    fn short_mode_keeps_only_shared_questions() {
        let standard = QuestionCatalog::standard().expect("standard is valid");
        assert!(standard
            .applicable(QuizMode::Short)
            .all(|question| question.mode == QuestionMode::Both));
        assert_eq!(standard.applicable(QuizMode::Full).count(), standard.len());
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_weights() {
        let question = Question {
            id: "q1".to_string(),
            dimension: Dimension::Harmony,
            text: "I avoid arguments.".to_string(),
            weight: 1.0,
            reverse: false,
            mode: QuestionMode::Both,
        };

        let duplicate = QuestionCatalog::new(vec![question.clone(), question.clone()]);
        assert!(matches!(duplicate, Err(CatalogError::DuplicateQuestion(id)) if id == "q1"));

        let mut weightless = question;
        weightless.weight = 0.0;
        assert!(matches!(
            QuestionCatalog::new(vec![weightless]),
            Err(CatalogError::NonPositiveWeight { .. })
        ));

        assert!(matches!(
            QuestionCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = QuestionCatalog::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, CatalogError::Io(_)));
    }
}
