mod aggregate;
mod compatibility;
mod derivation;

pub use aggregate::{
    clamp_answer, oriented_value, DimensionTally, MAX_ANSWER, MIN_ANSWER, NEUTRAL_SCORE,
};
pub use compatibility::{shared_letters, CompatibilityRanking, COMPATIBILITY_LIMIT};
pub use derivation::{round_tenth, TypeDerivation};

use super::catalog::{QuestionCatalog, TypeCatalog};
use super::domain::{AnswerSet, Dimension, QuizMode};
use super::views::{ScoreReport, TypeView};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Stateless scorer over shared, read-only catalogs.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    questions: Arc<QuestionCatalog>,
    types: Arc<TypeCatalog>,
    unknown_type_name: String,
}

impl ScoringEngine {
    pub fn new(
        questions: Arc<QuestionCatalog>,
        types: Arc<TypeCatalog>,
        unknown_type_name: impl Into<String>,
    ) -> Self {
        Self {
            questions,
            types,
            unknown_type_name: unknown_type_name.into(),
        }
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    /// Unrounded 0..=100 score per dimension for the questions asked in `mode`.
    pub fn dimension_scores(&self, mode: QuizMode, answers: &AnswerSet) -> BTreeMap<Dimension, f64> {
        let tallies = aggregate::tally(self.questions.applicable(mode), answers);
        aggregate::normalize(&tallies)
    }

    pub fn derive_type(&self, scores: &BTreeMap<Dimension, f64>) -> TypeDerivation {
        derivation::derive(scores)
    }

    /// Metadata for `code`, or the placeholder when the catalog has none.
    pub fn resolve_type(&self, code: &str) -> TypeView {
        self.types
            .get(code)
            .map(TypeView::from)
            .unwrap_or_else(|| TypeView::placeholder(&self.unknown_type_name))
    }

    pub fn compatibility(&self, code: &str) -> CompatibilityRanking {
        compatibility::rank(&self.types, code, COMPATIBILITY_LIMIT)
    }

    pub fn score(&self, mode: QuizMode, answers: &AnswerSet) -> ScoreReport {
        let scores = self.dimension_scores(mode, answers);
        let TypeDerivation {
            code,
            letters,
            confidence,
        } = self.derive_type(&scores);
        let profile = self.resolve_type(&code);
        let CompatibilityRanking {
            compatible,
            incompatible,
        } = self.compatibility(&code);

        ScoreReport {
            type_code: code,
            type_name: profile.name,
            description: profile.description,
            detail: profile.detail,
            strengths: profile.strengths,
            weaknesses: profile.weaknesses,
            scores: scores
                .into_iter()
                .map(|(dimension, score)| (dimension, round_tenth(score)))
                .collect(),
            confidence,
            type_letters: letters,
            compatible,
            incompatible,
        }
    }
}
