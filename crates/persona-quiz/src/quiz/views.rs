use super::catalog::TypeProfile;
use super::domain::{Dimension, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client-facing question; weights, reverse flags, and mode tags stay server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub dimension: Dimension,
    pub text: String,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            dimension: question.dimension,
            text: question.text.clone(),
        }
    }
}

/// Client-safe metadata for one catalogued type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeView {
    pub name: String,
    pub description: String,
    pub detail: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl TypeView {
    /// Stand-in for a derived code without curated metadata.
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            detail: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }
}

impl From<&TypeProfile> for TypeView {
    fn from(profile: &TypeProfile) -> Self {
        Self {
            name: profile.name.to_string(),
            description: profile.description.to_string(),
            detail: profile.detail.to_string(),
            strengths: profile.strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: profile.weaknesses.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub code: String,
    pub name: String,
    /// Positions shared with the scored type, 0 through 5.
    pub matches: u8,
}

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub type_code: String,
    pub type_name: String,
    pub description: String,
    pub detail: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub scores: BTreeMap<Dimension, f64>,
    pub confidence: BTreeMap<Dimension, f64>,
    pub type_letters: BTreeMap<Dimension, char>,
    pub compatible: Vec<CompatibilityEntry>,
    pub incompatible: Vec<CompatibilityEntry>,
}
