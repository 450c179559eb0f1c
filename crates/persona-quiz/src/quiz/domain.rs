use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Personality axis scored by the quiz, in canonical type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "P")]
    Planning,
    #[serde(rename = "H")]
    Harmony,
    #[serde(rename = "S")]
    Stability,
}

impl Dimension {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Extraversion,
            Self::Openness,
            Self::Planning,
            Self::Harmony,
            Self::Stability,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Extraversion => "E",
            Self::Openness => "O",
            Self::Planning => "P",
            Self::Harmony => "H",
            Self::Stability => "S",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Extraversion => "Extraversion",
            Self::Openness => "Openness",
            Self::Planning => "Planning",
            Self::Harmony => "Harmony",
            Self::Stability => "Stability",
        }
    }

    /// Letter used when the normalized score is at or above the midpoint.
    pub const fn high_letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Openness => 'N',
            Self::Planning => 'J',
            Self::Harmony => 'H',
            Self::Stability => 'S',
        }
    }

    pub const fn low_letter(self) -> char {
        match self {
            Self::Extraversion => 'I',
            Self::Openness => 'T',
            Self::Planning => 'F',
            Self::Harmony => 'D',
            Self::Stability => 'R',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn is_pole(self, letter: char) -> bool {
        letter == self.high_letter() || letter == self.low_letter()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which quiz lengths a question participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMode {
    /// Asked in both the short and the full quiz.
    Both,
    #[serde(rename = "full")]
    FullOnly,
}

impl QuestionMode {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "both" => Some(Self::Both),
            "full" => Some(Self::FullOnly),
            _ => None,
        }
    }
}

/// Quiz length requested by a caller.
///
/// Only the exact selector `"short"` picks the short quiz; every other value,
/// strings and non-strings alike, is treated as the full quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "serde_json::Value")]
pub enum QuizMode {
    #[default]
    Short,
    Full,
}

impl QuizMode {
    pub fn from_selector(selector: &str) -> Self {
        if selector == "short" {
            Self::Short
        } else {
            Self::Full
        }
    }

    pub const fn includes(self, mode: QuestionMode) -> bool {
        match self {
            Self::Short => matches!(mode, QuestionMode::Both),
            Self::Full => true,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

impl From<serde_json::Value> for QuizMode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(selector) => Self::from_selector(&selector),
            _ => Self::Full,
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Likert item scored against a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub dimension: Dimension,
    pub text: String,
    pub weight: f64,
    /// Phrased against the dimension's high pole; answers are inverted.
    pub reverse: bool,
    pub mode: QuestionMode,
}

/// Raw Likert responses keyed by question id.
///
/// Values are kept as submitted; clamping to the answer scale happens during
/// aggregation. Ids that match no question are ignored when scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: i64) {
        self.0.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<i64> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(question_id, value)| (question_id.into(), value))
                .collect(),
        )
    }
}
