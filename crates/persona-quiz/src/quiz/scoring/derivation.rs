use super::aggregate::NEUTRAL_SCORE;
use crate::quiz::domain::Dimension;
use std::collections::BTreeMap;

/// Letters and confidence derived from a score vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDerivation {
    pub code: String,
    pub letters: BTreeMap<Dimension, char>,
    pub confidence: BTreeMap<Dimension, f64>,
}

/// One decimal place, ties to even: `6.25` reports as `6.2`, `43.75` as `43.8`.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Exactly neutral resolves to the high pole.
pub fn letter_for(dimension: Dimension, score: f64) -> char {
    if score >= NEUTRAL_SCORE {
        dimension.high_letter()
    } else {
        dimension.low_letter()
    }
}

pub fn confidence_for(score: f64) -> f64 {
    round_tenth((score - NEUTRAL_SCORE).abs())
}

/// Walks the dimensions in canonical order. Missing scores count as neutral.
pub fn derive(scores: &BTreeMap<Dimension, f64>) -> TypeDerivation {
    let mut code = String::with_capacity(Dimension::COUNT);
    let mut letters = BTreeMap::new();
    let mut confidence = BTreeMap::new();

    for dimension in Dimension::ordered() {
        let score = scores.get(&dimension).copied().unwrap_or(NEUTRAL_SCORE);
        let letter = letter_for(dimension, score);
        code.push(letter);
        letters.insert(dimension, letter);
        confidence.insert(dimension, confidence_for(score));
    }

    TypeDerivation {
        code,
        letters,
        confidence,
    }
}
