use crate::quiz::domain::{AnswerSet, Dimension, Question};
use std::collections::BTreeMap;

pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 5;
/// Score reported for a dimension that no answered question contributes to.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Running weighted totals for one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionTally {
    pub weighted_sum: f64,
    pub min_possible: f64,
    pub max_possible: f64,
}

impl DimensionTally {
    fn record(&mut self, value: i64, weight: f64) {
        self.weighted_sum += value as f64 * weight;
        self.min_possible += MIN_ANSWER as f64 * weight;
        self.max_possible += MAX_ANSWER as f64 * weight;
    }

    /// Linear rescale of the weighted sum onto 0..=100 between the floor and
    /// ceiling of the answered questions.
    pub fn normalized(&self) -> f64 {
        let range = self.max_possible - self.min_possible;
        if range <= 0.0 {
            return NEUTRAL_SCORE;
        }
        (self.weighted_sum - self.min_possible) / range * 100.0
    }
}

pub fn clamp_answer(raw: i64) -> i64 {
    raw.clamp(MIN_ANSWER, MAX_ANSWER)
}

/// Clamped answer, inverted for reverse-scored questions.
pub fn oriented_value(question: &Question, raw: i64) -> i64 {
    let value = clamp_answer(raw);
    if question.reverse {
        MIN_ANSWER + MAX_ANSWER - value
    } else {
        value
    }
}

/// Sums answered questions per dimension. Every dimension gets an entry, even
/// when nothing was answered for it.
pub(crate) fn tally<'a, I>(questions: I, answers: &AnswerSet) -> BTreeMap<Dimension, DimensionTally>
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut tallies: BTreeMap<Dimension, DimensionTally> = Dimension::ordered()
        .into_iter()
        .map(|dimension| (dimension, DimensionTally::default()))
        .collect();

    for question in questions {
        let Some(raw) = answers.get(&question.id) else {
            continue;
        };
        let value = oriented_value(question, raw);
        tallies
            .entry(question.dimension)
            .or_default()
            .record(value, question.weight);
    }

    tallies
}

pub(crate) fn normalize(
    tallies: &BTreeMap<Dimension, DimensionTally>,
) -> BTreeMap<Dimension, f64> {
    tallies
        .iter()
        .map(|(dimension, tally)| (*dimension, tally.normalized()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::QuestionMode;

    fn question(id: &str, weight: f64, reverse: bool) -> Question {
        Question {
            id: id.to_string(),
            dimension: Dimension::Openness,
            text: String::new(),
            weight,
            reverse,
            mode: QuestionMode::Both,
        }
    }

    #[test]
    fn clamps_out_of_range_answers() {
        assert_eq!(clamp_answer(0), 1);
        assert_eq!(clamp_answer(-5), 1);
        assert_eq!(clamp_answer(3), 3);
        assert_eq!(clamp_answer(6), 5);
        assert_eq!(clamp_answer(99), 5);
    }

    #[test]
    fn reverse_questions_invert_after_clamping() {
        let reversed = question("o1", 1.0, true);
        assert_eq!(oriented_value(&reversed, 1), 5);
        assert_eq!(oriented_value(&reversed, 2), 4);
        assert_eq!(oriented_value(&reversed, 99), 1);
        assert_eq!(oriented_value(&question("o2", 1.0, false), 99), 5);
    }

    #[test]
    fn tally_skips_unanswered_questions() {
        let questions = [question("o1", 2.0, false), question("o2", 1.0, false)];
        let answers: AnswerSet = [("o1", 4)].into_iter().collect();

        let tallies = tally(&questions, &answers);
        let openness = tallies[&Dimension::Openness];
        assert_eq!(openness.weighted_sum, 8.0);
        assert_eq!(openness.min_possible, 2.0);
        assert_eq!(openness.max_possible, 10.0);
        assert_eq!(openness.normalized(), 75.0);
        assert_eq!(tallies.len(), Dimension::COUNT);
        assert_eq!(tallies[&Dimension::Harmony], DimensionTally::default());
    }

    #[test]
    fn empty_tally_is_neutral() {
        assert_eq!(DimensionTally::default().normalized(), NEUTRAL_SCORE);
    }

    #[test]
    fn weights_shift_the_midpoint() {
        let questions = [question("o1", 3.0, false), question("o2", 1.0, false)];
        let answers: AnswerSet = [("o1", 5), ("o2", 1)].into_iter().collect();

        let scores = normalize(&tally(&questions, &answers));
        assert_eq!(scores[&Dimension::Openness], 75.0);
    }
}
