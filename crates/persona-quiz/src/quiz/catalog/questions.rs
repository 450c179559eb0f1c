use crate::quiz::domain::{Dimension, Question, QuestionMode};
use Dimension::{Extraversion, Harmony, Openness, Planning, Stability};
use QuestionMode::{Both, FullOnly};

/// `(id, dimension, text, weight, reverse, mode)`
type QuestionSeed = (&'static str, Dimension, &'static str, f64, bool, QuestionMode);

const STANDARD_QUESTIONS: &[QuestionSeed] = &[
    // Extraversion
    ("e1", Extraversion, "I feel energized after spending time in a large group.", 1.5, false, Both),
    ("e2", Extraversion, "I usually start conversations with people I have just met.", 1.0, false, Both),
    ("e3", Extraversion, "I need a quiet evening alone after a busy social day.", 1.0, true, Both),
    ("e4", Extraversion, "I prefer to think things through before speaking up in meetings.", 1.0, true, Both),
    ("e5", Extraversion, "I enjoy being the center of attention at a party.", 0.5, false, FullOnly),
    ("e6", Extraversion, "I would rather text than call.", 0.5, true, FullOnly),
    // Openness
    ("o1", Openness, "I enjoy trying foods, places, and hobbies I have never experienced.", 1.5, false, Both),
    ("o2", Openness, "Abstract ideas and thought experiments excite me.", 1.0, false, Both),
    ("o3", Openness, "I trust proven methods more than new approaches.", 1.0, true, Both),
    ("o4", Openness, "I like routines that stay the same from week to week.", 1.0, true, Both),
    ("o5", Openness, "I often rearrange my surroundings just to see something different.", 0.5, false, FullOnly),
    ("o6", Openness, "Art that breaks the rules interests me more than classic work.", 0.5, false, FullOnly),
    // Planning
    ("p1", Planning, "I make a plan before starting any sizeable task.", 1.5, false, Both),
    ("p2", Planning, "My calendar is organized days or weeks in advance.", 1.0, false, Both),
    ("p3", Planning, "I prefer to keep my options open and decide at the last minute.", 1.0, true, Both),
    ("p4", Planning, "Deadlines motivate me only once they are very close.", 1.0, true, Both),
    ("p5", Planning, "I keep checklists and enjoy crossing items off.", 0.5, false, FullOnly),
    ("p6", Planning, "Unexpected changes to a schedule rarely bother me.", 0.5, true, FullOnly),
    // Harmony
    ("h1", Harmony, "Keeping the peace matters more to me than winning an argument.", 1.5, false, Both),
    ("h2", Harmony, "I adjust my plans so that everyone in the group is comfortable.", 1.0, false, Both),
    ("h3", Harmony, "I say exactly what I think, even when it may upset someone.", 1.0, true, Both),
    ("h4", Harmony, "I enjoy a good debate more than a quick agreement.", 1.0, true, Both),
    ("h5", Harmony, "I notice quickly when someone in the room feels left out.", 0.5, false, FullOnly),
    ("h6", Harmony, "Honest criticism is the most useful gift I can give a friend.", 0.5, true, FullOnly),
    // Stability
    ("s1", Stability, "I stay calm when things go wrong at the last moment.", 1.5, false, Both),
    ("s2", Stability, "My mood is about the same from one day to the next.", 1.0, false, Both),
    ("s3", Stability, "Small setbacks can occupy my thoughts for the rest of the day.", 1.0, true, Both),
    ("s4", Stability, "I react strongly, in the moment, to good and bad news.", 1.0, true, Both),
    ("s5", Stability, "I sleep well even before an important event.", 0.5, false, FullOnly),
    ("s6", Stability, "Criticism stays with me long after it was given.", 0.5, true, FullOnly),
];

pub(super) fn standard_questions() -> Vec<Question> {
    STANDARD_QUESTIONS
        .iter()
        .map(|&(id, dimension, text, weight, reverse, mode)| Question {
            id: id.to_string(),
            dimension,
            text: text.to_string(),
            weight,
            reverse,
            mode,
        })
        .collect()
}
