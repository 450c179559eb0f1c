use super::CatalogError;
use crate::quiz::domain::Dimension;
use serde::Serialize;
use std::collections::BTreeMap;

/// Curated description of one type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

/// Type profiles keyed by code. Iteration is in ascending code order.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    profiles: BTreeMap<&'static str, TypeProfile>,
}

impl TypeCatalog {
    /// Curated catalog, checked like any caller-supplied one.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_profiles(STANDARD_TYPES.iter().cloned())
    }

    pub fn from_profiles<I>(profiles: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = TypeProfile>,
    {
        let mut catalog = BTreeMap::new();
        for profile in profiles {
            if !is_well_formed(profile.code) {
                return Err(CatalogError::InvalidTypeCode(profile.code.to_string()));
            }
            if catalog.insert(profile.code, profile.clone()).is_some() {
                return Err(CatalogError::DuplicateType(profile.code.to_string()));
            }
        }
        Ok(Self { profiles: catalog })
    }

    pub fn get(&self, code: &str) -> Option<&TypeProfile> {
        self.profiles.get(code)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &TypeProfile> + '_ {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn is_well_formed(code: &str) -> bool {
    code.chars().count() == Dimension::COUNT
        && code
            .chars()
            .zip(Dimension::ordered())
            .all(|(letter, dimension)| dimension.is_pole(letter))
}

const STANDARD_TYPES: &[TypeProfile] = &[
    TypeProfile {
        code: "ENJHS",
        name: "The Conductor",
        description: "Warm, organized, and steady: the person who gets everyone moving in the same direction.",
        detail: "Conductors draw energy from people and channel it into plans that leave room for everyone. They stay composed under pressure, which makes them natural coordinators of teams and events.",
        strengths: &["Rallies groups around a shared plan", "Stays calm when schedules slip", "Notices who needs support"],
        weaknesses: &["Takes on too much responsibility", "Avoids conflict that needs airing"],
    },
    TypeProfile {
        code: "ENJHR",
        name: "The Catalyst",
        description: "Enthusiastic planner who feels every win and setback with the team.",
        detail: "Catalysts set ambitious plans and bring people along through sheer enthusiasm. Their emotional responsiveness makes them inspiring, and occasionally exhausted.",
        strengths: &["Infectious enthusiasm", "Turns ideas into schedules", "Deep empathy"],
        weaknesses: &["Burns out after long pushes", "Takes criticism personally"],
    },
    TypeProfile {
        code: "ENJDS",
        name: "The Strategist",
        description: "Outspoken visionary who plans several moves ahead.",
        detail: "Strategists combine curiosity with structure and are comfortable saying what others only think. They are at their best steering a group through change.",
        strengths: &["Clear long-range vision", "Direct, actionable feedback", "Composed decision making"],
        weaknesses: &["Can steamroll quieter voices", "Impatient with slow consensus"],
    },
    TypeProfile {
        code: "ENFHS",
        name: "The Host",
        description: "Easygoing and open-minded, happiest when everyone feels welcome.",
        detail: "Hosts improvise gatherings, conversations, and adventures. Their calm, accepting manner puts people at ease quickly.",
        strengths: &["Makes newcomers comfortable", "Adapts plans on the fly", "Even-tempered"],
        weaknesses: &["Struggles with deadlines", "Says yes to too many invitations"],
    },
    TypeProfile {
        code: "ENFDR",
        name: "The Maverick",
        description: "Spontaneous, candid, and restless for the next new thing.",
        detail: "Mavericks chase novelty, speak their minds, and feel everything intensely. They shake up stale situations and are rarely boring company.",
        strengths: &["Fearless about new ideas", "Honest to a fault", "Quick to act"],
        weaknesses: &["Leaves projects unfinished", "Moods swing with circumstances"],
    },
    TypeProfile {
        code: "ETJHS",
        name: "The Organizer",
        description: "Sociable traditionalist who keeps communities running smoothly.",
        detail: "Organizers value proven routines and the people who share them. They are the reliable backbone of clubs, offices, and families.",
        strengths: &["Dependable follow-through", "Keeps traditions alive", "Patient with others"],
        weaknesses: &["Resists unfamiliar approaches", "Hides own needs to keep the peace"],
    },
    TypeProfile {
        code: "ETJDS",
        name: "The Commander",
        description: "Decisive, practical, and unflappable in a crisis.",
        detail: "Commanders prefer known methods and clear orders. They say what needs to be done and stay level-headed while doing it.",
        strengths: &["Decisive under pressure", "Efficient execution", "Plain-spoken"],
        weaknesses: &["Dismisses unconventional ideas", "Can come across as blunt"],
    },
    TypeProfile {
        code: "ETFHR",
        name: "The Entertainer",
        description: "Lively and affectionate, living fully in the moment.",
        detail: "Entertainers love familiar pleasures shared with friends. They read a room instantly and respond with warmth and spontaneity.",
        strengths: &["Lifts the mood of a group", "Highly attuned to others", "Flexible"],
        weaknesses: &["Avoids long-term planning", "Easily stung by rejection"],
    },
    TypeProfile {
        code: "INJHS",
        name: "The Counselor",
        description: "Reflective, idealistic, and quietly dependable.",
        detail: "Counselors think deeply about people and possibilities, then act through careful plans. Their calm presence makes them trusted confidants.",
        strengths: &["Insightful listener", "Principled planning", "Steady under stress"],
        weaknesses: &["Reluctant to self-promote", "Holds back disagreement"],
    },
    TypeProfile {
        code: "INJDS",
        name: "The Architect",
        description: "Independent thinker who designs systems and defends them plainly.",
        detail: "Architects work best alone on complex problems, building structured solutions from new ideas. They critique freely and expect the same in return.",
        strengths: &["Systems thinking", "Intellectual honesty", "Calm focus"],
        weaknesses: &["Can seem aloof", "Underestimates emotional factors"],
    },
    TypeProfile {
        code: "INFHR",
        name: "The Dreamer",
        description: "Imaginative and sensitive, guided by values more than schedules.",
        detail: "Dreamers explore inner worlds of ideas and feelings. They care intensely about harmony and authenticity, and feel the friction of the world keenly.",
        strengths: &["Rich imagination", "Deep compassion", "Open to every perspective"],
        weaknesses: &["Procrastinates on practical tasks", "Overwhelmed by conflict"],
    },
    TypeProfile {
        code: "INFDR",
        name: "The Inventor",
        description: "Curious tinkerer who follows ideas wherever they lead.",
        detail: "Inventors juggle many experiments at once and argue for their theories with passion. Their intensity fuels breakthroughs and occasional frustration.",
        strengths: &["Original problem solving", "Candid debate", "Passionate curiosity"],
        weaknesses: &["Scattered attention", "Frustrated by routine"],
    },
    TypeProfile {
        code: "ITJHS",
        name: "The Guardian",
        description: "Quiet, loyal, and methodical caretaker of what matters.",
        detail: "Guardians protect people and traditions through consistent effort. They rarely seek attention but are the first to notice what needs doing.",
        strengths: &["Utterly reliable", "Attentive to detail", "Patient and kind"],
        weaknesses: &["Uneasy with sudden change", "Slow to voice concerns"],
    },
    TypeProfile {
        code: "ITJDS",
        name: "The Analyst",
        description: "Precise, principled, and unimpressed by hype.",
        detail: "Analysts prefer facts, proven procedures, and honest assessments. They stay composed and objective when others get swept up in emotion.",
        strengths: &["Rigorous reasoning", "Consistent standards", "Emotionally even"],
        weaknesses: &["Rigid about methods", "Criticism can land harshly"],
    },
    TypeProfile {
        code: "ITFHS",
        name: "The Craftsman",
        description: "Calm, hands-on, and content to let things unfold.",
        detail: "Craftsmen enjoy familiar skills practiced at their own pace. Their relaxed, accommodating nature makes them easy to work alongside.",
        strengths: &["Practical skill", "Easygoing temperament", "Accepting of others"],
        weaknesses: &["Avoids planning ahead", "Rarely shares ambitions"],
    },
    TypeProfile {
        code: "ITFDR",
        name: "The Drifter",
        description: "Private, frank, and guided by the feeling of the moment.",
        detail: "Drifters keep to familiar ground and their own company, reacting honestly to whatever the day brings. They value independence above all.",
        strengths: &["Self-reliant", "Unfiltered honesty", "Adaptable to circumstance"],
        weaknesses: &["Hard to pin down", "Moods are visible to everyone"],
    },
];
