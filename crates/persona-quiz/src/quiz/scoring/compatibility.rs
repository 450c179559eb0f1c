use crate::quiz::catalog::{TypeCatalog, TypeProfile};
use crate::quiz::views::CompatibilityEntry;
use std::cmp::Ordering;

/// Entries returned on each side of the ranking.
pub const COMPATIBILITY_LIMIT: usize = 3;

/// Most- and least-compatible catalogued types for one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRanking {
    pub compatible: Vec<CompatibilityEntry>,
    pub incompatible: Vec<CompatibilityEntry>,
}

/// Number of positions at which the two codes carry the same letter.
pub fn shared_letters(left: &str, right: &str) -> u8 {
    left.chars()
        .zip(right.chars())
        .filter(|(a, b)| a == b)
        .count() as u8
}

/// Ranks every catalogued type other than `code`. Ties break on ascending code.
pub fn rank(catalog: &TypeCatalog, code: &str, limit: usize) -> CompatibilityRanking {
    let candidates: Vec<(&TypeProfile, u8)> = catalog
        .profiles()
        .filter(|profile| profile.code != code)
        .map(|profile| (profile, shared_letters(code, profile.code)))
        .collect();

    let compatible = top(&candidates, limit, |a, b| {
        b.1.cmp(&a.1).then_with(|| a.0.code.cmp(b.0.code))
    });
    let incompatible = top(&candidates, limit, |a, b| {
        a.1.cmp(&b.1).then_with(|| a.0.code.cmp(b.0.code))
    });

    CompatibilityRanking {
        compatible,
        incompatible,
    }
}

fn top<F>(candidates: &[(&TypeProfile, u8)], limit: usize, order: F) -> Vec<CompatibilityEntry>
where
    F: Fn(&(&TypeProfile, u8), &(&TypeProfile, u8)) -> Ordering,
{
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| order(a, b));
    sorted
        .into_iter()
        .take(limit)
        .map(|(profile, matches)| CompatibilityEntry {
            code: profile.code.to_string(),
            name: profile.name.to_string(),
            matches,
        })
        .collect()
}
