use super::common::*;
use crate::quiz::catalog::TypeCatalog;
use crate::quiz::scoring::{shared_letters, COMPATIBILITY_LIMIT};
use crate::quiz::CompatibilityEntry;

fn codes(entries: &[CompatibilityEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.code.as_str()).collect()
}

#[test]
fn shared_letters_is_symmetric_across_the_catalog() {
    let catalog = TypeCatalog::standard().expect("standard types load");
    for left in catalog.profiles() {
        for right in catalog.profiles() {
            assert_eq!(
                shared_letters(left.code, right.code),
                shared_letters(right.code, left.code)
            );
        }
        assert_eq!(shared_letters(left.code, left.code), 5);
    }
    assert_eq!(shared_letters("ENJHS", "ITFDR"), 0);
    assert_eq!(shared_letters("ENJHS", "ENFHR"), 3);
}

#[test]
fn ties_break_on_ascending_code() {
    let engine = engine_with_types(
        one_per_dimension(),
        types(&["ITFDR", "ENJHR", "INFDR", "ENFHS", "ENJHS", "ETFDR", "ENJDS"]),
    );

    let ranking = engine.compatibility("ENJHS");

    assert_eq!(codes(&ranking.compatible), ["ENFHS", "ENJDS", "ENJHR"]);
    assert!(ranking.compatible.iter().all(|entry| entry.matches == 4));
    assert_eq!(codes(&ranking.incompatible), ["ITFDR", "ETFDR", "INFDR"]);
    let matches: Vec<u8> = ranking.incompatible.iter().map(|entry| entry.matches).collect();
    assert_eq!(matches, [0, 1, 1]);
}

#[test]
fn ranking_excludes_the_query_code() {
    let engine = engine(one_per_dimension());
    for profile in TypeCatalog::standard().expect("standard types load").profiles() {
        let ranking = engine.compatibility(profile.code);
        assert_eq!(ranking.compatible.len(), COMPATIBILITY_LIMIT);
        assert_eq!(ranking.incompatible.len(), COMPATIBILITY_LIMIT);
        assert!(ranking
            .compatible
            .iter()
            .chain(&ranking.incompatible)
            .all(|entry| entry.code != profile.code));
    }
}

#[test]
fn standard_catalog_ranking_for_the_conductor() {
    let engine = engine(one_per_dimension());

    let ranking = engine.compatibility("ENJHS");

    assert_eq!(codes(&ranking.compatible), ["ENFHS", "ENJDS", "ENJHR"]);
    assert_eq!(codes(&ranking.incompatible), ["ITFDR", "ENFDR", "INFDR"]);
    assert_eq!(ranking.compatible[0].name, "The Host");
    assert_eq!(ranking.incompatible[0].matches, 0);
}

#[test]
fn small_catalogs_return_what_exists() {
    let engine = engine_with_types(one_per_dimension(), types(&["ENJHS", "ITFDR"]));

    let ranking = engine.compatibility("ENJHS");
    assert_eq!(codes(&ranking.compatible), ["ITFDR"]);
    assert_eq!(codes(&ranking.incompatible), ["ITFDR"]);

    let lonely = engine_with_types(one_per_dimension(), types(&["ENJHS"]));
    let ranking = lonely.compatibility("ENJHS");
    assert!(ranking.compatible.is_empty());
    assert!(ranking.incompatible.is_empty());
}

#[test]
fn uncatalogued_query_ranks_every_entry() {
    let engine = engine_with_types(one_per_dimension(), types(&["ENJHS", "ITFDR"]));

    let ranking = engine.compatibility("ETFDS");
    assert_eq!(codes(&ranking.compatible), ["ITFDR", "ENJHS"]);
    let matches: Vec<u8> = ranking.compatible.iter().map(|entry| entry.matches).collect();
    assert_eq!(matches, [3, 2]);
}
