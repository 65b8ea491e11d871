use prefsim_core::{Entity, EntityId, Person, SimilarityError};
use prefsim_preferences::{Preference, PreferenceStore, PreferenceTable, insert_rating};
use prefsim_similarity::{
    Euclidean, Pearson, SimilarityMetric, euclidean_similarity, pearson_correlation, store,
};

const EPS: f64 = 1e-9;

fn critics() -> PreferenceTable<String, String> {
    prefsim_observability::init();
    serde_json::from_str(include_str!("fixtures/critics.json"))
        .expect("critics fixture is valid JSON")
}

fn key(name: &str) -> String {
    name.to_string()
}

#[test]
fn critics_euclidean_scores() {
    let t = critics();
    let s = euclidean_similarity(&t, &key("Lisa Rose"), &key("Gene Seymour")).unwrap();
    assert!((s - 0.294_298_055_085_549_46).abs() < EPS);

    let s = euclidean_similarity(&t, &key("Mick LaSalle"), &key("Toby")).unwrap();
    assert!((s - 0.4).abs() < EPS);
}

#[test]
fn critics_pearson_scores() {
    let t = critics();
    let r = pearson_correlation(&t, &key("Lisa Rose"), &key("Gene Seymour")).unwrap();
    assert!((r - 0.396_059_017_190_669_77).abs() < EPS);

    let r = pearson_correlation(&t, &key("Lisa Rose"), &key("Toby")).unwrap();
    assert!((r - 0.991_240_707_161_929_9).abs() < EPS);
}

#[test]
fn critics_scores_are_symmetric() {
    let t = critics();
    let names: Vec<&String> = t.keys().collect();
    for a in &names {
        for b in &names {
            let ab = Euclidean.score(&t, *a, *b).unwrap();
            let ba = Euclidean.score(&t, *b, *a).unwrap();
            assert!((ab - ba).abs() < EPS, "euclidean {a} vs {b}");
            let ab = Pearson.score(&t, *a, *b).unwrap();
            let ba = Pearson.score(&t, *b, *a).unwrap();
            assert!((ab - ba).abs() < EPS, "pearson {a} vs {b}");
        }
    }
}

#[test]
fn critic_with_no_shared_items_scores_zero_everywhere() {
    let t = critics();
    let loner = key("Nobody Shared");
    for other in t.keys().filter(|k| **k != loner) {
        assert_eq!(euclidean_similarity(&t, &loner, other).unwrap(), 0.0);
        assert_eq!(pearson_correlation(&t, &loner, other).unwrap(), 0.0);
    }
}

#[test]
fn unknown_critic_scores_zero() {
    let t = critics();
    assert_eq!(euclidean_similarity(&t, &key("Lisa Rose"), &key("Nobody At All")).unwrap(), 0.0);
    assert_eq!(pearson_correlation(&t, &key("Nobody At All"), &key("Lisa Rose")).unwrap(), 0.0);
}

#[test]
fn zero_variance_pearson_is_exactly_zero() {
    let mut t = PreferenceTable::new();
    insert_rating(&mut t, 'A', 'x', 5.0);
    insert_rating(&mut t, 'A', 'y', 5.0);
    insert_rating(&mut t, 'B', 'x', 1.0);
    insert_rating(&mut t, 'B', 'y', 9.0);
    assert_eq!(pearson_correlation(&t, &'A', &'B').unwrap(), 0.0);
}

#[test]
fn store_and_table_agree_on_people() {
    prefsim_observability::init();
    let lisa = Person::new("Lisa Rose");
    let gene = Person::new("Gene Seymour");
    let toby = Person::new("Toby");

    let prefs = PreferenceStore::try_new_unique(vec![
        Preference::for_entity(&lisa, "Snakes on a Plane", 3.5),
        Preference::for_entity(&lisa, "Superman Returns", 3.5),
        Preference::for_entity(&lisa, "You, Me and Dupree", 2.5),
        Preference::for_entity(&gene, "Snakes on a Plane", 3.5),
        Preference::for_entity(&gene, "Superman Returns", 5.0),
        Preference::for_entity(&gene, "You, Me and Dupree", 3.5),
        Preference::for_entity(&toby, "Casablanca", 1.0),
    ])
    .unwrap();
    let table = prefs.to_table();

    for (a, b) in [(&lisa, &gene), (&gene, &toby), (&lisa, &lisa)] {
        let from_store = store::euclidean_similarity(&prefs, *a.id(), *b.id()).unwrap();
        let from_table = euclidean_similarity(&table, a.id(), b.id()).unwrap();
        assert!((from_store - from_table).abs() < EPS);
    }

    assert_eq!(store::euclidean_similarity(&prefs, *gene.id(), *toby.id()).unwrap(), 0.0);
    assert_eq!(store::euclidean_similarity(&prefs, *lisa.id(), *lisa.id()).unwrap(), 1.0);
}

#[test]
fn nil_ids_fail_on_every_call_surface() {
    let a = EntityId::new();
    let prefs = PreferenceStore::new(vec![Preference::new(a, "x", 1.0)]);
    let table = prefs.to_table();

    let results = [
        store::euclidean_similarity(&prefs, a, EntityId::nil()),
        store::pearson_correlation(&prefs, EntityId::nil(), a),
        euclidean_similarity(&table, &EntityId::nil(), &a),
        pearson_correlation(&table, &a, &EntityId::nil()),
    ];
    for r in results {
        assert!(matches!(r, Err(SimilarityError::InvalidArgument(_))), "got {r:?}");
    }
}
