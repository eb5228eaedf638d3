//! Player store tests: loading, validation, lookup, suggestions

use rand::rngs::StdRng;
use rand::SeedableRng;

use stumped::player::PlayerStore;
use stumped::Error;

const VALID_JSON: &str = r#"[
    {
        "name": "Shane Warne",
        "country": "Australia",
        "role": "Bowler",
        "matches": 339,
        "runs": 4172,
        "wickets": 1001,
        "average": 17.32,
        "era": "Classic"
    },
    {
        "name": "Brian Lara",
        "country": "West Indies",
        "role": "Batsman",
        "matches": 430,
        "runs": 22358,
        "wickets": 4,
        "average": 46.71,
        "era": "Classic"
    },
    {
        "name": "Virat Kohli",
        "country": "India",
        "role": "Batsman",
        "matches": 550,
        "runs": 27599,
        "wickets": 8,
        "average": 52.73,
        "era": "Modern"
    }
]"#;

#[test]
fn test_load_valid_json() {
    let store = PlayerStore::from_json_str(VALID_JSON).unwrap();
    assert_eq!(store.len(), 3);

    let warne = store.find_by_name("Shane Warne").unwrap();
    assert_eq!(warne.country(), "Australia");
    assert_eq!(warne.wickets(), 1001);
    assert!((warne.average() - 17.32).abs() < f64::EPSILON);
}

#[test]
fn test_load_rejects_missing_field() {
    let json = r#"[{"name": "A", "country": "India", "role": "Batsman",
                    "matches": 1, "runs": 2, "wickets": 3, "era": "Modern"}]"#;
    assert!(matches!(
        PlayerStore::from_json_str(json),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_load_rejects_wrong_type() {
    let json = r#"[{"name": "A", "country": "India", "role": "Batsman",
                    "matches": "many", "runs": 2, "wickets": 3,
                    "average": 4.5, "era": "Modern"}]"#;
    assert!(matches!(
        PlayerStore::from_json_str(json),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_load_rejects_non_array() {
    assert!(matches!(
        PlayerStore::from_json_str(r#"{"name": "A"}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_load_rejects_duplicate_names_across_case() {
    let json = r#"[
        {"name": "Shane Warne", "country": "Australia", "role": "Bowler",
         "matches": 339, "runs": 4172, "wickets": 1001, "average": 17.32, "era": "Classic"},
        {"name": "SHANE WARNE", "country": "Australia", "role": "Bowler",
         "matches": 339, "runs": 4172, "wickets": 1001, "average": 17.32, "era": "Classic"}
    ]"#;

    let err = PlayerStore::from_json_str(json).unwrap_err();
    assert!(matches!(err, Error::Data(_)));
    assert!(format!("{err}").contains("duplicate"));
}

#[test]
fn test_whole_load_fails_on_one_bad_record() {
    // Two good records surround one missing a field; nothing survives
    let json = r#"[
        {"name": "A", "country": "India", "role": "Batsman",
         "matches": 1, "runs": 2, "wickets": 3, "average": 4.5, "era": "Modern"},
        {"name": "B", "country": "India", "role": "Batsman"},
        {"name": "C", "country": "India", "role": "Batsman",
         "matches": 1, "runs": 2, "wickets": 3, "average": 4.5, "era": "Modern"}
    ]"#;
    assert!(PlayerStore::from_json_str(json).is_err());
}

#[test]
fn test_load_json_missing_file() {
    let result = PlayerStore::load_json("/nonexistent/players.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_bundled_dataset_loads() {
    let store = PlayerStore::load_json("data/players.json").unwrap();
    assert!(store.len() >= 20);

    // Converter dataset rule: every bundled player has 100+ matches
    assert!(store.players().all(|p| p.matches() >= 100));
}

#[test]
fn test_suggest_order_is_load_order() {
    let store = PlayerStore::from_json_str(VALID_JSON).unwrap();

    let suggestions = store.suggest("ar", 8);
    assert_eq!(suggestions, vec!["Shane Warne", "Brian Lara"]);

    let capped = store.suggest("a", 1);
    assert_eq!(capped, vec!["Shane Warne"]);
}

#[test]
fn test_suggest_is_case_insensitive() {
    let store = PlayerStore::from_json_str(VALID_JSON).unwrap();
    assert_eq!(store.suggest("KOHLI", 8), vec!["Virat Kohli"]);
}

#[test]
fn test_pick_random_with_seed_is_deterministic() {
    let store = PlayerStore::from_json_str(VALID_JSON).unwrap();

    let a = store.pick_random_with(&mut StdRng::seed_from_u64(42)).unwrap();
    let b = store.pick_random_with(&mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.name(), b.name());
}

#[test]
fn test_pick_random_covers_the_pool() {
    let store = PlayerStore::from_json_str(VALID_JSON).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(store.pick_random_with(&mut rng).unwrap().name().to_string());
    }

    // 200 draws over 3 players: all of them show up
    assert_eq!(seen.len(), store.len());
}
