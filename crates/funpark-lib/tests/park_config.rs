mod common;

use std::fs;
use std::sync::Arc;
use std::thread;

use funpark_lib::{Distance, Error, NearestQuery, Park, ParkConfig};
use tempfile::tempdir;

use common::fixture_path;

fn fixture_park() -> Park {
    let config = ParkConfig::from_path(&fixture_path()).expect("fixture parses");
    Park::from_config(&config).expect("fixture is valid")
}

#[test]
fn loads_fixture_park() {
    let park = fixture_park();
    assert_eq!(park.graph().locations().len(), 6);
    assert_eq!(park.graph().path_count(), 5);
    assert_eq!(park.catalog().len(), 4);
    assert!(!park.catalog().is_open("Tide Pools"), "omitted status is closed");
}

#[test]
fn fixture_routes_prefer_cheaper_detour() {
    let park = fixture_park();
    let route = park.shortest_path("Gate", "Coaster Hill");
    assert_eq!(route.distance, Distance::Finite(105));
    assert_eq!(route.steps, vec!["Gate", "Plaza", "Splash Cove", "Coaster Hill"]);
}

#[test]
fn unreachable_extreme_ride_is_ignored() {
    let park = fixture_park();
    let query = NearestQuery::new("Gate").with_category("extreme");
    let found = park.find_nearest(&query).expect("Thunder Run is reachable");
    assert_eq!(found.attraction, "Thunder Run");

    park.catalog()
        .set_status("Thunder Run", false)
        .expect("known attraction");
    assert!(
        park.find_nearest(&query).is_none(),
        "Beacon Drop is open but on a separate island"
    );
}

#[test]
fn builtin_round_trips_through_json() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("builtin.json");
    let json = serde_json::to_string_pretty(&ParkConfig::builtin()).expect("serialise");
    fs::write(&path, json).expect("write park");

    let loaded = ParkConfig::from_path(&path).expect("load park");
    assert_eq!(loaded, ParkConfig::builtin());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = ParkConfig::from_path(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_json_is_reported() {
    let err = ParkConfig::from_reader("{ \"locations\": [".as_bytes()).expect_err("bad json");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn configuration_errors_are_reported() {
    let cases = [
        (
            r#"{ "locations": ["A", "A"] }"#,
            "location A is declared more than once",
        ),
        (
            r#"{ "locations": ["A"], "paths": [{ "from": "A", "to": "B", "distance": 3 }] }"#,
            "references undeclared location B",
        ),
        (
            r#"{ "locations": ["A", "B"], "paths": [{ "from": "A", "to": "B", "distance": 0 }] }"#,
            "must have a positive distance",
        ),
        (
            r#"{ "locations": ["A"], "attractions": [
                { "name": "R", "location": "B", "categories": ["x"], "thrill": 3 }
            ] }"#,
            "bound to undeclared location B",
        ),
        (
            r#"{ "locations": ["A"], "attractions": [
                { "name": "R", "location": "A", "categories": ["x"], "thrill": 12 }
            ] }"#,
            "expected 1..=10",
        ),
    ];

    for (json, expected) in cases {
        let config = ParkConfig::from_reader(json.as_bytes()).expect("well-formed json");
        let err = config.validate().expect_err("invalid park");
        assert!(
            err.to_string().contains(expected),
            "{err} should mention {expected:?}"
        );
    }
}

#[test]
fn concurrent_toggles_do_not_lose_updates() {
    let park = Arc::new(Park::builtin().expect("builtin park"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let park = Arc::clone(&park);
            thread::spawn(move || {
                for _ in 0..10 {
                    park.toggle_status("KidsZone").expect("known attraction");
                    let _ = park.list_attractions(true);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread completes");
    }

    // 80 toggles is even, so the original status is restored.
    assert!(park.catalog().is_open("KidsZone"));
}
