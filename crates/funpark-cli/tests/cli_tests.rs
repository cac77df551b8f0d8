//! Integration tests for the FunPark CLI.
//!
//! These tests use `assert_cmd` to run the binary against the built-in park
//! and the JSON fixture park, checking stdout, stderr and exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_park() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/park.json")
        .canonicalize()
        .expect("fixture park present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("funpark-cli");
    cmd.env("RUST_LOG", "error").env_remove("FUNPARK_PARK_FILE");
    cmd
}

// =============================================================================
// Built-in park
// =============================================================================

#[test]
fn route_through_lobby() {
    cli()
        .args(["route", "--from", "Pintu Masuk", "--to", "RollerCoaster"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest distance: 170. Route: Pintu Masuk -> Lobby -> RollerCoaster",
        ));
}

#[test]
fn route_from_unknown_location_is_unavailable() {
    cli()
        .args(["route", "--from", "Unknown", "--to", "Lobby"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route available from Unknown to Lobby.",
        ));
}

#[test]
fn route_json_output() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "Lobby", "--to", "FoodCourt"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["distance"], 60);
    assert_eq!(value["route"], serde_json::json!(["Lobby", "FoodCourt"]));
}

#[test]
fn attractions_hide_closed_by_default() {
    cli()
        .arg("attractions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attractions (5):"))
        .stdout(predicate::str::contains("Rumah Hantu").not());
}

#[test]
fn attractions_all_includes_closed() {
    cli()
        .args(["attractions", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attractions (6):"))
        .stdout(predicate::str::contains(
            "- Rumah Hantu (location: Rumah Hantu) | categories: ekstrem,horor | thrill: 7 | Closed",
        ));
}

#[test]
fn closed_haunted_house_is_not_recommended() {
    cli()
        .args(["recommend", "--from", "RollerCoaster", "--category", "horor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attraction matches the criteria."));
}

#[test]
fn reopened_haunted_house_is_recommended() {
    cli()
        .args([
            "--open",
            "Rumah Hantu",
            "recommend",
            "--from",
            "RollerCoaster",
            "--category",
            "horor",
            "--min-thrill",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Nearest attraction: Rumah Hantu (distance 150)",
        ))
        .stdout(predicate::str::contains("Route: RollerCoaster -> Rumah Hantu"));
}

#[test]
fn min_thrill_above_ten_matches_nothing() {
    cli()
        .args(["recommend", "--from", "Lobby", "--min-thrill", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attraction matches the criteria."));
}

#[test]
fn negative_min_thrill_accepts_every_rating() {
    cli()
        .args(["recommend", "--from", "Lobby", "--min-thrill", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nearest attraction:"));
}

#[test]
fn toggle_reports_new_status() {
    cli()
        .args(["toggle", "Rumah Hantu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rumah Hantu is now Open"));
}

#[test]
fn toggle_unknown_attraction_fails_with_suggestion() {
    cli()
        .args(["toggle", "Rumah Hantoe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attraction: Rumah Hantoe"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn traverse_from_entrance() {
    cli()
        .args(["traverse", "--from", "Pintu Masuk"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Traversal order: Pintu Masuk -> Lobby -> RollerCoaster -> Kincir Angin -> FoodCourt",
        ));
}

#[test]
fn traverse_unknown_location_fails() {
    cli()
        .args(["traverse", "--from", "Loby"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location: Loby"));
}

#[test]
fn locations_lists_builtin_layout() {
    cli()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations (9):"))
        .stdout(predicate::str::contains("- VRCenter"));
}

// =============================================================================
// Custom park files
// =============================================================================

#[test]
fn park_flag_loads_fixture() {
    cli()
        .arg("--park")
        .arg(fixture_park())
        .args(["route", "--from", "Gate", "--to", "Coaster Hill"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest distance: 105. Route: Gate -> Plaza -> Splash Cove -> Coaster Hill",
        ));
}

#[test]
fn park_env_var_loads_fixture() {
    cli()
        .env("FUNPARK_PARK_FILE", fixture_park())
        .args(["recommend", "--from", "Gate", "--category", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nearest attraction: Log Flume (distance 70)"));
}

#[test]
fn island_attraction_is_never_recommended() {
    cli()
        .arg("--park")
        .arg(fixture_park())
        .args(["--close", "Thunder Run", "recommend", "--from", "Gate"])
        .args(["--category", "extreme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attraction matches the criteria."));
}

#[test]
fn invalid_park_file_is_reported() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "locations": ["A"], "attractions": [
            { "name": "Ride", "location": "B", "categories": ["x"], "thrill": 3 }
        ] }"#,
    )
    .expect("write park");

    cli()
        .arg("--park")
        .arg(&path)
        .arg("locations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid park configuration"))
        .stderr(predicate::str::contains("bound to undeclared location B"));
}

#[test]
fn missing_park_file_is_reported() {
    let temp_dir = TempDir::new().expect("create temp dir");
    cli()
        .arg("--park")
        .arg(temp_dir.path().join("absent.json"))
        .arg("locations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load park"));
}
