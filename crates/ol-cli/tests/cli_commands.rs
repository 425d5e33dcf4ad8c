#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ol() -> Command {
    Command::cargo_bin("ol").unwrap()
}

// -- simulate --

#[test]
fn simulate_demo_reports_planets_and_ships() {
    ol().args(["simulate", "--ticks", "200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("200 ticks"))
                .and(predicate::str::contains("terra"))
                .and(predicate::str::contains("scrapyard"))
                .and(predicate::str::contains("hauler-1"))
                .and(predicate::str::contains("reserve")),
        );
}

#[test]
fn simulate_json_is_valid_snapshot() {
    let output = ol()
        .args(["simulate", "--ticks", "50", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["tick"], 50);
    assert_eq!(snapshot["planets"].as_array().unwrap().len(), 4);
    assert_eq!(snapshot["ships"].as_array().unwrap().len(), 3);
    assert!(snapshot["money"].as_f64().unwrap() >= 0.0);
}

#[test]
fn simulate_random_world() {
    let output = ol()
        .args([
            "simulate", "--random", "--seed", "7", "--planets", "6", "--ships", "4", "--ticks",
            "100", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["planets"].as_array().unwrap().len(), 6);
    assert_eq!(snapshot["ships"].as_array().unwrap().len(), 4);
}

#[test]
fn simulate_same_seed_is_deterministic() {
    let run = || {
        ol().args(["simulate", "--random", "-s", "99", "--ticks", "80", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_verbose_prints_event_log() {
    ol().args(["simulate", "--ticks", "600", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log").and(predicate::str::contains("docked at")));
}

#[test]
fn simulate_rejects_non_positive_delta() {
    ol().args(["simulate", "--delta", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delta"));
}

#[test]
fn simulate_random_needs_two_planets() {
    ol().args(["simulate", "--random", "--planets", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("2 planets")));
}

#[test]
fn simulate_missing_scenario_file_fails() {
    let dir = TempDir::new().unwrap();
    ol().args(["simulate", "--scenario"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn simulate_malformed_scenario_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"money\": 10, \"planets\": [ oops ] }").unwrap();

    ol().args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn simulate_scenario_with_unknown_route_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orphan.json");
    fs::write(
        &path,
        r#"{
    "money": 100,
    "planets": [
        { "id": "a", "position": { "x": 0, "y": 0 }, "capacity": 50, "population": 5 }
    ],
    "ships": [
        { "id": "lost", "ship_type": "shuttle", "position": { "x": 0, "y": 0 }, "route": "ghost" }
    ]
}"#,
    )
    .unwrap();

    ol().args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario is invalid"));
}

#[test]
fn simulate_scenario_with_bad_ship_type_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wreck.json");
    fs::write(
        &path,
        r#"{
    "money": 100,
    "ship_types": [
        { "key": "wreck", "name": "Wreck", "capacity": 5, "max_speed": -3.0,
          "acceleration": 1.0, "upkeep_cost": 1.0, "build_cost": 1.0 }
    ],
    "planets": [
        { "id": "a", "position": { "x": 0, "y": 0 }, "capacity": 50, "population": 5 }
    ],
    "ships": [
        { "id": "s", "ship_type": "wreck", "position": { "x": 0, "y": 0 } }
    ]
}"#,
    )
    .unwrap();

    ol().args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("max_speed")));
}

// -- ship-types --

#[test]
fn ship_types_lists_stock_templates() {
    ol().arg("ship-types")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("shuttle")
                .and(predicate::str::contains("freighter"))
                .and(predicate::str::contains("Build cost")),
        );
}

// -- scenario --

#[test]
fn scenario_prints_demo_to_stdout() {
    ol().arg("scenario")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"planets\"")
                .and(predicate::str::contains("inner-loop"))
                .and(predicate::str::contains("mars-run")),
        );
}

#[test]
fn scenario_file_round_trips_through_simulate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("random.json");

    ol().args(["scenario", "--random", "--seed", "3", "--planets", "5", "--ships", "2"])
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote scenario to"));

    let content = fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["planets"].as_array().unwrap().len(), 5);

    let output = ol()
        .args(["simulate", "--ticks", "20", "--json", "--scenario"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["ships"].as_array().unwrap().len(), 2);
}

#[test]
fn scenario_and_random_conflict() {
    ol().args(["scenario", "--random", "--scenario", "x.json"])
        .assert()
        .failure();
}
