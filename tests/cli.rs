use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn renders_a_small_image() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("small.ppm");
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&["-o", output.to_str().unwrap(), "-s", "60x40", "-i", "200"])
        .assert()
        .success();
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"P6"));
    assert!(bytes.len() > 60 * 40 * 3);
}

#[test]
fn prints_statistics_on_request() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("stats.ppm");
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&[
            "-o",
            output.to_str().unwrap(),
            "-s",
            "60x40",
            "-i",
            "200",
            "-c",
            "percentile",
            "--stats",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iterations: 200"))
        .stdout(predicate::str::contains("Dimensions: 60x40px"))
        .stdout(predicate::str::contains("Escaping points:"));
}

#[test]
fn a_budget_of_one_has_nothing_to_draw() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("empty.ppm");
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&["-o", output.to_str().unwrap(), "-s", "20x20", "-i", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"))
        .stderr(predicate::str::contains("no escaping orbits"));
    assert!(!output.exists());
}

#[test]
fn rejects_unknown_schemes() {
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&["-o", "never.ppm", "-c", "sepia"])
        .assert()
        .failure();
}

#[test]
fn rejects_empty_images() {
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&["-o", "never.ppm", "-s", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1x1"));
}

#[test]
fn reports_unwritable_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("out.ppm");
    Command::cargo_bin("buddha")
        .unwrap()
        .args(&["-o", output.to_str().unwrap(), "-s", "30x20", "-i", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not write image"));
}
