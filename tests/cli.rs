#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn generate_then_show_and_tally() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    let report = dir.path().join("schedule.json");
    fs::write(
        &prefs,
        "name,Monday_1,Monday_2\nAlice,Morning,Evening\nBob,Morning,\nCarol,Morning,Evening\n",
    )
    .unwrap();

    cli()
        .args(["generate", "--seed", "7", "--csv"])
        .arg(&prefs)
        .arg("--out")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Monday    | Alice, Bob"))
        .stderr(predicate::str::contains("seed: 7"));

    cli()
        .args(["show", "--format", "csv", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday,\"Alice, Bob\",,Carol"));

    cli()
        .args(["tally", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol | 7"));
}

#[test]
fn check_reports_understaffed_slots_with_code_2() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    let report = dir.path().join("schedule.json");
    fs::write(&prefs, "name,Monday\nSolo,Evening\n").unwrap();

    cli()
        .args(["generate", "--seed", "1", "--csv"])
        .arg(&prefs)
        .arg("--out")
        .arg(&report)
        .assert()
        .success();

    cli()
        .args(["check", "--report"])
        .arg(&report)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Monday | understaffed | Morning | 0"));
}

#[test]
fn check_passes_on_full_week() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    let report = dir.path().join("schedule.json");
    fs::write(&prefs, "name,Monday_1\na,\nb,\nc,\nd,\ne,\nf,\n").unwrap();

    cli()
        .args(["generate", "--seed", "3", "--format", "html", "--csv"])
        .arg(&prefs)
        .arg("--out")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Final Weekly Schedule</h2>"));

    cli()
        .args(["check", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no conflicts"));
}

#[test]
fn missing_csv_fails() {
    let dir = tempdir().unwrap();
    cli()
        .args(["generate", "--csv"])
        .arg(dir.path().join("nope.csv"))
        .arg("--out")
        .arg(dir.path().join("schedule.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));
}
