use assert_cmd::Command;
use predicates::prelude::*;

fn rutex() -> Command {
    Command::cargo_bin("rutex").unwrap()
}

#[test]
fn help_lists_subcommands() {
    rutex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn process_missing_file_fails() {
    rutex()
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn process_rejects_garbage_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    rutex()
        .args(["process", path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn batch_with_no_matches_fails() {
    rutex()
        .args(["batch", "no-such-dir/*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_show_prints_defaults() {
    rutex()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pages"));
}

#[test]
fn config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    rutex()
        .args(["config", "init", "--output", path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("resolution"));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    rutex()
        .args(["config", "init", "--output", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
