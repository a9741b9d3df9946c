use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn rankfuse_cmd() -> Command {
    Command::cargo_bin("rankfuse").unwrap()
}

fn write_ranking(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn fuse_prints_consensus() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[1,2,3,4,5]");
    let b = write_ranking(&tmp, "b.json", "[3,1,4,2,5]");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[1,2,3,4],5]\n"));
}

#[test]
fn fuse_identical_rankings_reproduces_input() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[[1,2],3]");
    let b = write_ranking(&tmp, "b.json", "[[1,2],3]");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[1,2],3]\n"));
}

#[test]
fn fuse_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[1,2]");
    let b = write_ranking(&tmp, "b.json", "[2,1]");
    let out = tmp.path().join("consensus.json");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote consensus ranking"));

    assert_eq!(fs::read_to_string(out).unwrap(), "[[1,2]]\n");
}

#[test]
fn fuse_pretty_prints_indented_json() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[1,2]");
    let b = write_ranking(&tmp, "b.json", "[1,2]");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("[\n  1,\n  2\n]"));
}

#[test]
fn fuse_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[1]");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), tmp.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such ranking file"));
}

#[test]
fn fuse_malformed_ranking_fails() {
    let tmp = TempDir::new().unwrap();
    let a = write_ranking(&tmp, "a.json", "[1,2]");
    let b = write_ranking(&tmp, "b.json", "{\"not\": \"a ranking\"}");

    rankfuse_cmd()
        .arg("fuse")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ranking"));
}
