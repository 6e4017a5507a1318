//! Binary tests for the ghbrowse command line

mod common;

use assert_cmd::Command;
use common::{plain_dir, TestRepo};
use predicates::prelude::*;
use std::path::Path;

fn ghbrowse(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ghbrowse").unwrap();
    cmd.arg("--no-color").arg("-C").arg(dir).env_remove("RUST_LOG");
    cmd
}

fn github_repo() -> TestRepo {
    TestRepo::init()
        .with_remote("origin", "git@github.com:alice/proj.git")
        .with_remote("upstream", "git://github.com/bob/proj.git")
        .on_branch("dev")
}

#[test]
fn test_default_command_prints_url() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .assert()
        .success()
        .stdout("https://github.com/alice/proj/tree/dev\n");
}

#[test]
fn test_url_with_remote_and_branch() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .args(["url", "upstream", "--branch", "release/1.0"])
        .assert()
        .success()
        .stdout("https://github.com/bob/proj/tree/release/1.0\n");
}

#[test]
fn test_url_json_output() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .args(["url", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""remote_name": "origin""#))
        .stdout(predicate::str::contains(r#""branch": "dev""#));
}

#[test]
fn test_remotes_listing() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .arg("remotes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "origin\tgit@github.com:alice/proj.git (fetch)",
        ))
        .stdout(predicate::str::contains(
            "upstream\tgit://github.com/bob/proj.git (push)",
        ));
}

#[test]
fn test_remotes_fetch_only() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .args(["remotes", "--fetch-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(push)").not());
}

#[test]
fn test_unsupported_host_fails() {
    let repo = TestRepo::init().with_remote("origin", "https://gitlab.com/alice/proj.git");
    ghbrowse(repo.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid github host: gitlab.com"));
}

#[test]
fn test_unknown_remote_fails() {
    let repo = github_repo();
    ghbrowse(repo.path())
        .args(["url", "fork"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remote not found: fork"));
}

#[test]
fn test_no_remotes_fails() {
    let repo = TestRepo::init();
    ghbrowse(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No remotes configured"));
}

#[test]
fn test_outside_repository_fails() {
    let dir = plain_dir();
    ghbrowse(dir.path()).assert().failure().code(1);
}

#[test]
fn test_version() {
    Command::cargo_bin("ghbrowse")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ghbrowse "));
}
