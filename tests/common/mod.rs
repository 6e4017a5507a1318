//! Test helper functions and utilities
//!
//! Working copies are created with the real git binary inside a temp directory.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Scratch git working copy that lives as long as the value
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// `git init` in a fresh temp directory, with HEAD on `master`
    pub fn init() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/master"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_remote(self, name: &str, url: &str) -> Self {
        self.git(&["remote", "add", name, url]);
        self
    }

    pub fn with_push_url(self, name: &str, url: &str) -> Self {
        self.git(&["remote", "set-url", "--push", name, url]);
        self
    }

    /// Point HEAD at a branch without needing any commits
    pub fn on_branch(self, branch: &str) -> Self {
        self.git(&["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")]);
        self
    }

    /// Create a commit and detach HEAD onto it
    pub fn detached(self) -> Self {
        self.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--allow-empty",
            "--quiet",
            "-m",
            "initial",
        ]);
        self.git(&["checkout", "--quiet", "--detach"]);
        self
    }

    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("HOME", self.dir.path())
            .status()
            .expect("run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}

/// Directory that is not a git working copy
pub fn plain_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}
