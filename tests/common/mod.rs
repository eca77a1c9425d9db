//! Helpers for building throwaway git repositories in tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git should run");
    assert!(status.success(), "git {:?} failed", args);
}

pub fn init_repo() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    git(dir.path(), &["config", "core.autocrlf", "false"]);
    dir
}

/// Writes `name` with `lines` numbered lines and commits it as `author`.
pub fn commit_as(dir: &Path, author: &str, name: &str, lines: usize) {
    let content: String = (0..lines).map(|i| format!("line {}\n", i)).collect();
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    git(dir, &["add", name]);
    let status = Command::new("git")
        .args(["commit", "-q", "-m", &format!("add {}", name)])
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .current_dir(dir)
        .status()
        .expect("git commit should run");
    assert!(status.success(), "commit of {} failed", name);
}

/// Counts bar cells in a rendered line.
pub fn bar_cells(line: &str) -> usize {
    line.chars().filter(|&c| c == '█').count()
}
