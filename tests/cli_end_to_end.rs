//! End-to-end tests running the `gitcontrib` binary against real repositories.

mod common;

use assert_cmd::Command;
use common::{bar_cells, commit_as, has_git, init_repo};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_history_report_for_two_authors() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Alice Smith", "file.txt", 10);
    commit_as(repo.path(), "Bob Jones", "other.txt", 5);
    commit_as(repo.path(), "alice smith <laptop>", "file2.txt", 3);

    let output = Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg(repo.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Contribution Histogram"));

    let alice = stdout
        .lines()
        .find(|l| l.starts_with("alice smith "))
        .expect("alice row");
    let bob = stdout
        .lines()
        .find(|l| l.starts_with("bob jones "))
        .expect("bob row");
    assert!(alice.contains("      13 |"), "merged identities: {alice}");
    assert_eq!(bar_cells(alice), 40);
    assert_eq!(bar_cells(bob), 15);
    assert!(alice.contains("\u{1b}[32m"), "bars are colored by default");
}

#[test]
fn test_history_report_rows_keep_first_seen_order() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Old Timer", "a.txt", 1);
    commit_as(repo.path(), "New Comer", "b.txt", 50);

    let output = Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg(repo.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("old timer") || l.starts_with("new comer"))
        .collect();
    // git log lists the newest commit first.
    assert!(names[0].starts_with("new comer"));
    assert!(names[1].starts_with("old timer"));
}

#[test]
fn test_non_repository_exits_with_error_and_names_directory() {
    if !has_git() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().display().to_string();

    Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(dir_str));
}

#[test]
fn test_blame_mode_skips_unblameable_file() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Alice Smith", "a.txt", 3);
    commit_as(repo.path(), "Bob Jones", "b.txt", 2);
    commit_as(repo.path(), "Bob Jones", "gone.txt", 5);
    // Still tracked by the index, but blame can no longer read it.
    fs::remove_file(repo.path().join("gone.txt")).unwrap();

    Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg("-e")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines in repo: 5"))
        .stdout(predicate::str::contains("alice smith"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_blame_mode_accepts_flag_after_directory() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Alice Smith", "a.txt", 4);

    let output = Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg(repo.path())
        .arg("--exists")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let alice = stdout
        .lines()
        .find(|l| l.starts_with("alice smith "))
        .expect("alice row");
    assert!(alice.contains("       4 | 100.0% |"));
    assert_eq!(bar_cells(alice), 40);
}

#[test]
fn test_config_file_disables_color_and_resizes_bars() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Alice Smith", "a.txt", 4);
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("layout.toml");
    fs::write(&config_path, "bar_width = 10\ncolor = false\n").unwrap();

    let output = Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg(repo.path())
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'));
    let alice = stdout
        .lines()
        .find(|l| l.starts_with("alice smith "))
        .expect("alice row");
    assert_eq!(bar_cells(alice), 10);
}

#[test]
fn test_invalid_config_exits_with_error() {
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("broken.toml");
    fs::write(&config_path, "bar_width = \"wide\"\n").unwrap();

    Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_blame_mode_in_subdirectory_counts_only_its_files() {
    if !has_git() {
        return;
    }
    let repo = init_repo();
    commit_as(repo.path(), "Alice Smith", "top.txt", 7);
    commit_as(repo.path(), "Bob Jones", "sub/inner.txt", 2);

    let output = Command::cargo_bin("gitcontrib")
        .unwrap()
        .arg("-e")
        .arg(repo.path().join("sub"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total lines in repo: 2"), "{stdout}");
    assert!(!stdout.contains("alice smith"), "files above the directory are not blamed");
    let bob = stdout
        .lines()
        .find(|l| l.starts_with("bob jones "))
        .expect("bob row");
    assert!(bob.contains("       2 | 100.0% |"));
}
