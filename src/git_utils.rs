//! Git utility functions for gitcontrib.
//!
//! History and blame queries shell out to the `git` binary so the text they
//! produce is exactly what a user would see on the command line. The list of
//! tracked files is read straight from the repository index with `git2`.

use crate::error::{ContribError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::instrument;

/// Arguments of the history query: every branch, author name per commit,
/// then one numstat line per changed file.
pub const HISTORY_ARGS: &[&str] = &["log", "--all", "--pretty=format:%aN", "--numstat"];

/// Runs `git <args>` inside `dir` and returns its stdout.
///
/// # Errors
///
/// Returns [`ContribError::GitError`] carrying `dir` when git cannot be
/// spawned or exits with a non-zero status. The error message is git's
/// stderr when it printed one.
#[instrument(
    level = "debug",
    skip_all,
    fields(dir = %dir.display(), args = ?args),
    err(level = "debug")
)]
pub fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let operation = format!("git {}", args.first().copied().unwrap_or_default());
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| ContribError::git_error_in(&operation, dir.to_path_buf(), e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("git exited with {}", output.status),
            trimmed => trimmed.to_string(),
        };
        return Err(ContribError::git_error_in(
            operation,
            dir.to_path_buf(),
            message,
        ));
    }

    tracing::debug!(bytes = output.stdout.len(), "git finished");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs the history query in `dir` and returns its raw output.
pub fn history_log(dir: &Path) -> Result<String> {
    run_git(dir, HISTORY_ARGS)
}

/// A repository's working directory together with the files its index tracks.
#[derive(Debug, Clone)]
pub struct TrackedFiles {
    /// Root of the working tree; tracked paths are relative to it.
    pub workdir: PathBuf,
    /// Tracked paths in index order, each listed once.
    pub files: Vec<PathBuf>,
}

/// Lists the tracked files under `dir`, like `git ls-files` run there.
///
/// The repository is discovered upward from `dir`. When `dir` is a
/// subdirectory of the working tree only the files below it are listed;
/// paths stay relative to the working tree root.
///
/// # Errors
///
/// Returns [`ContribError::GitError`] if no repository contains `dir`, the
/// repository is bare, or its index cannot be read, and
/// [`ContribError::IoError`] if `dir` cannot be resolved against the
/// working tree.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display()), err(level = "debug"))]
pub fn list_tracked_files(dir: &Path) -> Result<TrackedFiles> {
    let repo = git2::Repository::discover(dir).map_err(|e| {
        ContribError::git_error_in("open repository", dir.to_path_buf(), e.message())
    })?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| {
            ContribError::git_error_in(
                "open repository",
                dir.to_path_buf(),
                "repository has no working directory",
            )
        })?
        .to_path_buf();
    let scope = scope_within(&workdir, dir)?;
    let index = repo.index()?;

    let mut files: Vec<PathBuf> = Vec::with_capacity(index.len());
    for entry in index.iter() {
        let path = PathBuf::from(String::from_utf8_lossy(&entry.path).into_owned());
        if !path.starts_with(&scope) {
            continue;
        }
        // Conflicted paths appear once per stage, back to back.
        if files.last() != Some(&path) {
            files.push(path);
        }
    }

    tracing::debug!(
        count = files.len(),
        workdir = %workdir.display(),
        scope = %scope.display(),
        "Listed tracked files"
    );
    Ok(TrackedFiles { workdir, files })
}

/// Path of `dir` relative to `workdir`; empty when they are the same.
fn scope_within(workdir: &Path, dir: &Path) -> Result<PathBuf> {
    let resolve = |path: &Path| {
        path.canonicalize().map_err(|e| {
            ContribError::io_error_with_source("resolve directory", path.to_path_buf(), e)
        })
    };
    let root = resolve(workdir)?;
    let target = resolve(dir)?;
    Ok(target
        .strip_prefix(&root)
        .map(Path::to_path_buf)
        .unwrap_or_default())
}

/// Runs `git blame --line-porcelain` for one file.
///
/// Returns `None` when git cannot attribute the file (binary, deleted in
/// the worktree, unreadable). Callers treat that as a file with no lines.
pub fn blame_file(workdir: &Path, file: &Path) -> Option<String> {
    let file_arg = file.to_string_lossy();
    match run_git(workdir, &["blame", "--line-porcelain", "--", &file_arg]) {
        Ok(output) => Some(output),
        Err(e) => {
            tracing::debug!(file = %file.display(), error = %e, "Skipping file that could not be blamed");
            None
        }
    }
}
