//! Collecting per-author counters from git output.
//!
//! Two sources feed the report:
//!
//! - **History**: the output of `git log --all --pretty=format:%aN --numstat`,
//!   where an author line is followed by one `added<TAB>removed<TAB>path`
//!   line per changed file.
//! - **Blame**: `git blame --line-porcelain` output for every tracked file,
//!   where each attributed line carries an `author <name>` header.
//!
//! Both parsers are pure functions over text; running git is left to
//! [`crate::git_utils`].

use crate::aggregate::normalize_name;
use crate::error::Result;
use crate::git_utils::{self, TrackedFiles};
use indexmap::IndexMap;
use std::path::Path;

/// Lines added and removed by one author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChurnRecord {
    pub added: u64,
    pub removed: u64,
}

impl ChurnRecord {
    pub fn new(added: u64, removed: u64) -> Self {
        Self { added, removed }
    }

    /// Adds another record's counters into this one.
    pub fn absorb(&mut self, other: ChurnRecord) {
        self.added += other.added;
        self.removed += other.removed;
    }
}

/// History-mode counters keyed by raw author name, in first-seen order.
pub type ContributorRecords = IndexMap<String, ChurnRecord>;

/// Blame-mode line counts keyed by normalized author name, in first-seen order.
pub type LineCounts = IndexMap<String, u64>;

/// One numstat line, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumstatLine {
    /// Both counters parsed.
    Counts { added: u64, removed: u64 },
    /// Non-numeric counters, as git prints for binary files (`-\t-\tpath`).
    Skip,
}

/// Parses the counters of a numstat line.
///
/// Only the first two tab-separated fields are read; the path is ignored.
pub fn parse_numstat_line(line: &str) -> NumstatLine {
    let mut fields = line.split('\t');
    let added = fields.next().and_then(|f| f.trim().parse::<u64>().ok());
    let removed = fields.next().and_then(|f| f.trim().parse::<u64>().ok());
    match (added, removed) {
        (Some(added), Some(removed)) => NumstatLine::Counts { added, removed },
        _ => NumstatLine::Skip,
    }
}

/// Whether a history line carries numstat counters rather than an author name.
fn is_numstat_line(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit()) || line.starts_with("-\t")
}

/// Parses history-query output into per-author churn.
///
/// Counters are attributed to the most recent author line. Numstat lines
/// seen before any author line go to the empty name.
pub fn parse_history(output: &str) -> ContributorRecords {
    let mut records = ContributorRecords::new();
    let mut current_author = String::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !is_numstat_line(line) {
            current_author = line.trim().to_string();
            continue;
        }
        match parse_numstat_line(line) {
            NumstatLine::Counts { added, removed } => {
                records
                    .entry(current_author.clone())
                    .or_default()
                    .absorb(ChurnRecord::new(added, removed));
            }
            NumstatLine::Skip => {
                tracing::trace!(line, author = %current_author, "Skipping non-numeric numstat line");
            }
        }
    }

    records
}

/// Adds the `author` headers of one file's porcelain blame into `counts`.
///
/// Returns how many lines the file contributed.
pub fn count_blame_authors(blame: &str, counts: &mut LineCounts) -> u64 {
    let mut lines = 0;
    for author in blame.lines().filter_map(|l| l.strip_prefix("author ")) {
        *counts.entry(normalize_name(author.trim())).or_default() += 1;
        lines += 1;
    }
    lines
}

/// Result of a blame pass over a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlameTally {
    /// Lines per normalized author.
    pub counts: LineCounts,
    /// Every attributed line, hidden authors included.
    pub total_lines: u64,
    /// Files that were blamed successfully.
    pub files_blamed: usize,
    /// Files skipped because git could not attribute them.
    pub files_skipped: usize,
}

/// Tallies blame output file by file using `blame`.
///
/// A file for which `blame` yields `None` contributes nothing; the pass
/// carries on with the next file.
pub fn tally_blame<F>(files: &[impl AsRef<Path>], mut blame: F) -> BlameTally
where
    F: FnMut(&Path) -> Option<String>,
{
    let mut tally = BlameTally::default();
    for file in files {
        match blame(file.as_ref()) {
            Some(output) => {
                tally.total_lines += count_blame_authors(&output, &mut tally.counts);
                tally.files_blamed += 1;
            }
            None => tally.files_skipped += 1,
        }
    }
    tally
}

/// Runs the history query in `dir` and parses it.
///
/// # Errors
///
/// Propagates the [`crate::error::ContribError::GitError`] from running git.
pub fn collect_history(dir: &Path) -> Result<ContributorRecords> {
    let output = git_utils::history_log(dir)?;
    let records = parse_history(&output);
    tracing::info!(authors = records.len(), "Collected history");
    Ok(records)
}

/// Blames every tracked file of the repository containing `dir`.
///
/// # Errors
///
/// Fails only when the repository itself cannot be opened; individual files
/// that cannot be blamed are skipped.
pub fn collect_blame(dir: &Path) -> Result<BlameTally> {
    let TrackedFiles { workdir, files } = git_utils::list_tracked_files(dir)?;
    let tally = tally_blame(&files, |file| git_utils::blame_file(&workdir, file));
    tracing::info!(
        blamed = tally.files_blamed,
        skipped = tally.files_skipped,
        lines = tally.total_lines,
        "Collected blame"
    );
    Ok(tally)
}
