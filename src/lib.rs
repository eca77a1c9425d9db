//! # gitcontrib - contribution histograms for git repositories
//!
//! gitcontrib is a CLI tool and library that summarizes how much each author
//! has contributed to a git repository:
//!
//! - **History mode**: lines added and removed per author across every branch
//! - **Existence mode**: lines each author owns in the current tree (blame)
//!
//! ## Architecture
//!
//! A run flows through three stages, each a separate module:
//!
//! - [`collector`] - Runs git and parses its output into per-author counters
//! - [`aggregate`] - Merges author identities and filters noise names
//! - [`report`] - Renders the aligned histogram table
//!
//! Supporting modules:
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Report layout configuration
//! - [`contributor_summary`] - Orchestration of a single run
//! - [`error`] - Centralized error types for the crate
//! - [`git_utils`] - Running git and reading the repository index
//!
//! ## Usage as a Library
//!
//! ```rust
//! use gitcontrib_core::{aggregate, collector, report, ReportConfig};
//!
//! let log = "Alice Smith\n10\t2\tfile.txt\nBob Jones\n5\t0\tother.txt\n";
//! let summary = aggregate::summarize(&collector::parse_history(log));
//! let table = report::render_history(&summary, &ReportConfig::default());
//! assert!(table.contains("alice smith"));
//! ```
//!
//! ## Error Handling
//!
//! All functions that can fail return [`Result<T>`], which is a type alias for
//! `std::result::Result<T, ContribError>`. See the [`error`] module for details.

pub mod aggregate;
pub mod cli;
pub mod collector;
pub mod config;
pub mod contributor_summary;
pub mod error;
pub mod git_utils;
pub mod report;

pub use crate::aggregate::{NormalizedSummary, is_hidden_contributor, normalize_name};
pub use crate::cli::{Cli, ContributorSummaryArgs, SummaryMode};
pub use crate::collector::{
    BlameTally, ChurnRecord, ContributorRecords, LineCounts, NumstatLine, parse_history,
    parse_numstat_line,
};
pub use crate::config::{ReportConfig, load_config, load_config_from_path};
pub use crate::contributor_summary::ContributorSummaryRule;
pub use crate::error::{ContribError as Error, Result};
