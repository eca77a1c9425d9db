//! Contributor Summary Rule
//!
//! Ties the collector, aggregator and reporter together for one run.
//!
//! # Modes
//!
//! - [`SummaryMode::History`]: lines added and removed per author across all
//!   branches, from `git log --numstat`. Any git failure aborts the run.
//! - [`SummaryMode::Existing`]: lines each author owns in the current tree,
//!   from `git blame` on every tracked file. Files git cannot blame are
//!   skipped.
//!
//! # Usage
//!
//! ```no_run
//! use gitcontrib_core::cli::{ContributorSummaryArgs, SummaryMode};
//! use gitcontrib_core::contributor_summary::ContributorSummaryRule;
//! use std::path::PathBuf;
//!
//! let rule = ContributorSummaryRule::new();
//! let args = ContributorSummaryArgs {
//!     path: PathBuf::from("."),
//!     mode: SummaryMode::History,
//!     config: None,
//! };
//!
//! if let Err(e) = rule.run(&args) {
//!     eprintln!("Error: {}", e);
//! }
//! ```
//!
//! # Errors
//!
//! [`ContribError`](crate::error::ContribError) is returned when git cannot
//! be run in the target directory or the config file is invalid. Nothing is
//! written to stdout in that case.

use crate::aggregate;
use crate::cli::{ContributorSummaryArgs, SummaryMode};
use crate::collector;
use crate::config::{self, ReportConfig};
use crate::error::Result;
use crate::report;

/// Produces the contributor histogram for one directory.
pub struct ContributorSummaryRule;

impl Default for ContributorSummaryRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributorSummaryRule {
    pub fn new() -> Self {
        Self
    }

    /// Loads the configuration, builds the report and prints it to stdout.
    pub fn run(&self, args: &ContributorSummaryArgs) -> Result<()> {
        let config = config::load_config(args.config.as_deref())?;
        let report = self.render(args, &config)?;
        print!("{report}");
        Ok(())
    }

    /// Builds the report text without printing it.
    #[tracing::instrument(level = "debug", skip(self, config), err(level = "debug"))]
    pub fn render(&self, args: &ContributorSummaryArgs, config: &ReportConfig) -> Result<String> {
        match args.mode {
            SummaryMode::History => {
                let records = collector::collect_history(&args.path)?;
                let summary = aggregate::summarize(&records);
                Ok(report::render_history(&summary, config))
            }
            SummaryMode::Existing => {
                let tally = collector::collect_blame(&args.path)?;
                Ok(report::render_blame(&tally, config))
            }
        }
    }
}
