//! gitcontrib: per-author contribution histogram for a git repository.
//!
//! USAGE EXAMPLES:
//!   gitcontrib                 # lines added/removed per author, current repo
//!   gitcontrib ../other-repo   # same, for another directory
//!   gitcontrib -e              # lines each author owns today (git blame)
//!
//! Set `RUST_LOG=gitcontrib_core=debug` to see which git commands run.

use clap::Parser;
use gitcontrib_core::error::ContribError;
use gitcontrib_core::{Cli, ContributorSummaryRule};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Logs go to stderr; stdout carries only the report.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed CLI arguments");

    let args = match cli.into_args() {
        Ok(args) => args,
        Err(e) => {
            report_error(&e);
            exit(1);
        }
    };

    if let Err(e) = ContributorSummaryRule::new().run(&args) {
        report_error(&e);
        exit(1);
    }

    Ok(())
}

fn report_error(err: &ContribError) {
    if let Some(dir) = err.repo_path() {
        eprintln!("Error running git in directory: {}", dir.display());
    }
    eprintln!("{}", err);
    for suggestion in err.suggestions() {
        eprintln!("  hint: {}", suggestion);
    }
}
