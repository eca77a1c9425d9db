use crate::error::{ContribError, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for `gitcontrib`.
///
/// The directory and `--exists` may be given in either order.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gitcontrib",
    version,
    about = "Per-author contribution histogram for a git repository"
)]
pub struct Cli {
    /// Repository directory to summarize. Defaults to the current directory.
    pub path: Option<PathBuf>,

    /// Count the lines each author owns today (git blame) instead of the
    /// lines added and removed across history.
    #[arg(short = 'e', long)]
    pub exists: bool,

    /// TOML file overriding the report layout.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Which statistic the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    /// Lines added and removed per author across every branch.
    #[default]
    History,
    /// Lines currently attributed to each author by blame.
    Existing,
}

/// Resolved arguments for a contributor summary run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorSummaryArgs {
    /// Absolute directory git is run in.
    pub path: PathBuf,
    /// History churn or current blame ownership.
    pub mode: SummaryMode,
    /// Layout file given with `--config`, if any.
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the target directory against the current directory and picks
    /// the mode.
    ///
    /// # Errors
    ///
    /// Returns [`ContribError::InvalidInput`] if the current directory cannot
    /// be determined or the path cannot be made absolute.
    pub fn into_args(self) -> Result<ContributorSummaryArgs> {
        let raw = match self.path {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| {
                ContribError::invalid_input_with_arg(
                    format!("cannot determine current directory: {}", e),
                    ".",
                )
            })?,
        };
        let path = std::path::absolute(&raw).map_err(|e| {
            ContribError::invalid_input_with_arg(e.to_string(), raw.display().to_string())
        })?;

        Ok(ContributorSummaryArgs {
            path,
            mode: if self.exists {
                SummaryMode::Existing
            } else {
                SummaryMode::History
            },
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_history_mode_in_current_directory() {
        let cli = Cli::try_parse_from(["gitcontrib"]).unwrap();
        let args = cli.into_args().unwrap();
        assert_eq!(args.mode, SummaryMode::History);
        assert_eq!(args.path, std::env::current_dir().unwrap());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_flag_before_directory() {
        let cli = Cli::try_parse_from(["gitcontrib", "--exists", "/tmp/repo"]).unwrap();
        assert!(cli.exists);
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/repo")));
    }

    #[test]
    fn test_short_flag_after_directory() {
        let cli = Cli::try_parse_from(["gitcontrib", "/tmp/repo", "-e"]).unwrap();
        let args = cli.into_args().unwrap();
        assert_eq!(args.mode, SummaryMode::Existing);
        assert_eq!(args.path, PathBuf::from("/tmp/repo"));
    }

    #[test]
    fn test_relative_directory_is_made_absolute() {
        let cli = Cli::try_parse_from(["gitcontrib", "some/dir"]).unwrap();
        let args = cli.into_args().unwrap();
        assert!(args.path.is_absolute());
        assert!(args.path.ends_with("some/dir"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["gitcontrib", "--since", "2020"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["gitcontrib", "--config", "layout.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("layout.toml")));
    }
}
