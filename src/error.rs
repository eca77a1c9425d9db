//! Error types for gitcontrib.
//!
//! This module defines the error type shared by the collector, the
//! configuration loader and the CLI, so callers can tell a failed git
//! invocation apart from a bad config file.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The main error type for gitcontrib operations.
#[derive(Debug)]
pub enum ContribError {
    /// A git command could not be run, or exited unsuccessfully.
    GitError {
        /// The git operation being performed (e.g. `git log`).
        operation: String,
        /// The directory git was run in.
        repo_path: Option<PathBuf>,
        /// What git (or the OS) reported.
        message: Option<String>,
        /// The underlying error.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred during file system operations.
    IoError {
        /// The operation being performed.
        operation: String,
        /// The path involved in the error.
        path: Option<PathBuf>,
        /// The underlying IO error.
        source: Option<io::Error>,
    },

    /// An error occurred while loading or parsing configuration.
    ConfigError {
        /// Description of the configuration issue.
        message: String,
        /// The config file path, if applicable.
        path: Option<PathBuf>,
        /// The underlying error.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error indicating an invalid argument or input.
    InvalidInput {
        /// Description of the invalid input.
        message: String,
        /// The argument or value that was invalid.
        argument: Option<String>,
    },
}

impl ContribError {
    /// Creates a new `GitError` for an operation run inside `repo_path`.
    ///
    /// # Arguments
    /// * `operation` - A description of the git operation being performed.
    /// * `repo_path` - The directory git was run in.
    /// * `message` - What went wrong, usually git's stderr.
    pub fn git_error_in(
        operation: impl Into<String>,
        repo_path: PathBuf,
        message: impl Into<String>,
    ) -> Self {
        Self::GitError {
            operation: operation.into(),
            repo_path: Some(repo_path),
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `IoError` with a path and underlying error.
    pub fn io_error_with_source(
        operation: impl Into<String>,
        path: PathBuf,
        source: io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Creates a new `ConfigError` with a file path.
    pub fn config_error_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: Some(path),
            source: None,
        }
    }

    /// Creates a new `ConfigError` for a file, keeping the underlying error.
    pub fn config_error_with_source(
        message: impl Into<String>,
        path: PathBuf,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: Some(path),
            source: Some(source.into()),
        }
    }

    /// Creates a new `InvalidInput` error with an argument name.
    pub fn invalid_input_with_arg(message: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            argument: Some(argument.into()),
        }
    }

    /// Returns the name of the error variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GitError { .. } => "GitError",
            Self::IoError { .. } => "IoError",
            Self::ConfigError { .. } => "ConfigError",
            Self::InvalidInput { .. } => "InvalidInput",
        }
    }

    /// Returns the directory a git error happened in, if known.
    pub fn repo_path(&self) -> Option<&PathBuf> {
        match self {
            Self::GitError { repo_path, .. } => repo_path.as_ref(),
            _ => None,
        }
    }

    /// Returns suggested recovery actions for the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GitError { .. } => vec![
                "Ensure the path is a valid Git repository".to_string(),
                "Check that you have permissions to access the repository".to_string(),
                "Verify Git is installed and accessible".to_string(),
            ],
            Self::IoError { .. } => vec![
                "Check that the path exists and is accessible".to_string(),
                "Verify you have the necessary permissions".to_string(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the configuration file syntax".to_string(),
                "Ensure the file is valid TOML format".to_string(),
            ],
            Self::InvalidInput { .. } => vec![
                "Review the command-line arguments".to_string(),
                "Run with --help to see the accepted arguments".to_string(),
            ],
        }
    }
}

impl fmt::Display for ContribError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitError {
                operation,
                repo_path,
                message,
                ..
            } => {
                match repo_path {
                    Some(path) => write!(
                        f,
                        "Git error during '{}' in '{}'",
                        operation,
                        path.display()
                    )?,
                    None => write!(f, "Git error during '{}'", operation)?,
                }
                match message {
                    Some(message) => write!(f, ": {}", message),
                    None => write!(f, ": operation failed"),
                }
            }
            Self::IoError {
                operation, path, ..
            } => {
                if let Some(p) = path {
                    write!(
                        f,
                        "IO error during '{}' at '{}': operation failed",
                        operation,
                        p.display()
                    )
                } else {
                    write!(f, "IO error during '{}': operation failed", operation)
                }
            }
            Self::ConfigError { message, path, .. } => {
                if let Some(p) = path {
                    write!(f, "Configuration error in '{}': {}", p.display(), message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            Self::InvalidInput { message, argument } => {
                if let Some(arg) = argument {
                    write!(f, "Invalid input '{}': {}", arg, message)
                } else {
                    write!(f, "Invalid input: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for ContribError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GitError { source, .. } => source.as_ref().map(|s| s.as_ref() as _),
            Self::IoError { source, .. } => source.as_ref().map(|e| e as _),
            Self::ConfigError { source, .. } => source.as_ref().map(|s| s.as_ref() as _),
            Self::InvalidInput { .. } => None,
        }
    }
}

impl From<git2::Error> for ContribError {
    fn from(err: git2::Error) -> Self {
        Self::GitError {
            operation: "git operation".to_string(),
            repo_path: None,
            message: Some(err.message().to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// A type alias for `Result<T, ContribError>`.
pub type Result<T> = std::result::Result<T, ContribError>;
