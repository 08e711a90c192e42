//! Error types for depcopy

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DepcopyError>;

/// Error types for depcopy operations
#[derive(Debug, Error)]
pub enum DepcopyError {
    /// A root or included file could not be opened or read
    #[error("Cannot read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be copied into the destination directory
    #[error("Cannot copy {path}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `\{name}` referenced a name that is not bound in scope
    #[error("Undefined substitution on line: {line} in file {path}")]
    UndefinedSubstitution { line: String, path: PathBuf },

    /// A line kept expanding past the substitution limit
    #[error("Too many substitutions on line: {line} in file {path}")]
    SubstitutionLimit { line: String, path: PathBuf },

    /// `assign <name>` without a value for a name that is not bound
    #[error("Cannot unassign '{name}' in file {path}: name is not assigned")]
    MissingUnassign { name: String, path: PathBuf },

    /// Destination is missing or not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DepcopyError {
    /// Check if this error came from walking include directives
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            DepcopyError::UndefinedSubstitution { .. }
                | DepcopyError::SubstitutionLimit { .. }
                | DepcopyError::MissingUnassign { .. }
                | DepcopyError::Read { .. }
        )
    }

    /// Check if this error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DepcopyError::Config(_) | DepcopyError::NotADirectory(_)
        )
    }
}
