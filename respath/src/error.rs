//! Error types for the respath library.
//!
//! Parsing a resource path never fails; malformed input degrades into a
//! best-effort structure. The errors here cover the few defined failure
//! conditions (out-of-range component access) and the configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a respath error.
///
/// # Examples
///
/// ```
/// use respath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the respath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory was requested beyond the depth of the path.
    #[error("directory level {level} out of range for a path with {depth} director{}", if *.depth == 1 { "y" } else { "ies" })]
    DirectoryOutOfRange {
        /// The requested level, counted from the innermost directory.
        level: usize,
        /// The number of directories in the path.
        depth: usize,
    },

    /// A configuration file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending filesystem path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates out-of-range component access.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::Error;
    ///
    /// let err = Error::DirectoryOutOfRange { level: 4, depth: 2 };
    /// assert!(err.is_out_of_range());
    /// ```
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::DirectoryOutOfRange { .. })
    }

    /// Check if error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
