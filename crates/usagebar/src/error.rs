use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning or rendering usage reports.
///
/// Malformed scan lines are never errors; they are dropped during
/// aggregation.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument outside its valid range (e.g. a percentage above 100)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Scan target does not exist
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Scan target exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// du not found on PATH
    #[error("du not found - install coreutils or use the native scanner")]
    DuNotFound,

    /// Scan command ran but produced nothing usable
    #[error("scan failed: {0}")]
    ScanFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error comes from the scan collaborator rather than
    /// from the report math.
    pub fn is_scan_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::NotADirectory(_)
                | Error::DuNotFound
                | Error::ScanFailed(_)
                | Error::Io(_)
        )
    }
}

/// Result type for usage operations
pub type Result<T> = std::result::Result<T, Error>;
