use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod du;
pub mod native;

pub use du::DuScanner;
pub use native::NativeScanner;

/// Scan collaborator: reports aggregate usage one level deep.
///
/// Implementations return one `<bytes>\t<path>` line per immediate child
/// directory of `target` plus one for `target` itself, trailing newline
/// stripped. This trait abstracts the underlying implementation, allowing us
/// to:
/// - Shell out to `du` (what users compare the report against)
/// - Walk the tree natively where `du` is missing
/// - Feed canned output in tests
pub trait Scanner: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Scan `target` and return raw usage lines
    fn scan(&self, target: &Path) -> Result<Vec<String>>;
}

/// Which scan backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerKind {
    /// External `du -d 1`
    #[default]
    Du,
    /// Built-in directory walker
    Native,
}

impl ScannerKind {
    /// Construct the backend for this kind.
    pub fn build(self) -> Box<dyn Scanner> {
        match self {
            Self::Du => Box::new(DuScanner::new()),
            Self::Native => Box::new(NativeScanner::new()),
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Du => write!(f, "du"),
            Self::Native => write!(f, "native"),
        }
    }
}

/// Ensure the scan target is an existing directory.
pub(crate) fn check_target(target: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(target) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(target.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory(target.to_path_buf()));
    }

    Ok(())
}

/// Format a usage line the way `du` prints it.
pub(crate) fn usage_line(size_bytes: u64, path: &Path) -> String {
    format!("{}\t{}", size_bytes, path.display())
}
