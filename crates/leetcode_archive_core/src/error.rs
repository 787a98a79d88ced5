//! crates/leetcode_archive_core/src/error.rs
//!
//! Defines the error type raised by the sync engine.

use crate::ports::PortError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A remote lookup failed (catalog, metadata or submission code).
    #[error("Remote query error: {0}")]
    Remote(#[from] PortError),

    /// Creating a directory or writing a file in the archive failed.
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The submission history never reported its last page.
    #[error("Submission history did not end within {0} pages")]
    PaginationLimit(usize),
}

impl SyncError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
