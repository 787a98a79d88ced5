//! services/cli/src/error.rs
//!
//! Defines the primary error type for the archiver binary.

use crate::config::ConfigError;
use leetcode_archive_core::{PortError, SyncError};

/// The primary error type for the `leetcode-archive` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error from one of the adapters, e.g. a missing session.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a run-level failure of the sync engine.
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Represents a failure building the HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
