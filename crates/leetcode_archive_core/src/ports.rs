//! crates/leetcode_archive_core/src/ports.rs
//!
//! Defines the service contracts (traits) the sync engine depends on.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! engine independent of the GraphQL transport, the browser cookie store and
//! the HTML renderer.

use async_trait::async_trait;
use crate::domain::{ProblemMetadata, SessionToken, SubmissionRecord};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., HTTP, cookie stores).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    /// No usable session cookie could be found.
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    /// A remote query failed; `target` names the slug or submission id.
    #[error("Remote query for '{target}' failed: {body}")]
    Query { target: String, body: String },
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// One page of the remote submission history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPage {
    pub submissions: Vec<SubmissionRecord>,
    pub has_next: bool,
}

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches `limit` submissions starting at `offset` of the user's history.
    async fn fetch_submission_page(&self, offset: usize, limit: usize) -> PortResult<SubmissionPage>;

    /// Looks up title, statement, difficulty and starter code for a problem.
    async fn fetch_problem(&self, slug: &str) -> PortResult<ProblemMetadata>;

    /// Returns the full source text of one submission.
    async fn fetch_submission_code(&self, submission_id: &str) -> PortResult<String>;
}

pub trait SessionProvider: Send + Sync {
    /// Produces the credential passed to every remote call.
    fn session_token(&self) -> PortResult<SessionToken>;
}

pub trait StatementRenderer: Send + Sync {
    /// Converts a statement's HTML into plain text without links or wrapping.
    fn render_to_plain_text(&self, html: &str) -> PortResult<String>;
}
