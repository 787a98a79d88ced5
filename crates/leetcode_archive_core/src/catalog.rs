//! crates/leetcode_archive_core/src/catalog.rs
//!
//! The remote catalog reader: walks the paginated submission history and
//! forwards single lookups to the `CatalogService` port.

use crate::domain::{ProblemMetadata, SubmissionRecord};
use crate::error::{SyncError, SyncResult};
use crate::ports::{CatalogService, PortResult};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_MAX_PAGES: usize = 10_000;

#[derive(Clone)]
pub struct CatalogReader {
    service: Arc<dyn CatalogService>,
    page_size: usize,
    max_pages: usize,
}

impl CatalogReader {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            service,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Both values are clamped to at least one.
    pub fn with_paging(mut self, page_size: usize, max_pages: usize) -> Self {
        self.page_size = page_size.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    /// Pages through the whole submission history, starting at offset 0.
    ///
    /// Records are returned in pagination order. A record whose id was already
    /// seen on an earlier page is dropped. Fails with
    /// [`SyncError::PaginationLimit`] if the server is still reporting more
    /// pages after `max_pages` requests.
    pub async fn fetch_all_submissions(&self) -> SyncResult<Vec<SubmissionRecord>> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut offset = 0;

        for page_number in 0..self.max_pages {
            let page = self
                .service
                .fetch_submission_page(offset, self.page_size)
                .await?;
            debug!(
                page = page_number,
                offset,
                count = page.submissions.len(),
                has_next = page.has_next,
                "Fetched submission page"
            );

            for record in page.submissions {
                if seen.insert(record.id.clone()) {
                    records.push(record);
                }
            }

            if !page.has_next {
                info!(total = records.len(), pages = page_number + 1, "Submission history complete");
                return Ok(records);
            }
            offset += self.page_size;
        }

        Err(SyncError::PaginationLimit(self.max_pages))
    }

    pub async fn fetch_problem_metadata(&self, slug: &str) -> PortResult<ProblemMetadata> {
        self.service.fetch_problem(slug).await
    }

    pub async fn fetch_submission_code(&self, submission_id: &str) -> PortResult<String> {
        self.service.fetch_submission_code(submission_id).await
    }
}
