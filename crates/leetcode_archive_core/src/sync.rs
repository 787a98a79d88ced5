//! crates/leetcode_archive_core/src/sync.rs
//!
//! The sync engine: catalog → classifier → planner → per-problem writer →
//! index. Problems are processed one at a time; a failure in one problem is
//! recorded in its [`ProblemOutcome`] and never stops the run.

use crate::catalog::CatalogReader;
use crate::classifier::classify;
use crate::domain::{SubmissionRecord, SyncIndexEntry};
use crate::error::{SyncError, SyncResult};
use crate::index::write_index;
use crate::layout::ArchiveLayout;
use crate::planner::{plan, PlanOptions};
use crate::writer::ArchiveWriter;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub only_accepted: bool,
    pub plan: PlanOptions,
    /// Stop after planning; nothing is fetched per problem or written.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            only_accepted: true,
            plan: PlanOptions::default(),
            dry_run: false,
        }
    }
}

/// Result of processing one planned problem.
#[derive(Debug)]
pub struct ProblemOutcome {
    pub slug: String,
    pub result: Result<SyncIndexEntry, SyncError>,
}

impl ProblemOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    /// Slugs selected by the planner, in processing order.
    pub planned: Vec<String>,
    /// Problems with submissions that the planner left out.
    pub skipped: usize,
    pub outcomes: Vec<ProblemOutcome>,
    /// `None` for dry runs.
    pub index_path: Option<PathBuf>,
}

impl SyncReport {
    pub fn archived(&self) -> impl Iterator<Item = &SyncIndexEntry> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &SyncError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.slug.as_str(), e)))
    }
}

pub struct SyncEngine {
    catalog: CatalogReader,
    writer: ArchiveWriter,
    layout: ArchiveLayout,
    options: SyncOptions,
}

impl SyncEngine {
    pub fn new(
        catalog: CatalogReader,
        writer: ArchiveWriter,
        layout: ArchiveLayout,
        options: SyncOptions,
    ) -> Self {
        Self {
            catalog,
            writer,
            layout,
            options,
        }
    }

    /// Runs one full sync.
    ///
    /// Errors while paging the submission history, or while writing the index,
    /// abort the run. Everything that goes wrong inside a single problem ends
    /// up in that problem's outcome instead.
    pub async fn run(&self) -> SyncResult<SyncReport> {
        info!("Fetching submission history...");
        let records = self.catalog.fetch_all_submissions().await?;
        let mut groups = classify(records, self.options.only_accepted);
        info!(problems = groups.len(), "Grouped submissions by problem");

        let planned = plan(groups.keys(), &self.layout, self.options.plan);
        let skipped = groups.len() - planned.len();
        info!(planned = planned.len(), skipped, "Sync plan ready");

        if self.options.dry_run {
            return Ok(SyncReport {
                planned,
                skipped,
                ..Default::default()
            });
        }

        let total = planned.len();
        let mut outcomes = Vec::with_capacity(total);
        for (position, slug) in planned.iter().enumerate() {
            info!("[{}/{}] Processing {}...", position + 1, total, slug);
            let submissions = groups.swap_remove(slug).unwrap_or_default();
            let result = self.sync_problem(slug, &submissions).await;
            match &result {
                Ok(entry) => info!(slug = %slug, title = %entry.title, "Archived problem"),
                Err(e) => error!(slug = %slug, error = %e, "[FAILED] Could not archive problem"),
            }
            outcomes.push(ProblemOutcome {
                slug: slug.clone(),
                result,
            });
        }

        let entries: Vec<SyncIndexEntry> = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().cloned())
            .collect();
        let index_path = write_index(&self.layout, &entries, Utc::now()).await?;
        info!(path = %index_path.display(), problems = entries.len(), "Index written");

        Ok(SyncReport {
            planned,
            skipped,
            outcomes,
            index_path: Some(index_path),
        })
    }

    async fn sync_problem(&self, slug: &str, submissions: &[SubmissionRecord]) -> SyncResult<SyncIndexEntry> {
        let metadata = self.catalog.fetch_problem_metadata(slug).await?;
        self.writer
            .write(slug, &metadata, submissions, &self.layout)
            .await
    }
}
