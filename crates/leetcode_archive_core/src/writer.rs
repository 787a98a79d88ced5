//! crates/leetcode_archive_core/src/writer.rs
//!
//! Materializes one problem into the archive: statement, canonical template
//! and every submission grouped by language.

use crate::catalog::CatalogReader;
use crate::domain::{ProblemMetadata, SubmissionRecord, SyncIndexEntry};
use crate::error::{SyncError, SyncResult};
use crate::layout::{submission_file_name, ArchiveLayout, LanguageTable};
use crate::ports::StatementRenderer;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub const MISSING_STATEMENT: &str = "No description available.";
pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "Python3";

//=========================================================================================
// The Writer Struct
//=========================================================================================

#[derive(Clone)]
pub struct ArchiveWriter {
    catalog: CatalogReader,
    renderer: Arc<dyn StatementRenderer>,
    languages: LanguageTable,
    template_language: String,
}

impl ArchiveWriter {
    pub fn new(catalog: CatalogReader, renderer: Arc<dyn StatementRenderer>) -> Self {
        Self {
            catalog,
            renderer,
            languages: LanguageTable::default(),
            template_language: DEFAULT_TEMPLATE_LANGUAGE.to_string(),
        }
    }

    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_template_language(mut self, language: impl Into<String>) -> Self {
        self.template_language = language.into();
        self
    }

    /// Writes every file of one problem and returns its index summary.
    ///
    /// Files are written in place with no rollback: on error, whatever was
    /// written before the failing step stays on disk.
    pub async fn write(
        &self,
        slug: &str,
        metadata: &ProblemMetadata,
        submissions: &[SubmissionRecord],
        layout: &ArchiveLayout,
    ) -> SyncResult<SyncIndexEntry> {
        create_dir(&layout.submissions_dir(slug)).await?;

        let statement = self.render_statement(metadata)?;
        write_file(&layout.statement_path(slug), &statement).await?;

        self.write_template(slug, metadata, layout).await?;

        for record in submissions {
            let extension = self.languages.extension_for(&record.language);
            let dir = layout.language_dir(slug, &record.language);
            create_dir(&dir).await?;

            let code = self.catalog.fetch_submission_code(&record.id).await?;
            let path = dir.join(submission_file_name(record, &extension));
            write_file(&path, &code).await?;
            debug!(slug, submission = %record.id, path = %path.display(), "Wrote submission");
        }

        Ok(SyncIndexEntry {
            slug: slug.to_string(),
            title: metadata.title.clone(),
            difficulty: metadata.difficulty,
        })
    }

    fn render_statement(&self, metadata: &ProblemMetadata) -> SyncResult<String> {
        let body = match metadata.statement_html.as_deref() {
            Some(html) if !html.trim().is_empty() => self.renderer.render_to_plain_text(html)?,
            _ => String::new(),
        };
        let body = body.trim();
        let body = if body.is_empty() { MISSING_STATEMENT } else { body };
        Ok(format!("# {}\n\n{}\n", metadata.title, body))
    }

    async fn write_template(
        &self,
        slug: &str,
        metadata: &ProblemMetadata,
        layout: &ArchiveLayout,
    ) -> SyncResult<()> {
        let template = metadata
            .starter_templates
            .iter()
            .find(|t| t.language.eq_ignore_ascii_case(&self.template_language));

        match template {
            Some(template) => {
                let extension = self.languages.extension_for(&template.language);
                write_file(&layout.template_path(slug, &extension), &template.code).await
            }
            None => {
                warn!(slug, language = %self.template_language, "No starter template for preferred language");
                Ok(())
            }
        }
    }
}

//=========================================================================================
// Filesystem Helpers
//=========================================================================================

pub(crate) async fn create_dir(path: &Path) -> SyncResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| SyncError::filesystem(path, e))
}

pub(crate) async fn write_file(path: &Path, contents: &str) -> SyncResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| SyncError::filesystem(path, e))
}
