//! In-memory fakes of the core ports, shared by the unit tests.

use crate::domain::{Difficulty, ProblemMetadata, StarterTemplate, SubmissionRecord, SubmissionStatus};
use crate::ports::{CatalogService, PortError, PortResult, StatementRenderer, SubmissionPage};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn submission(id: &str, slug: &str, language: &str, status: &str, timestamp: i64) -> SubmissionRecord {
    SubmissionRecord {
        id: id.to_string(),
        problem_slug: slug.to_string(),
        language: language.to_string(),
        status: SubmissionStatus::from_label(status),
        timestamp,
    }
}

pub fn problem(slug: &str, title: &str, difficulty: Difficulty) -> ProblemMetadata {
    ProblemMetadata {
        slug: slug.to_string(),
        title: title.to_string(),
        statement_html: Some(format!("<p>{} statement</p>", title)),
        difficulty,
        starter_templates: vec![StarterTemplate {
            language: "Python3".to_string(),
            code: "class Solution:\n    pass\n".to_string(),
        }],
    }
}

/// A scripted remote catalog. Pages are cut from `submissions` by offset.
#[derive(Default)]
pub struct FakeCatalog {
    pub submissions: Vec<SubmissionRecord>,
    pub problems: HashMap<String, ProblemMetadata>,
    pub code: HashMap<String, String>,
    pub failing_problems: HashSet<String>,
    pub failing_code: HashSet<String>,
    /// Report `has_next` forever, like a broken server.
    pub never_ends: bool,
    pub page_requests: Mutex<Vec<(usize, usize)>>,
    pub problem_requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_submissions(submissions: Vec<SubmissionRecord>) -> Self {
        Self {
            submissions,
            ..Default::default()
        }
    }

    pub fn add_problem(&mut self, metadata: ProblemMetadata) {
        self.problems.insert(metadata.slug.clone(), metadata);
    }

    pub fn add_code(&mut self, id: &str, code: &str) {
        self.code.insert(id.to_string(), code.to_string());
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn fetch_submission_page(&self, offset: usize, limit: usize) -> PortResult<SubmissionPage> {
        self.page_requests.lock().unwrap().push((offset, limit));
        let start = offset.min(self.submissions.len());
        let end = (offset + limit).min(self.submissions.len());
        Ok(SubmissionPage {
            submissions: self.submissions[start..end].to_vec(),
            has_next: self.never_ends || end < self.submissions.len(),
        })
    }

    async fn fetch_problem(&self, slug: &str) -> PortResult<ProblemMetadata> {
        self.problem_requests.lock().unwrap().push(slug.to_string());
        if self.failing_problems.contains(slug) {
            return Err(PortError::Query {
                target: slug.to_string(),
                body: "{\"errors\":[{\"message\":\"boom\"}]}".to_string(),
            });
        }
        self.problems
            .get(slug)
            .cloned()
            .ok_or_else(|| PortError::NotFound(slug.to_string()))
    }

    async fn fetch_submission_code(&self, submission_id: &str) -> PortResult<String> {
        if self.failing_code.contains(submission_id) {
            return Err(PortError::Query {
                target: submission_id.to_string(),
                body: "internal error".to_string(),
            });
        }
        Ok(self
            .code
            .get(submission_id)
            .cloned()
            .unwrap_or_else(|| format!("// submission {}\n", submission_id)))
    }
}

/// Strips nothing; statements come back exactly as given.
pub struct PassthroughRenderer;

impl StatementRenderer for PassthroughRenderer {
    fn render_to_plain_text(&self, html: &str) -> PortResult<String> {
        Ok(html.to_string())
    }
}
