//! services/cli/src/adapters/graphql.rs
//!
//! This module contains the adapter for LeetCode's GraphQL endpoint.
//! It implements the `CatalogService` port from the `core` crate.

use async_trait::async_trait;
use leetcode_archive_core::domain::{
    Difficulty, ProblemMetadata, SessionToken, StarterTemplate, SubmissionRecord, SubmissionStatus,
};
use leetcode_archive_core::ports::{CatalogService, PortError, PortResult, SubmissionPage};
use reqwest::header::{CONTENT_TYPE, COOKIE, REFERER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tracing::debug;

const REFERER_URL: &str = "https://leetcode.com/problemset/all/";

const SUBMISSION_LIST_QUERY: &str = r#"
query mySubmissions($offset: Int!, $limit: Int!) {
  submissionList(offset: $offset, limit: $limit) {
    submissions {
      id
      titleSlug
      lang
      statusDisplay
      timestamp
    }
    hasNext
  }
}
"#;

const QUESTION_QUERY: &str = r#"
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    title
    titleSlug
    content
    difficulty
    codeSnippets {
      lang
      code
    }
  }
}
"#;

const SUBMISSION_DETAILS_QUERY: &str = r#"
query submissionDetails($submissionId: Int!) {
  submissionDetails(submissionId: $submissionId) {
    code
  }
}
"#;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CatalogService` against the LeetCode GraphQL API.
#[derive(Clone)]
pub struct LeetCodeGraphQlAdapter {
    client: Client,
    endpoint: String,
    session: SessionToken,
}

impl LeetCodeGraphQlAdapter {
    /// Creates a new `LeetCodeGraphQlAdapter`.
    pub fn new(client: Client, endpoint: impl Into<String>, session: SessionToken) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            session,
        }
    }

    /// Posts one query and decodes its `data` member.
    ///
    /// Transport failures, non-2xx statuses, GraphQL `errors` and undecodable
    /// bodies all become `PortError::Query` carrying `target` and the raw body.
    async fn execute<T: DeserializeOwned>(
        &self,
        target: &str,
        query: &str,
        variables: Value,
    ) -> PortResult<T> {
        let payload = GraphQlRequest { query, variables };
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, REFERER_URL)
            .header(COOKIE, format!("LEETCODE_SESSION={};", self.session.expose()))
            .json(&payload)
            .send()
            .await
            .map_err(|e| query_error(target, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| query_error(target, e.to_string()))?;
        debug!(query_target = target, status = status.as_u16(), bytes = body.len(), "GraphQL response");

        decode_http_response(target, status, &body)
    }
}

//=========================================================================================
// Wire Format
//=========================================================================================

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// LeetCode sends ids and timestamps as strings in some responses and as
/// numbers in others.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionListData {
    submission_list: SubmissionListDump,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionListDump {
    #[serde(default)]
    submissions: Vec<SubmissionDump>,
    has_next: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionDump {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    title_slug: String,
    lang: String,
    status_display: String,
    #[serde(deserialize_with = "string_or_number")]
    timestamp: String,
}

impl SubmissionDump {
    fn to_domain(self) -> Result<SubmissionRecord, String> {
        let timestamp = self
            .timestamp
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid timestamp '{}'", self.timestamp))?;
        Ok(SubmissionRecord {
            id: self.id,
            problem_slug: self.title_slug,
            language: self.lang,
            status: SubmissionStatus::from_label(&self.status_display),
            timestamp,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<QuestionDump>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionDump {
    title: String,
    title_slug: Option<String>,
    content: Option<String>,
    difficulty: String,
    #[serde(default)]
    code_snippets: Option<Vec<SnippetDump>>,
}

#[derive(Debug, Deserialize)]
struct SnippetDump {
    lang: String,
    code: String,
}

impl QuestionDump {
    fn to_domain(self, requested_slug: &str) -> Result<ProblemMetadata, String> {
        let difficulty = self.difficulty.parse::<Difficulty>()?;
        Ok(ProblemMetadata {
            slug: self.title_slug.unwrap_or_else(|| requested_slug.to_string()),
            title: self.title,
            statement_html: self.content,
            difficulty,
            starter_templates: self
                .code_snippets
                .unwrap_or_default()
                .into_iter()
                .map(|s| StarterTemplate {
                    language: s.lang,
                    code: s.code,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionDetailsData {
    submission_details: Option<SubmissionDetailsDump>,
}

#[derive(Debug, Deserialize)]
struct SubmissionDetailsDump {
    code: String,
}

fn query_error(target: &str, body: impl Into<String>) -> PortError {
    PortError::Query {
        target: target.to_string(),
        body: body.into(),
    }
}

/// Any non-2xx status, including 401/403 from an expired session, keeps the
/// target and the raw body.
fn decode_http_response<T: DeserializeOwned>(
    target: &str,
    status: StatusCode,
    body: &str,
) -> PortResult<T> {
    if !status.is_success() {
        return Err(query_error(target, body));
    }
    decode_response(target, body)
}

fn decode_response<T: DeserializeOwned>(target: &str, body: &str) -> PortResult<T> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|_| query_error(target, body))?;
    if envelope.errors.as_ref().is_some_and(|errors| !errors.is_empty()) {
        return Err(query_error(target, body));
    }
    envelope.data.ok_or_else(|| query_error(target, body))
}

fn decode_submission_page(data: SubmissionListData) -> PortResult<SubmissionPage> {
    let submissions = data
        .submission_list
        .submissions
        .into_iter()
        .map(|dump| {
            let id = dump.id.clone();
            dump.to_domain().map_err(|reason| query_error(&id, reason))
        })
        .collect::<PortResult<Vec<_>>>()?;
    Ok(SubmissionPage {
        submissions,
        has_next: data.submission_list.has_next,
    })
}

//=========================================================================================
// `CatalogService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogService for LeetCodeGraphQlAdapter {
    async fn fetch_submission_page(&self, offset: usize, limit: usize) -> PortResult<SubmissionPage> {
        let target = format!("submissionList@{}", offset);
        let data: SubmissionListData = self
            .execute(
                &target,
                SUBMISSION_LIST_QUERY,
                json!({ "offset": offset, "limit": limit }),
            )
            .await?;
        decode_submission_page(data)
    }

    async fn fetch_problem(&self, slug: &str) -> PortResult<ProblemMetadata> {
        let data: QuestionData = self
            .execute(slug, QUESTION_QUERY, json!({ "titleSlug": slug }))
            .await?;
        let question = data
            .question
            .ok_or_else(|| PortError::NotFound(format!("Problem {} not found", slug)))?;
        question
            .to_domain(slug)
            .map_err(|reason| query_error(slug, reason))
    }

    async fn fetch_submission_code(&self, submission_id: &str) -> PortResult<String> {
        let numeric_id = submission_id
            .parse::<i64>()
            .map_err(|_| query_error(submission_id, "submission id is not numeric"))?;
        let data: SubmissionDetailsData = self
            .execute(
                submission_id,
                SUBMISSION_DETAILS_QUERY,
                json!({ "submissionId": numeric_id }),
            )
            .await?;
        data.submission_details
            .map(|details| details.code)
            .ok_or_else(|| PortError::NotFound(format!("Submission {} not found", submission_id)))
    }
}
