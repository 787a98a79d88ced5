//! crates/leetcode_archive_core/src/classifier.rs
//!
//! Groups the flat submission history by problem.

use crate::domain::SubmissionRecord;
use indexmap::IndexMap;

/// Submissions grouped by problem slug. Slugs keep first-appearance order and
/// each group keeps the order of the input sequence.
pub type ProblemGroups = IndexMap<String, Vec<SubmissionRecord>>;

pub fn classify(records: Vec<SubmissionRecord>, only_accepted: bool) -> ProblemGroups {
    let mut groups = ProblemGroups::new();
    for record in records {
        if only_accepted && !record.status.is_accepted() {
            continue;
        }
        groups
            .entry(record.problem_slug.clone())
            .or_default()
            .push(record);
    }
    groups
}
