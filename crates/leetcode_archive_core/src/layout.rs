//! crates/leetcode_archive_core/src/layout.rs
//!
//! The on-disk layout of the archive:
//!
//! ```text
//! <root>/README.md
//! <root>/<slug>/README.md
//! <root>/<slug>/solutiontemplate.<ext>
//! <root>/<slug>/submissions/<language>/<timestamp>_<status>.<ext>
//! ```
//!
//! Every path segment taken from remote data goes through [`sanitize_segment`].

use crate::domain::SubmissionRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "README.md";
pub const STATEMENT_FILE: &str = "README.md";
pub const TEMPLATE_STEM: &str = "solutiontemplate";
pub const SUBMISSIONS_DIR: &str = "submissions";

const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    ("python", "py"),
    ("python3", "py"),
    ("pythondata", "py"),
    ("pandas", "py"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("java", "java"),
    ("javascript", "js"),
    ("typescript", "ts"),
    ("csharp", "cs"),
    ("golang", "go"),
    ("rust", "rs"),
    ("kotlin", "kt"),
    ("swift", "swift"),
    ("ruby", "rb"),
    ("scala", "scala"),
    ("php", "php"),
    ("dart", "dart"),
    ("racket", "rkt"),
    ("erlang", "erl"),
    ("elixir", "ex"),
    ("mysql", "sql"),
    ("mssql", "sql"),
    ("oraclesql", "sql"),
    ("postgresql", "sql"),
    ("bash", "sh"),
];

/// Maps a language label to a file extension. Lookups ignore case.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    extensions: HashMap<String, String>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        let extensions = DEFAULT_EXTENSIONS
            .iter()
            .map(|(lang, ext)| (lang.to_string(), ext.to_string()))
            .collect();
        Self { extensions }
    }
}

impl LanguageTable {
    /// Adds or replaces the extension for `language`.
    pub fn insert(&mut self, language: &str, extension: &str) {
        self.extensions.insert(
            language.trim().to_lowercase(),
            extension.trim().trim_start_matches('.').to_string(),
        );
    }

    /// Unmapped languages fall back to their own lowercased name.
    pub fn extension_for(&self, language: &str) -> String {
        let key = language.trim().to_lowercase();
        match self.extensions.get(&key) {
            Some(ext) => ext.clone(),
            None => sanitize_segment(&key),
        }
    }
}

/// Makes a remote string safe to use as a single path segment.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, leading dots are removed
/// and an empty result becomes `_`.
pub fn sanitize_segment(raw: &str) -> String {
    let replaced: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = replaced.trim_start_matches('.');
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<timestamp>_<status>.<ext>`, spaces in the status label replaced by `_`.
pub fn submission_file_name(record: &SubmissionRecord, extension: &str) -> String {
    let status = record.status.label().replace(' ', "_");
    format!(
        "{}_{}.{}",
        record.timestamp,
        sanitize_segment(&status),
        extension
    )
}

/// Resolves archive paths under one root directory.
#[derive(Debug, Clone)]
pub struct ArchiveLayout {
    root: PathBuf,
}

impl ArchiveLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn problem_dir(&self, slug: &str) -> PathBuf {
        self.root.join(sanitize_segment(slug))
    }

    pub fn statement_path(&self, slug: &str) -> PathBuf {
        self.problem_dir(slug).join(STATEMENT_FILE)
    }

    pub fn template_path(&self, slug: &str, extension: &str) -> PathBuf {
        self.problem_dir(slug)
            .join(format!("{}.{}", TEMPLATE_STEM, extension))
    }

    pub fn submissions_dir(&self, slug: &str) -> PathBuf {
        self.problem_dir(slug).join(SUBMISSIONS_DIR)
    }

    pub fn language_dir(&self, slug: &str, language: &str) -> PathBuf {
        self.submissions_dir(slug).join(sanitize_segment(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::submission;

    #[test]
    fn known_languages_use_the_table() {
        let table = LanguageTable::default();
        assert_eq!(table.extension_for("python3"), "py");
        assert_eq!(table.extension_for("Python3"), "py");
        assert_eq!(table.extension_for("cpp"), "cpp");
        assert_eq!(table.extension_for("golang"), "go");
    }

    #[test]
    fn unmapped_language_falls_back_to_its_lowercased_name() {
        let table = LanguageTable::default();
        assert_eq!(table.extension_for("Cobol"), "cobol");
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut table = LanguageTable::default();
        table.insert("Kotlin", ".kts");
        assert_eq!(table.extension_for("kotlin"), "kts");
    }

    #[test]
    fn sanitize_keeps_ordinary_segments() {
        assert_eq!(sanitize_segment("two-sum"), "two-sum");
        assert_eq!(sanitize_segment("python3"), "python3");
    }

    #[test]
    fn sanitize_neutralises_separators_and_dot_prefixes() {
        assert_eq!(sanitize_segment("../etc/passwd"), "_etc_passwd");
        assert_eq!(sanitize_segment("C#"), "C_");
        assert_eq!(sanitize_segment("..."), "_");
        assert_eq!(sanitize_segment("  "), "_");
    }

    #[test]
    fn submission_file_names_replace_spaces_in_status() {
        let record = submission("9", "two-sum", "cpp", "Wrong Answer", 1700000000);
        assert_eq!(submission_file_name(&record, "cpp"), "1700000000_Wrong_Answer.cpp");
    }

    #[test]
    fn layout_paths_follow_the_archive_contract() {
        let layout = ArchiveLayout::new("leetcode");
        assert_eq!(layout.index_path(), Path::new("leetcode/README.md"));
        assert_eq!(layout.statement_path("two-sum"), Path::new("leetcode/two-sum/README.md"));
        assert_eq!(
            layout.template_path("two-sum", "py"),
            Path::new("leetcode/two-sum/solutiontemplate.py")
        );
        assert_eq!(
            layout.language_dir("two-sum", "python3"),
            Path::new("leetcode/two-sum/submissions/python3")
        );
    }
}
