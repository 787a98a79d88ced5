//! crates/leetcode_archive_core/src/domain.rs
//!
//! Defines the pure, core data structures for the archiver.
//! These structs are independent of the GraphQL wire format and of the
//! on-disk layout.

use std::fmt;
use std::str::FromStr;

/// One historical submission as reported by the remote submission list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Opaque identifier, used to fetch the submitted source.
    pub id: String,
    pub problem_slug: String,
    /// Language label as reported by the platform (e.g. `python3`, `cpp`).
    pub language: String,
    pub status: SubmissionStatus,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

/// Judge verdict of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    OutputLimitExceeded,
    RuntimeError,
    CompileError,
    /// Any verdict label the platform reports that is not listed above.
    Other(String),
}

impl SubmissionStatus {
    /// Parses the platform's display label. Unknown labels are kept verbatim.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Accepted" => Self::Accepted,
            "Wrong Answer" => Self::WrongAnswer,
            "Time Limit Exceeded" => Self::TimeLimitExceeded,
            "Memory Limit Exceeded" => Self::MemoryLimitExceeded,
            "Output Limit Exceeded" => Self::OutputLimitExceeded,
            "Runtime Error" => Self::RuntimeError,
            "Compile Error" => Self::CompileError,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::MemoryLimitExceeded => "Memory Limit Exceeded",
            Self::OutputLimitExceeded => "Output Limit Exceeded",
            Self::RuntimeError => "Runtime Error",
            Self::CompileError => "Compile Error",
            Self::Other(label) => label,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{}'", s)),
        }
    }
}

/// A starter code snippet offered by the platform for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterTemplate {
    pub language: String,
    pub code: String,
}

/// Per-problem metadata, fetched once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemMetadata {
    pub slug: String,
    pub title: String,
    /// `None` for problems whose statement is not visible to the session.
    pub statement_html: Option<String>,
    pub difficulty: Difficulty,
    pub starter_templates: Vec<StarterTemplate>,
}

/// Summary of one successfully archived problem, used to build the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncIndexEntry {
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
}

// Opaque session credential. Debug output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}
