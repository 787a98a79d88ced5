//! services/cli/src/config.rs
//!
//! Defines the archiver's configuration and how it is loaded.
//!
//! Transport and engine settings come from environment variables (a `.env`
//! file is honoured for local use); the run-specific choices come from the
//! command line, see [`Cli`].

use clap::{ArgAction, Parser, ValueEnum};
use leetcode_archive_core::catalog::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use leetcode_archive_core::writer::DEFAULT_TEMPLATE_LANGUAGE;
use leetcode_archive_core::LanguageTable;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

//=========================================================================================
// Environment Configuration
//=========================================================================================

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub graphql_url: String,
    /// Overrides the browser cookie lookup when set.
    pub session_token: Option<String>,
    pub log_level: Level,
    pub page_size: usize,
    pub max_pages: usize,
    pub template_language: String,
    pub languages: LanguageTable,
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory, but this is
    /// skipped in test builds so tests stay hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let graphql_url = lookup("LEETCODE_GRAPHQL_URL")
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());

        let session_token = lookup("LEETCODE_SESSION").filter(|v| !v.trim().is_empty());

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let page_size = parse_positive(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_pages = parse_positive(&lookup, "MAX_PAGES", DEFAULT_MAX_PAGES)?;
        let timeout_secs = parse_positive(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let template_language = lookup("TEMPLATE_LANGUAGE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_LANGUAGE.to_string());

        let mut languages = LanguageTable::default();
        if let Some(overrides) = lookup("LANGUAGE_EXTENSIONS") {
            for pair in overrides.split(',').filter(|p| !p.trim().is_empty()) {
                let (language, extension) = pair
                    .split_once('=')
                    .filter(|(l, e)| !l.trim().is_empty() && !e.trim().is_empty())
                    .ok_or_else(|| {
                        ConfigError::InvalidValue(
                            "LANGUAGE_EXTENSIONS".to_string(),
                            format!("'{}' is not of the form language=extension", pair.trim()),
                        )
                    })?;
                languages.insert(language, extension);
            }
        }

        Ok(Self {
            graphql_url,
            session_token,
            log_level,
            page_size,
            max_pages,
            template_language,
            languages,
            request_timeout: Duration::from_secs(timeout_secs as u64),
        })
    }
}

fn parse_positive<F>(lookup: &F, name: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::InvalidValue(
                name.to_string(),
                format!("'{}' is not a positive integer", raw),
            )),
        },
    }
}

//=========================================================================================
// Command Line
//=========================================================================================

/// Browsers whose cookie store can supply the LeetCode session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Browser {
    Chrome,
    Chromium,
    Brave,
    Edge,
    Firefox,
    Opera,
    Vivaldi,
    Librewolf,
}

/// Archive your LeetCode submissions into a local directory tree
#[derive(Parser, Debug)]
#[command(name = "leetcode-archive")]
#[command(about = "Archive LeetCode problems and submissions locally", long_about = None)]
pub struct Cli {
    /// Output directory for the archive
    #[arg(short, long, default_value = "leetcode")]
    pub output: PathBuf,

    /// Browser to read the LeetCode session cookie from
    #[arg(short, long, value_enum, default_value_t = Browser::Brave)]
    pub browser: Browser,

    /// Skip problems that already have a directory in the archive
    #[arg(long)]
    pub incremental: bool,

    /// Only archive accepted submissions
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub only_accepted: bool,

    /// With --incremental, only skip entries holding a README.md and a submissions directory
    #[arg(long)]
    pub verify: bool,

    /// Print the problems that would be archived and exit
    #[arg(long)]
    pub dry_run: bool,
}
