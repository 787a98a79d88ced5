//! crates/leetcode_archive_core/src/index.rs
//!
//! Builds the top-level `README.md` listing every problem archived in a run.

use crate::domain::{Difficulty, SyncIndexEntry};
use crate::error::SyncResult;
use crate::layout::{sanitize_segment, ArchiveLayout};
use crate::writer::{create_dir, write_file};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use std::fmt::Write;
use std::path::PathBuf;

/// Renders the index document. Rows are sorted by title; ties keep the
/// order of `entries`.
pub fn build_index(entries: &[SyncIndexEntry], generated_at: DateTime<Utc>) -> String {
    let mut counts: HashMap<Difficulty, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.difficulty).or_insert(0) += 1;
    }

    let mut rows: Vec<&SyncIndexEntry> = entries.iter().collect();
    rows.sort_by(|a, b| a.title.cmp(&b.title));

    let mut doc = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(doc, "# LeetCode Archive\n");
    let _ = writeln!(
        doc,
        "Generated at {}.\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let _ = writeln!(doc, "Total problems: {}\n", entries.len());

    let _ = writeln!(doc, "| Difficulty | Count |");
    let _ = writeln!(doc, "|------------|-------|");
    for difficulty in Difficulty::ALL {
        let count = counts.get(&difficulty).copied().unwrap_or(0);
        let _ = writeln!(doc, "| {} | {} |", difficulty, count);
    }

    let _ = writeln!(doc, "\n| # | Title | Difficulty |");
    let _ = writeln!(doc, "|---|-------|------------|");
    for (number, entry) in rows.iter().enumerate() {
        let _ = writeln!(
            doc,
            "| {} | [{}]({}/) | {} |",
            number + 1,
            entry.title.replace('|', "\\|"),
            sanitize_segment(&entry.slug),
            entry.difficulty
        );
    }
    doc
}

/// Replaces `<root>/README.md` with the index for `entries`.
pub async fn write_index(
    layout: &ArchiveLayout,
    entries: &[SyncIndexEntry],
    generated_at: DateTime<Utc>,
) -> SyncResult<PathBuf> {
    create_dir(layout.root()).await?;
    let path = layout.index_path();
    write_file(&path, &build_index(entries, generated_at)).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn entry(slug: &str, title: &str, difficulty: Difficulty) -> SyncIndexEntry {
        SyncIndexEntry {
            slug: slug.to_string(),
            title: title.to_string(),
            difficulty,
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn table_rows(doc: &str) -> Vec<&str> {
        doc.lines()
            .filter(|line| line.starts_with("| ") && line.contains("]("))
            .collect()
    }

    #[test]
    fn counts_difficulties_and_defaults_missing_ones_to_zero() {
        let entries = vec![
            entry("a", "Alpha", Difficulty::Easy),
            entry("b", "Beta", Difficulty::Easy),
            entry("c", "Gamma", Difficulty::Hard),
        ];

        let doc = build_index(&entries, at());

        assert!(doc.starts_with("# LeetCode Archive\n"));
        assert!(doc.contains("Generated at 2024-01-02T03:04:05Z."));
        assert!(doc.contains("Total problems: 3"));
        assert!(doc.contains("| Easy | 2 |"));
        assert!(doc.contains("| Medium | 0 |"));
        assert!(doc.contains("| Hard | 1 |"));
    }

    #[test]
    fn rows_are_sorted_by_title_and_numbered_from_one() {
        let entries = vec![
            entry("zeta", "Zeta", Difficulty::Hard),
            entry("dup-1", "Dup", Difficulty::Easy),
            entry("alpha", "Alpha", Difficulty::Medium),
            entry("dup-2", "Dup", Difficulty::Medium),
        ];

        let doc = build_index(&entries, at());

        assert_eq!(
            table_rows(&doc),
            vec![
                "| 1 | [Alpha](alpha/) | Medium |",
                "| 2 | [Dup](dup-1/) | Easy |",
                "| 3 | [Dup](dup-2/) | Medium |",
                "| 4 | [Zeta](zeta/) | Hard |",
            ]
        );
    }

    #[test]
    fn pipes_in_titles_are_escaped() {
        let doc = build_index(&[entry("x", "A | B", Difficulty::Easy)], at());
        assert!(doc.contains("[A \\| B](x/)"));
    }

    #[test]
    fn empty_run_still_produces_a_document() {
        let doc = build_index(&[], at());
        assert!(doc.contains("Total problems: 0"));
        assert!(table_rows(&doc).is_empty());
    }

    #[tokio::test]
    async fn rebuilding_replaces_the_previous_index() {
        let temp = TempDir::new().unwrap();
        let layout = ArchiveLayout::new(temp.path().join("archive"));

        write_index(&layout, &[entry("old", "Old Problem", Difficulty::Hard)], at())
            .await
            .unwrap();
        let path = write_index(&layout, &[entry("new", "New Problem", Difficulty::Easy)], at())
            .await
            .unwrap();

        let doc = std::fs::read_to_string(path).unwrap();
        assert!(doc.contains("New Problem"));
        assert!(!doc.contains("Old Problem"));
        assert!(doc.contains("Total problems: 1"));
        assert!(doc.contains("| Hard | 0 |"));
    }
}
