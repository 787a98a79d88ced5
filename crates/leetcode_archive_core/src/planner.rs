//! crates/leetcode_archive_core/src/planner.rs
//!
//! Decides which problems a run has to fetch.
//!
//! In incremental mode a problem counts as archived as soon as an entry with
//! its name exists under the archive root. A directory left half-written by
//! an interrupted run is therefore treated as complete and never repaired;
//! [`Completeness::Verified`] is the opt-in stricter check.

use crate::layout::{ArchiveLayout, STATEMENT_FILE, SUBMISSIONS_DIR};

/// How an existing archive entry is judged in incremental mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completeness {
    /// Any entry with the problem's name means it was archived.
    #[default]
    Presence,
    /// The entry must be a directory holding a statement file and a
    /// submissions directory.
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanOptions {
    pub incremental: bool,
    pub completeness: Completeness,
}

/// Returns the slugs to fetch, in the order given.
pub fn plan<'a, I>(slugs: I, layout: &ArchiveLayout, options: PlanOptions) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    slugs
        .into_iter()
        .filter(|slug| !options.incremental || !is_archived(layout, slug, options.completeness))
        .cloned()
        .collect()
}

fn is_archived(layout: &ArchiveLayout, slug: &str, completeness: Completeness) -> bool {
    let dir = layout.problem_dir(slug);
    match completeness {
        Completeness::Presence => dir.exists(),
        Completeness::Verified => {
            dir.is_dir() && dir.join(STATEMENT_FILE).is_file() && dir.join(SUBMISSIONS_DIR).is_dir()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn slugs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn incremental(completeness: Completeness) -> PlanOptions {
        PlanOptions {
            incremental: true,
            completeness,
        }
    }

    #[test]
    fn full_sync_returns_every_slug_in_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        let layout = ArchiveLayout::new(temp.path());

        let planned = plan(&slugs(&["c", "b", "a"]), &layout, PlanOptions::default());

        assert_eq!(planned, slugs(&["c", "b", "a"]));
    }

    #[test]
    fn empty_root_includes_every_slug() {
        let temp = TempDir::new().unwrap();
        let layout = ArchiveLayout::new(temp.path().join("not-created-yet"));

        let planned = plan(&slugs(&["a", "b"]), &layout, incremental(Completeness::Presence));

        assert_eq!(planned, slugs(&["a", "b"]));
    }

    #[test]
    fn incremental_skips_existing_entries_on_every_run() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("s").join("submissions")).unwrap();
        fs::write(temp.path().join("s").join("README.md"), "# S").unwrap();
        let layout = ArchiveLayout::new(temp.path());
        let known = slugs(&["r", "s", "t"]);

        let first = plan(&known, &layout, incremental(Completeness::Presence));
        let second = plan(&known, &layout, incremental(Completeness::Presence));

        assert_eq!(first, slugs(&["r", "t"]));
        assert_eq!(first, second);
    }

    #[test]
    fn presence_treats_a_partial_directory_as_archived() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("half")).unwrap();
        let layout = ArchiveLayout::new(temp.path());

        let planned = plan(&slugs(&["half"]), &layout, incremental(Completeness::Presence));

        assert!(planned.is_empty());
    }

    #[test]
    fn verified_mode_refetches_incomplete_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("half")).unwrap();
        fs::write(temp.path().join("file-only"), "x").unwrap();
        fs::create_dir_all(temp.path().join("done").join("submissions")).unwrap();
        fs::write(temp.path().join("done").join("README.md"), "# Done").unwrap();
        let layout = ArchiveLayout::new(temp.path());

        let planned = plan(
            &slugs(&["half", "file-only", "done"]),
            &layout,
            incremental(Completeness::Verified),
        );

        assert_eq!(planned, slugs(&["half", "file-only"]));
    }
}
