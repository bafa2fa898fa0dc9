//! End-to-end tests for the manual over a writable directory and overlay roots.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use manual_config::Config;
use manual_index::{IncludeDirectories, Manual, ManualError};
use manual_page::Page;

/// Temporary manual layout with a writable directory and two overlay roots.
struct TestEnv {
    /// Backing temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().unwrap(),
        };
        for dir in ["data", "high", "low"] {
            fs::create_dir_all(env.dir(dir)).unwrap();
        }
        env
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Writes a file below the temporary root.
    fn write(&self, rel_path: &str, content: &str) {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// A manual over `data`, with `high` and `low` as overlay roots.
    fn manual(&self, path: Option<&str>) -> Manual {
        let overlay = IncludeDirectories::new([self.dir("high"), self.dir("low")]);
        Manual::new(self.dir("data"), Some(Box::new(overlay)), path)
    }

    /// A manual over `data` alone.
    fn plain_manual(&self) -> Manual {
        Manual::new(self.dir("data"), None, None)
    }
}

/// Page names, in order.
fn names(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(Page::name).collect()
}

#[test]
fn test_index_covers_every_root() {
    let env = TestEnv::new();
    env.write("data/Home.md", "home");
    env.write("high/admin/Setup.md", "setup");
    env.write("low/admin/users/Roles.md", "roles");
    env.write("low/Home.md", "old home");
    env.write("low/notes.txt", "ignored");

    let manual = env.manual(None);
    let index = manual.index();

    assert_eq!(index.len(), 3);
    assert!(manual.has_page("Home", "/"));
    assert!(manual.has_page("Setup", "admin"));
    assert!(manual.has_page("Roles", "/admin/users/"));
    assert!(!manual.has_page("notes", "/"));
    assert_eq!(index.names(), vec!["Home", "Roles", "Setup"]);
    assert!(index.iter().all(|(_, _, entry)| !entry.is_loaded()));
}

#[test]
fn test_sub_path_scopes_overlay_roots() {
    let env = TestEnv::new();
    env.write("high/manual/Scoped.md", "in scope");
    env.write("high/Outside.md", "out of scope");
    env.write("data/Local.md", "local");

    env.write("data/manual/Nested.md", "writable, not scoped");

    let mut manual = env.manual(Some("manual/"));

    assert!(manual.has_page("Scoped", "/"));
    assert!(manual.has_page("Local", "/"));
    assert!(!manual.has_page("Outside", "/"));
    assert!(manual.has_page("Nested", "/manual/"));
    assert!(!manual.has_page("Nested", "/"));

    let page = manual.get_page("Scoped", "/").unwrap().unwrap();
    assert_eq!(page.content(), "in scope");
}

#[test]
fn test_get_page_prefers_writable_directory() {
    let env = TestEnv::new();
    env.write("data/Home.md", "edited");
    env.write("high/Home.md", "high");
    env.write("low/Home.md", "low");

    let mut manual = env.manual(None);
    let page = manual.get_page("Home", "/").unwrap().unwrap();
    assert_eq!(page.content(), "edited");
}

#[test]
fn test_get_page_falls_back_in_overlay_order() {
    let env = TestEnv::new();
    env.write("high/guide/Install.md", "high");
    env.write("low/guide/Install.md", "low");
    env.write("low/guide/Upgrade.md", "low only");

    let mut manual = env.manual(None);

    let install = manual.get_page("Install", "guide").unwrap().unwrap();
    assert_eq!(install.content(), "high");
    assert_eq!(install.path(), "/guide/");

    let upgrade = manual.get_page("Upgrade", "/guide/").unwrap().unwrap();
    assert_eq!(upgrade.content(), "low only");
}

#[test]
fn test_get_page_missing() {
    let env = TestEnv::new();
    env.write("high/Only+Overlay.md", "x");

    let mut manual = env.manual(None);
    assert!(manual.get_page("", "/").unwrap().is_none());
    assert!(manual.get_page("Missing", "/").unwrap().is_none());

    let mut plain = env.plain_manual();
    assert!(plain.get_page("Only+Overlay", "/").unwrap().is_none());
}

#[test]
fn test_get_page_decodes_title_and_memoizes() {
    let env = TestEnv::new();
    env.write("data/Getting+Started.md", "# Welcome");

    let mut manual = env.plain_manual();
    let page = manual.get_page("Getting+Started", "/").unwrap().unwrap();

    assert_eq!(page.title(), "Getting Started");
    assert_eq!(page.name(), "Getting+Started");
    assert!(page.date_modified().is_some());

    let entry = manual.index().get("/", "Getting+Started").unwrap();
    assert_eq!(entry.page(), Some(&page));
}

#[test]
fn test_save_then_get_round_trip() {
    let env = TestEnv::new();
    let mut manual = env.plain_manual();

    let page = Page::new("Release Notes")
        .with_path("changes/2024")
        .with_content("# Notes\n\nEverything changed.\n");
    manual.save_page(&page).unwrap();

    assert!(env.dir("data/changes/2024/Release+Notes.md").is_file());

    let loaded = manual
        .get_page(page.name(), page.path())
        .unwrap()
        .unwrap();
    assert_eq!(loaded.content(), page.content());
    assert_eq!(loaded.title(), "Release Notes");
}

#[test]
fn test_save_does_not_update_index_until_reindex() {
    let env = TestEnv::new();
    let mut manual = env.plain_manual();

    manual.save_page(&Page::new("Fresh").with_content("new")).unwrap();
    assert!(!manual.has_page("Fresh", "/"));

    manual.reindex();
    assert!(manual.has_page("Fresh", "/"));
}

#[test]
fn test_save_overwrites_writable_copy_only() {
    let env = TestEnv::new();
    env.write("high/Home.md", "shipped");

    let mut manual = env.manual(None);
    manual
        .save_page(&Page::new("Home").with_content("customized"))
        .unwrap();

    assert_eq!(fs::read_to_string(env.dir("high/Home.md")).unwrap(), "shipped");
    let page = manual.get_page("Home", "/").unwrap().unwrap();
    assert_eq!(page.content(), "customized");
}

#[test]
fn test_save_into_file_path_fails() {
    let env = TestEnv::new();
    env.write("data/blocked", "a file where a directory should be");

    let manual = env.plain_manual();
    let page = Page::new("Inner").with_path("blocked").with_content("x");

    let err = manual.save_page(&page).unwrap_err();
    assert!(matches!(err, ManualError::CreateDirectory { .. }));
}

#[test]
fn test_search_ranks_ascending() {
    let env = TestEnv::new();
    env.write("data/A.md", "alpha beta");
    env.write("data/B.md", "alpha");
    env.write("data/C.md", "gamma");

    let mut manual = env.plain_manual();
    let results = manual.search_pages("alpha beta").unwrap();

    assert_eq!(names(&results), vec!["B", "A"]);
}

#[test]
fn test_search_token_credit_accumulates() {
    let env = TestEnv::new();
    env.write("data/One.md", "red");
    env.write("data/Two.md", "red and blue");
    env.write("data/Three.md", "blue green red");
    env.write("data/None.md", "yellow");

    let mut manual = env.plain_manual();
    let results = manual.search_pages("red blue green").unwrap();

    // 25 per token; Three has all three tokens but not the contiguous query.
    assert_eq!(names(&results), vec!["One", "Two", "Three"]);
}

#[test]
fn test_search_repeated_spaces_are_one_separator() {
    let env = TestEnv::new();
    env.write("data/A.md", "alpha");
    env.write("data/B.md", "beta and alpha");
    env.write("data/C.md", "gamma");

    let mut manual = env.plain_manual();
    let results = manual.search_pages("alpha  beta").unwrap();

    assert_eq!(names(&results), vec!["A", "B"]);
}

#[test]
fn test_search_survives_invalid_utf8_page() {
    let env = TestEnv::new();
    env.write("data/Good.md", "alpha beta");
    fs::write(env.dir("data/Latin.md"), b"caf\xe9 notes").unwrap();

    let mut manual = env.plain_manual();
    let results = manual.search_pages("alpha").unwrap();
    assert_eq!(names(&results), vec!["Good"]);

    let latin = manual.get_page("Latin", "/").unwrap().unwrap();
    assert_eq!(latin.content(), "caf\u{fffd} notes");
}

#[test]
fn test_search_single_token_needs_literal_match() {
    let env = TestEnv::new();
    env.write("data/Match.md", "the alphabet");
    env.write("data/Miss.md", "Alpha");

    let mut manual = env.plain_manual();
    let results = manual.search_pages("  alpha ").unwrap();

    assert_eq!(names(&results), vec!["Match"]);
}

#[test]
fn test_search_empty_query() {
    let env = TestEnv::new();
    env.write("data/A.md", "anything");

    let mut manual = env.plain_manual();
    assert!(manual.search_pages("").unwrap().is_empty());
    assert!(manual.search_pages("   ").unwrap().is_empty());
}

#[test]
fn test_search_loads_pages() {
    let env = TestEnv::new();
    env.write("data/A.md", "alpha");
    env.write("high/docs/B.md", "beta");

    let mut manual = env.manual(None);
    manual.search_pages("nothing matches").unwrap();

    assert!(manual.index().iter().all(|(_, _, entry)| entry.is_loaded()));
}

#[test]
fn test_search_uses_memoized_content() {
    let env = TestEnv::new();
    env.write("data/A.md", "before");

    let mut manual = env.plain_manual();
    manual.get_page("A", "/").unwrap();
    env.write("data/A.md", "after");

    assert_eq!(names(&manual.search_pages("before").unwrap()), vec!["A"]);
    assert!(manual.search_pages("after").unwrap().is_empty());
}

#[test]
fn test_reference_merges_and_sorts() {
    let env = TestEnv::new();
    env.write("high/manual/terms.ref", "zeta z\n");
    env.write("low/manual/terms.ref", "alpha a\nmalformed\n\n");

    let manual = env.manual(Some("manual"));
    let reference = manual.reference("terms").unwrap();

    let terms: Vec<_> = reference
        .iter()
        .map(|(term, description)| (term.as_str(), description.as_str()))
        .collect();
    assert_eq!(terms, vec![("alpha", "a"), ("zeta", "z")]);
}

#[test]
fn test_reference_later_roots_replace_terms() {
    let env = TestEnv::new();
    env.write("high/terms.ref", "shared from high\n");
    env.write("low/terms.ref", "shared from low\n");

    let manual = env.manual(None);
    let reference = manual.reference("terms").unwrap();
    assert_eq!(reference.get("shared").map(String::as_str), Some("from low"));
}

#[test]
fn test_reference_without_overlay_is_empty() {
    let env = TestEnv::new();
    env.write("data/terms.ref", "alpha a\n");

    let manual = env.plain_manual();
    assert!(manual.reference("terms").unwrap().is_empty());
    assert!(env.manual(None).reference("missing").unwrap().is_empty());
}

#[test]
fn test_from_config() {
    let env = TestEnv::new();
    env.write("high/Shipped.md", "x");

    let config = Config {
        directory: Some(env.dir("data")),
        include: vec![env.dir("high")],
        ..Config::default()
    };
    let manual = Manual::from_config(&config).unwrap();
    assert_eq!(manual.directory(), env.dir("data").as_path());
    assert!(manual.has_page("Shipped", "/"));

    let err = Manual::from_config(&Config::default()).err().unwrap();
    assert!(matches!(err, ManualError::NoDirectory));
}

#[test]
fn test_missing_roots_are_skipped() {
    let env = TestEnv::new();
    let overlay = IncludeDirectories::new([Path::new("/nonexistent/root")]);
    let manual = Manual::new(env.dir("missing-data"), Some(Box::new(overlay)), None);
    assert!(manual.index().is_empty());
}
