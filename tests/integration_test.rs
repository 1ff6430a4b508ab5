//! Integration tests for loadr
//!
//! These tests verify end-to-end behavior by building temporary directory
//! trees and table-definition documents, then driving a full browser session
//! with scripted key events. No terminal is involved; the session state
//! machine is exercised exactly as the run loop would.

use loadr::browse::{BrowserSession, Key, Mode, Outcome, Step};
use loadr::preview::{PreviewGenerator, PreviewLimits};
use loadr::scan::{DirectoryCache, ScanOptions, SortKey};
use loadr::tables::TableMatcher;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a file under `root` with the given content
fn write_file(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Build a session over `root` with an empty matcher
fn session_over(root: &Path) -> BrowserSession {
    session_with_matcher(root, TableMatcher::empty())
}

fn session_with_matcher(root: &Path, matcher: TableMatcher) -> BrowserSession {
    BrowserSession::new(
        root,
        DirectoryCache::new(100),
        matcher,
        ScanOptions::default(),
        SortKey::Name,
        PreviewGenerator::new(PreviewLimits::default()),
    )
    .unwrap()
}

/// Feed keys to the session until one produces a terminal result
fn drive(session: &mut BrowserSession, keys: &[Key]) -> Option<Outcome> {
    for key in keys {
        if let Step::Done(outcome) = session.handle(*key) {
            return Some(outcome);
        }
    }
    None
}

/// Put the cursor on the named row, starting from the top
fn move_to(session: &mut BrowserSession, name: &str) {
    let rows = session.visible_rows();
    let target = rows
        .iter()
        .position(|r| r.name() == name)
        .unwrap_or_else(|| panic!("row {name} not found"));
    session.handle(Key::Home);
    for _ in 0..target {
        session.handle(Key::Down);
    }
}

#[test]
fn test_single_file_pick_returns_absolute_path() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "orders_2024-05.tsv", "id\tamount\n1\t10\n");

    let mut session = session_over(tree.path());
    move_to(&mut session, "orders_2024-05.tsv");
    let outcome = drive(&mut session, &[Key::Enter]).unwrap();

    match outcome {
        Outcome::Selected(paths) => {
            assert_eq!(paths.len(), 1);
            assert!(paths[0].is_absolute());
            assert!(paths[0].ends_with("orders_2024-05.tsv"));
        }
        Outcome::Cancelled => panic!("expected a selection"),
    }
}

#[test]
fn test_multi_select_across_directories() {
    let tree = TempDir::new().unwrap();
    let first = write_file(tree.path(), "first.tsv", "a\n");
    fs::create_dir(tree.path().join("sub")).unwrap();
    let second = write_file(&tree.path().join("sub"), "second.tsv", "b\n");

    let mut session = session_over(tree.path());

    // Select in the root, descend, confirm on a second file.
    move_to(&mut session, "first.tsv");
    session.handle(Key::Tab);
    move_to(&mut session, "sub");
    session.handle(Key::Enter);
    move_to(&mut session, "second.tsv");
    let outcome = drive(&mut session, &[Key::Enter]).unwrap();

    let first = fs::canonicalize(first).unwrap();
    let second = fs::canonicalize(second).unwrap();
    assert_eq!(outcome, Outcome::Selected(vec![first, second]));
}

#[test]
fn test_cancellation_is_distinct_from_empty_filter() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "data.tsv", "x\n");

    // A filter that matches nothing leaves the session interactive.
    let mut session = session_over(tree.path());
    assert!(drive(
        &mut session,
        &[
            Key::Char('/'),
            Key::Char('z'),
            Key::Char('z'),
            Key::Enter,
        ],
    )
    .is_none());
    assert_eq!(session.mode(), Mode::Browsing);

    // Quitting produces an explicit cancelled outcome.
    let outcome = drive(&mut session, &[Key::Char('q')]).unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
}

#[test]
fn test_search_then_pick_workflow() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "factLending_20240101-20240131.tsv", "x\n");
    write_file(tree.path(), "factTrading_20240101-20240131.tsv", "x\n");
    write_file(tree.path(), "orders_2024-05.tsv", "x\n");

    let mut session = session_over(tree.path());
    let keys: Vec<Key> = std::iter::once(Key::Char('/'))
        .chain("lending".chars().map(Key::Char))
        .chain([Key::Enter]) // commit filter, cursor at top
        .chain([Key::Down, Key::Enter]) // skip "..", confirm the only match
        .collect();

    let outcome = drive(&mut session, &keys).unwrap();
    match outcome {
        Outcome::Selected(paths) => {
            assert_eq!(paths.len(), 1);
            assert!(paths[0].ends_with("factLending_20240101-20240131.tsv"));
        }
        Outcome::Cancelled => panic!("expected a selection"),
    }
}

#[test]
fn test_table_matching_end_to_end() {
    let config = TempDir::new().unwrap();
    write_file(
        config.path(),
        "a_lending.toml",
        r#"
        [[tables]]
        pattern = "factLending_{date_range}.tsv"
        table = "FACT_LENDING"
        date_column = "AsOfDate"
        "#,
    );
    write_file(
        config.path(),
        "b_monthly.toml",
        r#"
        [[tables]]
        pattern = "factLending_{month}.tsv"
        table = "FACT_LENDING_MONTHLY"
        "#,
    );
    write_file(config.path(), "broken.toml", "[[tables]\nnot valid");

    let (matcher, warnings) = TableMatcher::load(config.path());

    // The malformed document is reported and skipped; the rest load.
    assert_eq!(warnings.len(), 1);
    assert_eq!(matcher.len(), 2);

    // Shape discrimination: the date-range file instantiates only the
    // date-range template, and vice versa.
    let range_matches = matcher.matches("factLending_20240101-20240131.tsv");
    assert_eq!(range_matches.len(), 1);
    assert_eq!(range_matches[0].table, "FACT_LENDING");

    let month_matches = matcher.matches("factLending_2024-01.tsv");
    assert_eq!(month_matches.len(), 1);
    assert_eq!(month_matches[0].table, "FACT_LENDING_MONTHLY");

    assert!(matcher.matches("unrelated.tsv").is_empty());
}

#[test]
fn test_session_annotates_highlighted_file_with_all_matches() {
    let config = TempDir::new().unwrap();
    write_file(
        config.path(),
        "one.toml",
        r#"
        [[tables]]
        pattern = "feed_{month}.tsv"
        table = "FEED_A"
        "#,
    );
    write_file(
        config.path(),
        "two.toml",
        r#"
        [[tables]]
        pattern = "feed_{month}.tsv"
        table = "FEED_B"
        "#,
    );

    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "feed_2024-05.tsv", "x\n");

    let (matcher, _) = TableMatcher::load(config.path());
    let mut session = session_with_matcher(tree.path(), matcher);

    let rows = session.visible_rows();
    let entry = rows
        .iter()
        .find_map(|r| match r {
            loadr::browse::Row::Entry(e) => Some(e),
            loadr::browse::Row::Parent => None,
        })
        .unwrap();

    // Both definitions are reported, in load order; nothing picks for us.
    let tables: Vec<_> = session
        .matches_for(entry)
        .iter()
        .map(|d| d.table.clone())
        .collect();
    assert_eq!(tables, vec!["FEED_A", "FEED_B"]);
}

#[test]
fn test_preview_workflow_returns_to_browsing() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "data.tsv", "h1\th2\nv1\tv2\nv3\tv4\n");

    let mut session = session_over(tree.path());
    move_to(&mut session, "data.tsv");
    session.handle(Key::Char('p'));

    assert_eq!(session.mode(), Mode::PreviewOpen);
    let preview = session.preview().unwrap();
    assert_eq!(preview.lines.len(), 3);
    assert!(preview.header[0].contains("data.tsv"));

    // Dismissing the preview has no side effects on the selection.
    session.handle(Key::Enter);
    assert_eq!(session.mode(), Mode::Browsing);
    assert_eq!(session.selection_len(), 0);
}

#[test]
fn test_cache_eviction_rescans_oldest_directory() {
    let root = TempDir::new().unwrap();
    let dirs: Vec<PathBuf> = (0..3)
        .map(|i| {
            let dir = root.path().join(format!("dir{i}"));
            fs::create_dir(&dir).unwrap();
            write_file(&dir, "seed.tsv", "x\n");
            dir
        })
        .collect();

    let mut cache = DirectoryCache::new(2);
    let options = ScanOptions::default();

    cache.get(&dirs[0], &options).unwrap();
    cache.get(&dirs[1], &options).unwrap();

    // A file lands in dir0 after it was cached.
    write_file(&dirs[0], "late.tsv", "y\n");

    // Inserting a third directory evicts dir0 (oldest inserted), so the next
    // get re-scans and sees the new file; dir1 stays cached and stale.
    cache.get(&dirs[2], &options).unwrap();
    assert!(!cache.contains(&dirs[0]));
    assert!(cache.contains(&dirs[1]));

    assert_eq!(cache.get(&dirs[0], &options).unwrap().entries.len(), 2);
}
