mod common;

use std::collections::HashSet;

use common::{bury_at, new_store};
use crypt_core::ops::snippet_ops;
use crypt_core::{resolve_restore_target, CryptError, SnippetId, SnippetStore};

// ===== BURY =====

#[test]
fn test_bury_then_list_contains_one_matching_snippet() {
    let mut store = new_store();

    let buried = snippet_ops::bury(
        &mut store,
        "/a/b.ts",
        10,
        "return x+1;",
        Some("dead branch".to_string()),
    )
    .unwrap();

    let all = snippet_ops::list(&store);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], buried);
    assert_eq!(all[0].code, "return x+1;");
    assert_eq!(all[0].file_path, "/a/b.ts");
    assert_eq!(all[0].file_name, "b.ts");
    assert_eq!(all[0].line, 10);
    assert_eq!(all[0].reason.as_deref(), Some("dead branch"));
}

#[test]
fn test_bury_whitespace_fails_and_stores_nothing() {
    let mut store = new_store();
    bury_at(&mut store, "/a/b.ts", 0, "keep me");

    let result = snippet_ops::bury(&mut store, "/a/b.ts", 3, "   ", None);

    assert_eq!(result, Err(CryptError::EmptyContent));
    assert_eq!(store.snippets().len(), 1);
}

#[test]
fn test_ids_are_distinct_for_rapid_burials() {
    let mut store = new_store();

    for i in 0..500 {
        bury_at(&mut store, "/a/b.ts", i % 7, "same code");
    }

    let ids: HashSet<&SnippetId> = store.snippets().iter().map(|s| &s.id).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_bury_persistence_failure_leaves_collection_unchanged() {
    let mut store = new_store();
    bury_at(&mut store, "/a/b.ts", 0, "first");
    store.fail_writes(true);

    let result = snippet_ops::bury(&mut store, "/a/b.ts", 1, "second", None);

    assert!(matches!(result, Err(CryptError::Persistence { .. })));
    assert_eq!(store.snippets().len(), 1);
    assert_eq!(store.snippets()[0].code, "first");
}

// ===== FIND AT =====

#[test]
fn test_find_at_prefers_earliest_burial() {
    let mut store = new_store();
    let s1 = bury_at(&mut store, "/a/b.ts", 4, "first");
    let _s2 = bury_at(&mut store, "/a/b.ts", 4, "second");

    let found = snippet_ops::find_at(&store, "/a/b.ts", 4).unwrap();
    assert_eq!(found.id, s1.id);
}

#[test]
fn test_find_at_requires_exact_path_and_line() {
    let mut store = new_store();
    bury_at(&mut store, "/a/b.ts", 4, "code");

    assert!(snippet_ops::find_at(&store, "/a/b.ts", 5).is_none());
    assert!(snippet_ops::find_at(&store, "/a/c.ts", 4).is_none());
}

// ===== RESURRECT =====

#[test]
fn test_resurrect_scenario_appends_on_short_document() {
    let mut store = new_store();
    let buried = bury_at(&mut store, "/a/b.ts", 10, "return x+1;");
    assert_eq!(store.snippets().len(), 1);
    assert_eq!(buried.file_name, "b.ts");

    let restored = snippet_ops::resurrect(&mut store, &buried.id).unwrap();

    assert!(store.snippets().is_empty());
    assert_eq!(restored, buried);
    assert_eq!(resolve_restore_target(&restored, 5), 5);
}

#[test]
fn test_resurrect_unknown_id_is_not_found() {
    let mut store = new_store();
    bury_at(&mut store, "/a/b.ts", 0, "code");

    let missing = SnippetId::from_string("missing");
    let result = snippet_ops::resurrect(&mut store, &missing);

    assert_eq!(
        result,
        Err(CryptError::SnippetNotFound {
            snippet_id: missing
        })
    );
    assert_eq!(store.snippets().len(), 1);
}

#[test]
fn test_resurrect_failed_write_keeps_snippet() {
    let mut store = new_store();
    let s = bury_at(&mut store, "/a/b.ts", 0, "code");
    store.fail_writes(true);

    assert!(snippet_ops::resurrect(&mut store, &s.id).is_err());
    assert!(snippet_ops::get(&store, &s.id).is_some());
}

// ===== DELETE =====

#[test]
fn test_delete_is_idempotent() {
    let mut store = new_store();
    let keep = bury_at(&mut store, "/a/b.ts", 0, "keep");
    let gone = bury_at(&mut store, "/a/b.ts", 1, "gone");

    snippet_ops::delete(&mut store, &gone.id).unwrap();
    snippet_ops::delete(&mut store, &gone.id).unwrap();

    let all = snippet_ops::list(&store);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

// ===== RENAME RECONCILIATION =====

#[test]
fn test_reconcile_rename_scenario() {
    let mut store = new_store();
    let s = bury_at(&mut store, "/a/b.ts", 2, "code");
    let other = bury_at(&mut store, "/a/other.ts", 2, "other");

    let changed = snippet_ops::reconcile_rename(&mut store, "/a/b.ts", "/a/c.ts").unwrap();
    assert_eq!(changed, 1);

    let moved = snippet_ops::get(&store, &s.id).unwrap();
    assert_eq!(moved.file_path, "/a/c.ts");
    assert_eq!(moved.file_name, "c.ts");
    assert_eq!(moved.line, 2);
    assert_eq!(moved.timestamp, s.timestamp);

    let untouched = snippet_ops::get(&store, &other.id).unwrap();
    assert_eq!(untouched, other);

    let second = snippet_ops::reconcile_rename(&mut store, "/a/b.ts", "/a/c.ts").unwrap();
    assert_eq!(second, 0);
    assert_eq!(snippet_ops::get(&store, &s.id).unwrap().file_path, "/a/c.ts");
}

#[test]
fn test_reconcile_rename_moves_every_matching_snippet() {
    let mut store = new_store();
    bury_at(&mut store, "/a/b.ts", 1, "one");
    bury_at(&mut store, "/a/b.ts", 8, "two");

    let changed = snippet_ops::reconcile_rename(&mut store, "/a/b.ts", "/z/b2.ts").unwrap();

    assert_eq!(changed, 2);
    assert!(snippet_ops::snippets_for_file(&store, "/a/b.ts").is_empty());
    assert_eq!(snippet_ops::snippets_for_file(&store, "/z/b2.ts").len(), 2);
}

#[test]
fn test_reconcile_rename_preserves_order() {
    let mut store = new_store();
    let a = bury_at(&mut store, "/a/b.ts", 1, "a");
    let b = bury_at(&mut store, "/a/x.ts", 1, "b");
    let c = bury_at(&mut store, "/a/b.ts", 1, "c");

    snippet_ops::reconcile_rename(&mut store, "/a/b.ts", "/a/c.ts").unwrap();

    let ids: Vec<SnippetId> = snippet_ops::list(&store).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}
