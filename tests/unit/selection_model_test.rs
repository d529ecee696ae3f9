//! Unit tests for the SelectionModel public API: toggle, select-all
//! snapshot semantics, and pruning.

use smartmark::controllers::selection_model::SelectionModel;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_toggle_flips_membership() {
    let mut sel = SelectionModel::new();
    assert!(!sel.contains("a"));

    sel.toggle("a");
    assert!(sel.contains("a"));
    assert_eq!(sel.len(), 1);

    sel.toggle("a");
    assert!(!sel.contains("a"));
    assert!(sel.is_empty());
}

#[test]
fn test_toggle_all_selects_everything_when_partial() {
    let collection = ids(&["a", "b", "c"]);
    let mut sel = SelectionModel::new();
    sel.toggle("b");

    sel.toggle_all(&collection);
    assert_eq!(sel.ids(), ids(&["a", "b", "c"]));
}

#[test]
fn test_toggle_all_clears_when_full() {
    let collection = ids(&["a", "b"]);
    let mut sel = SelectionModel::new();
    sel.toggle("a");
    sel.toggle("b");

    sel.toggle_all(&collection);
    assert!(sel.is_empty());
}

/// Select-all captures a snapshot of current membership; it is not a
/// sticky "all" flag that expands with the collection.
#[test]
fn test_toggle_all_is_a_snapshot_not_a_flag() {
    let mut sel = SelectionModel::new();
    sel.toggle_all(&ids(&["a", "b"]));
    assert_eq!(sel.len(), 2);

    // Collection grew afterwards; the selection does not follow.
    let grown = ids(&["a", "b", "c"]);
    assert!(!sel.contains("c"));
    assert_eq!(sel.len(), 2);

    // A second toggle-all against the grown collection selects all three.
    sel.toggle_all(&grown);
    assert_eq!(sel.ids(), grown);
}

#[test]
fn test_prune_to_drops_stale_ids() {
    let mut sel = SelectionModel::new();
    sel.toggle("a");
    sel.toggle("b");
    sel.toggle("c");

    sel.prune_to(&ids(&["b", "d"]));
    assert_eq!(sel.ids(), ids(&["b"]));
}

#[test]
fn test_remove_and_clear() {
    let mut sel = SelectionModel::new();
    sel.toggle("a");
    sel.toggle("b");

    assert!(sel.remove("a"));
    assert!(!sel.remove("a"));
    assert_eq!(sel.len(), 1);

    sel.clear();
    assert!(sel.is_empty());
}
