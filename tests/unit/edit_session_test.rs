//! Unit tests for the EditSession state machine:
//! Closed → Open (begin) → Closed (cancel), single-slot exclusivity.

use smartmark::controllers::edit_session::EditSession;
use smartmark::types::bookmark::Bookmark;

fn bookmark(id: &str, title: &str, url: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        user_id: "user-1".to_string(),
        created_at: 1,
    }
}

#[test]
fn test_default_is_closed() {
    let edit = EditSession::default();
    assert!(!edit.is_open());
    assert!(edit.buffer().is_none());
}

#[test]
fn test_begin_seeds_buffer_from_target() {
    let mut edit = EditSession::default();
    edit.begin(&bookmark("b1", "Rust", "https://rust-lang.org"));

    assert!(edit.is_open());
    assert!(edit.is_editing("b1"));
    let buf = edit.buffer().unwrap();
    assert_eq!(buf.target_id, "b1");
    assert_eq!(buf.title, "Rust");
    assert_eq!(buf.url, "https://rust-lang.org");
}

/// Only one edit target at a time: a second begin silently replaces the
/// open buffer, drafts included.
#[test]
fn test_begin_replaces_open_edit() {
    let mut edit = EditSession::default();
    edit.begin(&bookmark("b1", "Rust", "https://rust-lang.org"));
    edit.set_title("half-typed draft");

    edit.begin(&bookmark("b2", "Crates", "https://crates.io"));
    assert!(edit.is_editing("b2"));
    assert!(!edit.is_editing("b1"));
    assert_eq!(edit.buffer().unwrap().title, "Crates");
}

#[test]
fn test_cancel_discards_buffer() {
    let mut edit = EditSession::default();
    edit.begin(&bookmark("b1", "Rust", "https://rust-lang.org"));
    edit.set_url("typed-but-abandoned.org");

    edit.cancel();
    assert!(!edit.is_open());
    assert!(edit.buffer().is_none());
}

#[test]
fn test_draft_setters_mutate_open_buffer() {
    let mut edit = EditSession::default();
    edit.begin(&bookmark("b1", "Rust", "https://rust-lang.org"));

    edit.set_title("Rust Language");
    edit.set_url("rust-lang.org/learn");

    let buf = edit.buffer().unwrap();
    assert_eq!(buf.title, "Rust Language");
    assert_eq!(buf.url, "rust-lang.org/learn");
    // The target never changes through draft edits.
    assert_eq!(buf.target_id, "b1");
}

#[test]
fn test_draft_setters_are_noops_when_closed() {
    let mut edit = EditSession::default();
    edit.set_title("ghost");
    edit.set_url("ghost.org");
    assert!(!edit.is_open());
}
