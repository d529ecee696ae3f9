//! Smartmark — a personal bookmark manager core with live synchronization.
//!
//! Entry point: walks the full session lifecycle on a shared in-memory
//! store with two concurrent sessions, demonstrating the push-based
//! change feed. Point `SMARTMARK_API_URL` / `SMARTMARK_API_KEY` at a
//! PostgREST-style service to use the HTTP store in your own wiring.

use smartmark::auth::MemoryAuth;
use smartmark::session::Session;
use smartmark::store::memory::MemoryStore;
use smartmark::store::rest::RestConfig;
use smartmark::types::user::User;
use tracing_subscriber::EnvFilter;

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    println!("Smartmark v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    match RestConfig::from_env() {
        Some(cfg) => println!("  Remote store configured at {} (demo still runs in-memory)", cfg.base_url),
        None => println!("  No remote store configured; running against the in-memory store"),
    }
    println!();

    let store = MemoryStore::new();
    let user = User {
        id: "user-1".to_string(),
        email: "demo@example.com".to_string(),
    };

    section("Auth gate");
    let denied = Session::establish(MemoryAuth::signed_out(), store.clone(), &store).await;
    println!("  Establish without a user: {}", denied.err().map(|e| e.to_string()).unwrap_or_default());

    section("Session lifecycle");
    let mut session = Session::establish(MemoryAuth::signed_in(user.clone()), store.clone(), &store)
        .await
        .expect("establish should succeed with a signed-in user");
    println!("  Established session for {}", session.user().email);

    session.controller_mut().add("Rust", "rust-lang.org").await.unwrap();
    session.controller_mut().add("Crates", "https://crates.io").await.unwrap();
    session.controller_mut().add("Docs", "docs.rs").await.unwrap();
    let reloads = session.process_pending_changes().await.unwrap();
    println!("  Added 3 bookmarks, {} feed-triggered reloads", reloads);
    for b in session.controller().bookmarks() {
        println!("    {} -> {}", b.title, b.url);
    }

    section("Second session sees the same collection");
    let mut other = Session::establish(MemoryAuth::signed_in(user.clone()), store.clone(), &store)
        .await
        .unwrap();
    println!("  Second session sees {} bookmarks", other.controller().bookmarks().len());

    let first_id = session.controller().bookmarks()[0].id.clone();
    session.controller_mut().begin_edit(&first_id);
    session.controller_mut().set_draft_title("Docs.rs");
    session.controller_mut().set_draft_url("docs.rs/releases");
    session.controller_mut().commit_edit().await.unwrap();
    other.process_pending_changes().await.unwrap();
    println!(
        "  Edit propagated: second session now sees '{}'",
        other.controller().bookmarks()[0].title
    );

    section("Batch delete");
    session.controller_mut().toggle_select_all();
    let selected = session.controller().selection().ids();
    let report = session.controller_mut().remove_many(&selected).await.unwrap();
    println!(
        "  Deleted {} bookmarks, {} failed, selection now {}",
        report.requested,
        report.failed_ids.len(),
        session.controller().selection().len()
    );
    other.process_pending_changes().await.unwrap();
    println!("  Second session sees {} bookmarks", other.controller().bookmarks().len());

    section("Sign out");
    session.sign_out().await.unwrap();
    other.sign_out().await.unwrap();
    println!("  Both sessions torn down");
    println!();
}
