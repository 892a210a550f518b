//! Integration tests for the view-state lifecycle: preferences persisting
//! through storage, chrome synchronization, and the derived projection.
//!
//! Each test creates its own in-memory SQLite database for isolation and
//! exercises the components the way the running app composes them.

use tokio::sync::mpsc;

use patrika::catalog::Catalog;
use patrika::chrome::{Chrome, ChromeEvent, TermChrome};
use patrika::config::Config;
use patrika::filter::{compute_view, EmptyReason, ViewMode, ViewState};
use patrika::prefs::{keys, PreferenceStore, TextSize};
use patrika::storage::Database;
use patrika::theme::ThemeVariant;

async fn test_db() -> Database {
    Database::open(":memory:").await.unwrap()
}

fn chrome() -> (TermChrome, mpsc::Receiver<ChromeEvent>) {
    let (tx, rx) = mpsc::channel(8);
    (TermChrome::new(tx), rx)
}

fn view(mode: ViewMode, query: &str) -> ViewState {
    ViewState {
        mode,
        query: query.to_string(),
    }
}

// ============================================================================
// Preference Persistence
// ============================================================================

#[tokio::test]
async fn session_preferences_survive_restart() {
    let db = test_db().await;
    let config = Config::default();
    let (mut ui, _rx) = chrome();

    // First session: flip everything away from defaults.
    let mut prefs = PreferenceStore::load(&config, Some(db.clone())).await;
    prefs.set_dark_mode(true, &mut ui).await;
    prefs.set_text_size(TextSize::Large, &mut ui).await;
    prefs.toggle_favorite("prothom-alo").await;
    prefs.toggle_favorite("daily-star").await;
    drop(prefs);

    // Second session: everything is back.
    let reloaded = PreferenceStore::load(&config, Some(db)).await;
    assert!(reloaded.dark_mode());
    assert_eq!(reloaded.text_size(), TextSize::Large);
    assert_eq!(reloaded.favorites(), ["prothom-alo", "daily-star"]);
}

#[tokio::test]
async fn corrupt_storage_degrades_to_defaults() {
    let db = test_db().await;
    db.set_preference(keys::FAVORITES, "{broken").await.unwrap();
    db.set_preference(keys::THEME, "sepia").await.unwrap();
    db.set_preference(keys::TEXT_SIZE, "enormous").await.unwrap();

    let prefs = PreferenceStore::load(&Config::default(), Some(db)).await;
    assert!(prefs.favorites().is_empty());
    assert!(!prefs.dark_mode());
    assert_eq!(prefs.text_size(), TextSize::Medium);
}

#[tokio::test]
async fn favorites_outlive_catalog_membership() {
    // A favorite whose id no longer exists in the catalog stays in storage
    // and is simply never displayed.
    let db = test_db().await;
    let mut prefs = PreferenceStore::load(&Config::default(), Some(db.clone())).await;
    prefs.toggle_favorite("long-retired-daily").await;
    prefs.toggle_favorite("ittefaq").await;

    let catalog = Catalog::bundled();
    let projection = compute_view(&catalog, prefs.favorites(), &view(ViewMode::Favorites, ""));
    let shown: Vec<&str> = projection.entries().map(|s| s.id).collect();
    assert_eq!(shown, ["ittefaq"]);

    // Storage still remembers the stale id for a future catalog.
    let stored = db.get_preference(keys::FAVORITES).await.unwrap().unwrap();
    assert!(stored.contains("long-retired-daily"));
}

// ============================================================================
// Projection over the Bundled Catalog
// ============================================================================

#[tokio::test]
async fn favorites_projection_follows_catalog_order() {
    let catalog = Catalog::bundled();
    let mut prefs = PreferenceStore::load(&Config::default(), Some(test_db().await)).await;

    // Favorite three sources in reverse catalog order.
    let picks: Vec<&str> = {
        let sources = catalog.sources();
        vec![
            sources[20].id,
            sources[5].id,
            sources[0].id,
        ]
    };
    for id in &picks {
        prefs.toggle_favorite(id).await;
    }

    let projection = compute_view(&catalog, prefs.favorites(), &view(ViewMode::Favorites, ""));
    let shown: Vec<&str> = projection.entries().map(|s| s.id).collect();
    assert_eq!(
        shown,
        [catalog.sources()[0].id, catalog.sources()[5].id, catalog.sources()[20].id]
    );
}

#[tokio::test]
async fn search_flattens_sectioned_browsing() {
    let catalog = Catalog::bundled();
    let projection = compute_view(&catalog, &[], &view(ViewMode::Sections, "prothom"));

    assert_eq!(projection.sections.len(), 1);
    assert_eq!(projection.sections[0].title, None);
    assert!(projection
        .entries()
        .all(|s| s.name.to_lowercase().contains("prothom")));
}

#[tokio::test]
async fn empty_states_stay_distinguishable() {
    let catalog = Catalog::bundled();

    // No favorites at all → "no favorites yet".
    let none = compute_view(&catalog, &[], &view(ViewMode::Favorites, ""));
    assert_eq!(none.empty, Some(EmptyReason::NoFavorites));

    // Only stale favorites → "no results".
    let stale = vec!["gone-1".to_string(), "gone-2".to_string()];
    let stale_view = compute_view(&catalog, &stale, &view(ViewMode::Favorites, ""));
    assert_eq!(stale_view.empty, Some(EmptyReason::NoMatches));

    // Hopeless query → "no results".
    let missed = compute_view(&catalog, &[], &view(ViewMode::All, "zzzzzz"));
    assert_eq!(missed.empty, Some(EmptyReason::NoMatches));
}

#[tokio::test]
async fn sections_never_render_empty_categories() {
    let catalog = Catalog::bundled();
    let projection = compute_view(&catalog, &[], &view(ViewMode::Sections, ""));
    assert!(!projection.sections.is_empty());
    assert!(projection.sections.iter().all(|s| !s.entries.is_empty()));
}

// ============================================================================
// Chrome Synchronization
// ============================================================================

#[tokio::test]
async fn theme_commit_reaches_chrome_in_same_call() {
    let db = test_db().await;
    let (mut ui, _rx) = chrome();
    let mut prefs = PreferenceStore::load(&Config::default(), Some(db)).await;

    prefs.set_dark_mode(true, &mut ui).await;
    assert_eq!(ui.variant(), ThemeVariant::Dark);

    prefs.set_dark_mode(false, &mut ui).await;
    assert_eq!(ui.variant(), ThemeVariant::Light);
}

#[tokio::test]
async fn fullscreen_round_trip_is_event_driven() {
    let (mut ui, mut rx) = chrome();
    let mut prefs = PreferenceStore::from_config(&Config::default());

    ui.request_fullscreen();
    // The preference flag is untouched until the event is observed.
    assert!(!prefs.fullscreen());

    match rx.recv().await.unwrap() {
        ChromeEvent::FullscreenChanged(on) => prefs.observe_fullscreen(on),
    }
    assert!(prefs.fullscreen());

    ui.exit_fullscreen();
    match rx.recv().await.unwrap() {
        ChromeEvent::FullscreenChanged(on) => prefs.observe_fullscreen(on),
    }
    assert!(!prefs.fullscreen());
}

#[tokio::test]
async fn startup_applies_loaded_preferences_to_chrome() {
    let db = test_db().await;
    db.set_preference(keys::THEME, "dark").await.unwrap();
    db.set_preference(keys::TEXT_SIZE, "small").await.unwrap();

    let prefs = PreferenceStore::load(&Config::default(), Some(db)).await;
    let (mut ui, _rx) = chrome();
    prefs.apply_to_chrome(&mut ui);

    assert_eq!(ui.variant(), ThemeVariant::Dark);
    assert_eq!(ui.text_size(), TextSize::Small);
}
